use thiserror::Error;

/// Why waiting on a signal failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WaitError {
	/// The signal's discrete stream ended, so it can't change anymore. (Constant signals do this right away.)
	#[error("signal stopped changing before the awaited value was observed")]
	Ended,
}

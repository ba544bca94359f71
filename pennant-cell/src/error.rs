use thiserror::Error;

/// A registered waiter was dropped by the update that owned it, without being fulfilled.
///
/// This happens only if that update unwound part-way through fulfilment
/// (for example because cloning the new value panicked), or if the cell itself
/// was dropped while the waiter was pending.
///
/// The cell's version has always advanced past the waiter's registration version when this is observed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("waiter was abandoned before it could be fulfilled")]
pub struct Abandoned;

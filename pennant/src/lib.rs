#![warn(clippy::pedantic)]
#![warn(unreachable_pub)]
//! Versioned signals that can be sampled, awaited and updated atomically from any thread.
//!
//! A [`SignalCell`] holds one value. Writers replace it through [`Signal`] operations, each of
//! which is a single atomic step that advances the cell's [`Version`] by one. Readers either
//! sample the current value ([`ReadSignal::continuous`]) or await changes ([`ReadSignal::discrete`]).
//!
//! ```
//! use futures_lite::{future::block_on, StreamExt};
//! use pennant::{prelude::*, SignalCell};
//!
//! let cell = SignalCell::new(0);
//! let mut discrete = cell.discrete();
//! assert_eq!(block_on(discrete.next()), Some(0));
//!
//! // Updates between two pulls coalesce into the latest one.
//! cell.set(1);
//! cell.set(2);
//! assert_eq!(block_on(discrete.next()), Some(2));
//!
//! // Views delegate to their source.
//! let text = cell.clone().imap(|n: &i32| n.to_string(), |s: String| s.parse().unwrap_or_default());
//! text.set("7".to_string());
//! assert_eq!(cell.get(), 7);
//! assert_eq!(text.get(), "7");
//! ```
//!
//! # Threading Notes
//!
//! Update closures run while the cell is locked. They **must not** access the same signal.

mod constant;
mod continuous;
mod discrete;
mod imap;
mod map;
mod signal_cell;
mod stream;
mod traits;

pub use constant::{constant, Constant};
pub use continuous::Continuous;
pub use discrete::Discrete;
pub use imap::Imap;
pub use map::Map;
pub use pennant_cell::{Abandoned, Change, Version};
pub use signal_cell::{ReadOnly, SignalCell};
pub use stream::{Changes, Mapped};
pub use traits::{ReadSignal, Signal};

/// Low-level access to the state cell backing [`SignalCell`].
pub mod raw {
	pub use pennant_cell::raw::{Pending, Registration, StateCell, Updated, WaiterId};
}

/// Signal traits, for method resolution.
pub mod prelude {
	pub use crate::traits::{ReadSignal, Signal};
}

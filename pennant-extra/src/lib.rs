#![warn(clippy::pedantic)]
#![warn(unreachable_pub)]
//! Adapters between `pennant` signals and plain futures/streams.

mod error;
mod hold;

pub mod future;

pub use error::WaitError;
pub use hold::{hold, Hold, HOLD_BUDGET};

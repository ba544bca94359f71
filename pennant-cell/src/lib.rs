#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
//! `pennant-cell` is the versioned state cell backing `pennant`.
//!
//! A [`StateCell`](`raw::StateCell`) holds a value, a [`Version`] and the set of waiters
//! that are to be fulfilled by the *next* update. All three are only ever accessed together,
//! under one short-held lock, so that "check version" and "register waiter" cannot drift apart.
//!
//! # Threading Notes
//!
//! Update transforms run *inside* the critical section.
//! They **must not** access the same cell again, or the calling thread deadlocks.
//!
//! Waiters are fulfilled *outside* of the critical section, but always before the update
//! that caused the fulfilment returns.

mod change;
mod error;
mod version;

pub mod raw;

pub use change::Change;
pub use error::Abandoned;
pub use version::Version;

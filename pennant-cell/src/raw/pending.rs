use std::{
	future::Future,
	pin::Pin,
	sync::Weak,
	task::{Context, Poll},
};

use futures_channel::oneshot;
use tracing::debug;

use super::StateCell;
use crate::{Abandoned, Version};

/// Identifies a registered waiter within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaiterId(pub(super) u64);

/// The result of [`StateCell::register`].
#[derive(Debug)]
pub enum Registration<T> {
	/// A waiter was registered. It resolves with the state installed by the next update.
	Waiting(Pending<T>),
	/// The cell had already moved on. Carries the current state, nothing was registered.
	Advanced(T, Version),
}

/// A registered waiter, as [`Future`].
///
/// Dropping an unresolved [`Pending`] removes its waiter from the cell,
/// so a cancelled consumer never leaves a registration behind.
#[derive(Debug)]
#[must_use = "Dropping a `Pending` deregisters it immediately."]
pub struct Pending<T> {
	cell: Weak<StateCell<T>>,
	id: WaiterId,
	receiver: oneshot::Receiver<(T, Version)>,
	settled: bool,
}

impl<T> Pending<T> {
	pub(super) fn new(
		cell: Weak<StateCell<T>>,
		id: WaiterId,
		receiver: oneshot::Receiver<(T, Version)>,
	) -> Self {
		Self {
			cell,
			id,
			receiver,
			settled: false,
		}
	}

	/// The id this waiter is registered under.
	pub fn id(&self) -> WaiterId {
		self.id
	}
}

impl<T> Future for Pending<T> {
	type Output = Result<(T, Version), Abandoned>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		let received = match Pin::new(&mut self.receiver).poll(cx) {
			Poll::Ready(received) => received,
			Poll::Pending => return Poll::Pending,
		};
		self.settled = true;
		Poll::Ready(received.map_err(|oneshot::Canceled| {
			debug!(id = ?self.id, "waiter abandoned");
			Abandoned
		}))
	}
}

impl<T> Drop for Pending<T> {
	fn drop(&mut self) {
		if self.settled {
			return;
		}
		// Already fulfilled but not yet polled: deregistration finds nothing, and the value is discarded.
		if let Some(cell) = self.cell.upgrade() {
			if cell.deregister(self.id) {
				debug!(id = ?self.id, "cancelled waiter");
			}
		}
	}
}

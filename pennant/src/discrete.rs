use std::{
	fmt::{self, Debug, Formatter},
	future::Future,
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use futures_lite::Stream;
use pennant_cell::{
	raw::{Pending, Registration, StateCell},
	Abandoned, Version,
};
use pin_project::pin_project;
use tracing::warn;

/// The stream returned by [`ReadSignal::discrete`](`crate::ReadSignal::discrete`) for cell-backed signals.
///
/// Never ends on its own.
#[pin_project]
#[must_use = "Streams do nothing unless polled."]
pub struct Discrete<T> {
	cell: Arc<StateCell<T>>,
	initial: Option<T>,
	last_seen: Version,
	pending: Option<Pending<T>>,
}

impl<T: Debug> Debug for Discrete<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Discrete")
			.field("initial", &self.initial)
			.field("last_seen", &self.last_seen)
			.field("waiting", &self.pending.is_some())
			.finish_non_exhaustive()
	}
}

impl<T: Clone> Discrete<T> {
	/// Starts with the current value.
	pub(crate) fn new(cell: Arc<StateCell<T>>) -> Self {
		let (initial, last_seen) = cell.get_versioned();
		Self {
			cell,
			initial: Some(initial),
			last_seen,
			pending: None,
		}
	}

	/// Starts after the current value, which is returned separately.
	pub(crate) fn updates(cell: Arc<StateCell<T>>) -> (T, Self) {
		let (current, last_seen) = cell.get_versioned();
		(
			current,
			Self {
				cell,
				initial: None,
				last_seen,
				pending: None,
			},
		)
	}
}

impl<T> Discrete<T> {
	/// The version of the most recently emitted (or skipped-over) value.
	pub fn last_seen(&self) -> Version {
		self.last_seen
	}
}

impl<T: Clone> Stream for Discrete<T> {
	type Item = T;

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
		let this = self.project();
		if let Some(initial) = this.initial.take() {
			return Poll::Ready(Some(initial));
		}

		loop {
			let mut pending = match this.pending.take() {
				Some(pending) => pending,
				None => match this.cell.register(*this.last_seen) {
					Registration::Waiting(pending) => pending,
					Registration::Advanced(value, version) => {
						*this.last_seen = version;
						return Poll::Ready(Some(value));
					}
				},
			};

			let received = match Pin::new(&mut pending).poll(cx) {
				Poll::Ready(received) => received,
				Poll::Pending => {
					*this.pending = Some(pending);
					return Poll::Pending;
				}
			};
			match received {
				Ok((value, version)) => {
					*this.last_seen = version;
					return Poll::Ready(Some(value));
				}
				// The cell has moved on regardless, so registering again reports its current state.
				Err(Abandoned) => warn!(last_seen = %this.last_seen, "discrete pull lost its waiter, resampling"),
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(usize::from(self.initial.is_some()), None)
	}
}

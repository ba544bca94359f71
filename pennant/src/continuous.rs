use std::{
	fmt::{self, Debug, Formatter},
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use futures_lite::Stream;
use pennant_cell::raw::StateCell;

/// The stream returned by [`ReadSignal::continuous`](`crate::ReadSignal::continuous`) for cell-backed signals.
///
/// Always ready, never ends.
#[must_use = "Streams do nothing unless polled."]
pub struct Continuous<T> {
	cell: Arc<StateCell<T>>,
}

impl<T> Continuous<T> {
	pub(crate) fn new(cell: Arc<StateCell<T>>) -> Self {
		Self { cell }
	}
}

impl<T: Debug> Debug for Continuous<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Continuous").field(&self.cell).finish()
	}
}

impl<T: Clone> Stream for Continuous<T> {
	type Item = T;

	fn poll_next(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<T>> {
		Poll::Ready(Some(self.cell.get()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(usize::MAX, None)
	}
}

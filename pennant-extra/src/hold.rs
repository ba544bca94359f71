use std::{
	future::Future,
	pin::Pin,
	task::{Context, Poll},
};

use futures_lite::{ready, Stream};
use pennant::Signal;
use pin_project::pin_project;
use tracing::trace;

/// How many items [`Hold`] writes per poll before yielding.
pub const HOLD_BUDGET: usize = 32;

/// Drives `signal` from `stream`: each item is [`set`](`Signal::set`) as the signal's new value.
///
/// The returned future resolves with the number of items written once `stream` ends.
/// Dropping it stops forwarding; the signal keeps whatever was written last.
///
/// At most [`HOLD_BUDGET`] items are written per poll. After that, the future wakes itself
/// and yields, so an always-ready stream (like a [`continuous`](`pennant::ReadSignal::continuous`)
/// one) doesn't monopolise the executor.
pub fn hold<S, St>(signal: S, stream: St) -> Hold<S, St>
where
	St: Stream,
	S: Signal<St::Item>,
{
	Hold {
		signal,
		stream,
		written: 0,
	}
}

/// See [`hold`].
#[pin_project]
#[derive(Debug)]
#[must_use = "Futures do nothing unless polled."]
pub struct Hold<S, St> {
	signal: S,
	#[pin]
	stream: St,
	written: usize,
}

impl<S, St> Hold<S, St> {
	/// The signal being written to.
	pub fn signal(&self) -> &S {
		&self.signal
	}
}

impl<S, St> Future for Hold<S, St>
where
	St: Stream,
	S: Signal<St::Item>,
{
	type Output = usize;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<usize> {
		let mut this = self.project();
		for _ in 0..HOLD_BUDGET {
			let Some(item) = ready!(this.stream.as_mut().poll_next(cx)) else {
				trace!(written = *this.written, "held stream ended");
				return Poll::Ready(*this.written);
			};
			this.signal.set(item);
			*this.written += 1;
		}
		cx.waker().wake_by_ref();
		Poll::Pending
	}
}

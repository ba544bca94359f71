use std::{
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use futures_lite::Stream;
use pin_project::pin_project;

/// A signal stream with each element passed through a view's mapping.
#[pin_project]
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled."]
pub struct Mapped<St, F> {
	#[pin]
	inner: St,
	f: Arc<F>,
}

impl<St, F> Mapped<St, F> {
	pub(crate) fn new(inner: St, f: Arc<F>) -> Self {
		Self { inner, f }
	}
}

impl<St: Stream, U, F: Fn(&St::Item) -> U> Stream for Mapped<St, F> {
	type Item = U;

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<U>> {
		let this = self.project();
		let f = &**this.f;
		this.inner.poll_next(cx).map(|item| item.map(|item| f(&item)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

/// Reports each element of a [`discrete`](`crate::ReadSignal::discrete`) stream as `()`.
#[pin_project]
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled."]
pub struct Changes<St> {
	#[pin]
	inner: St,
}

impl<St> Changes<St> {
	pub(crate) fn new(inner: St) -> Self {
		Self { inner }
	}

	/// The underlying value stream.
	pub fn into_inner(self) -> St {
		self.inner
	}
}

impl<St: Stream> Stream for Changes<St> {
	type Item = ();

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<()>> {
		self.project()
			.inner
			.poll_next(cx)
			.map(|item| item.map(drop))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

use futures_lite::stream::{self, Empty, Repeat};

use crate::ReadSignal;

/// A read-only signal that never changes.
///
/// Its [`discrete`](`ReadSignal::discrete`) and [`changes`](`ReadSignal::changes`) streams end immediately,
/// its [`continuous`](`ReadSignal::continuous`) stream repeats the value forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constant<T>(T);

impl<T> Constant<T> {
	/// Wraps `value`.
	pub fn new(value: T) -> Self {
		Self(value)
	}

	/// Unwraps the value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

/// Shorthand for [`Constant::new`].
pub fn constant<T>(value: T) -> Constant<T> {
	Constant(value)
}

impl<T: Clone + Unpin> ReadSignal<T> for Constant<T> {
	type Discrete = Empty<T>;
	type Continuous = Repeat<T>;

	fn get(&self) -> T {
		self.0.clone()
	}

	fn discrete(&self) -> Empty<T> {
		stream::empty()
	}

	fn get_and_discrete_updates(&self) -> (T, Empty<T>) {
		(self.0.clone(), stream::empty())
	}

	fn continuous(&self) -> Repeat<T> {
		stream::repeat(self.0.clone())
	}
}

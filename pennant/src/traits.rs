use futures_lite::Stream;

use crate::{stream::Changes, Change, Imap, Map};

/// The read-only facet of a signal.
///
/// Read-only collaborators **should** depend on this trait rather than on [`Signal`].
pub trait ReadSignal<T> {
	/// See [`ReadSignal::discrete`].
	type Discrete: Stream<Item = T> + Unpin;
	/// See [`ReadSignal::continuous`].
	type Continuous: Stream<Item = T> + Unpin;

	/// A clone of the current value.
	fn get(&self) -> T;

	/// Emits the current value first, then the value of each following update.
	///
	/// Pulling suspends until the signal changes.
	/// Updates that happen between two pulls are coalesced into the latest one,
	/// and no version is ever emitted twice.
	///
	/// A pull that suspended leaves its waiter with the stream, even if the `next()` future is dropped.
	/// The following pull then yields the *first* update after the suspension, not the latest one.
	///
	/// Each call returns an independent stream. Only dropping the stream removes its waiter.
	fn discrete(&self) -> Self::Discrete;

	/// The current value together with a [`discrete`](`ReadSignal::discrete`)-style stream that
	/// starts *after* it.
	///
	/// The first element of the stream belongs to the first update after the returned value,
	/// with nothing in between unobserved.
	fn get_and_discrete_updates(&self) -> (T, Self::Discrete);

	/// Emits the current value on each pull, without ever suspending.
	///
	/// This is a sampling stream. It may repeat values, and skip updates.
	fn continuous(&self) -> Self::Continuous;

	/// Like [`discrete`](`ReadSignal::discrete`), but only reports *that* something happened.
	fn changes(&self) -> Changes<Self::Discrete> {
		Changes::new(self.discrete())
	}

	/// A read-only view of this signal, with each value passed through `f`.
	fn map<U, F>(self, f: F) -> Map<Self, T, F>
	where
		Self: Sized,
		F: Fn(&T) -> U,
	{
		Map::new(self, f)
	}
}

/// The mutable facet of a signal.
///
/// Each operation is one atomic step: it observes the current value,
/// installs a new one and advances the version by exactly one.
/// Pending [`discrete`](`ReadSignal::discrete`) pulls are woken before it returns.
pub trait Signal<T>: ReadSignal<T> {
	/// Replaces the value with the first half of `f`'s result and returns the change along with the second half.
	///
	/// This is the general update. The others are implemented with it.
	fn modify2<R>(&self, f: impl FnOnce(&T) -> (T, R)) -> (Change<T>, R);

	/// Replaces the value with `f`'s result iff that is [`Some`].
	///
	/// [`None`] leaves value and version as they are, and wakes nobody.
	fn try_modify(&self, f: impl FnOnce(&T) -> Option<T>) -> Option<Change<T>>;

	/// Replaces the value.
	fn set(&self, value: T) {
		self.modify2(|_| (value, ()));
	}

	/// Replaces the value with `f`'s result.
	fn modify(&self, f: impl FnOnce(&T) -> T) -> Change<T> {
		self.modify2(|value| (f(value), ())).0
	}

	/// Advances the version and notifies observers without changing the value.
	///
	/// Use this when something the value stands for changed, but the value itself didn't.
	fn refresh(&self) -> Change<T>
	where
		T: Clone,
	{
		self.modify(T::clone)
	}

	/// Replaces the value and returns the previous one.
	fn get_and_set(&self, value: T) -> T {
		self.modify2(|_| (value, ())).0.previous
	}

	/// Replaces the value with `f`'s result, discarding the change.
	fn update(&self, f: impl FnOnce(&T) -> T) {
		self.modify(f);
	}

	/// Replaces the value with `f`'s result and returns the new value.
	fn update_and_get(&self, f: impl FnOnce(&T) -> T) -> T {
		self.modify(f).now
	}

	/// A signal over `U` that shares this signal's state.
	///
	/// Reads go through `f`, writes through `g`.
	/// `g(f(a))` **should** be equivalent to `a`, or updates through the view will alter the value unexpectedly.
	fn imap<U, F, G>(self, f: F, g: G) -> Imap<Self, T, F, G>
	where
		Self: Sized,
		F: Fn(&T) -> U,
		G: Fn(U) -> T,
	{
		Imap::new(self, f, g)
	}
}

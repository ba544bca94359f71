use std::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
	sync::Arc,
};

use crate::{stream::Mapped, Change, ReadSignal, Signal};

/// A signal over `U` that delegates to a source signal over `T`.
///
/// Has no state of its own: versioning, atomicity and waiters are the source's.
///
/// See [`Signal::imap`].
pub struct Imap<S, T, F, G> {
	source: S,
	f: Arc<F>,
	g: Arc<G>,
	_phantom: PhantomData<fn(&T)>,
}

impl<S: Clone, T, F, G> Clone for Imap<S, T, F, G> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			f: Arc::clone(&self.f),
			g: Arc::clone(&self.g),
			_phantom: PhantomData,
		}
	}
}

impl<S: Debug, T, F, G> Debug for Imap<S, T, F, G> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Imap")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

impl<S, T, F, G> Imap<S, T, F, G> {
	pub(crate) fn new(source: S, f: F, g: G) -> Self {
		Self {
			source,
			f: Arc::new(f),
			g: Arc::new(g),
			_phantom: PhantomData,
		}
	}

	/// The signal this view delegates to.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Discards the mapping.
	pub fn into_source(self) -> S {
		self.source
	}
}

impl<S, T, U, F, G> ReadSignal<U> for Imap<S, T, F, G>
where
	S: ReadSignal<T>,
	F: Fn(&T) -> U,
{
	type Discrete = Mapped<S::Discrete, F>;
	type Continuous = Mapped<S::Continuous, F>;

	fn get(&self) -> U {
		(self.f)(&self.source.get())
	}

	fn discrete(&self) -> Self::Discrete {
		Mapped::new(self.source.discrete(), Arc::clone(&self.f))
	}

	fn get_and_discrete_updates(&self) -> (U, Self::Discrete) {
		let (current, updates) = self.source.get_and_discrete_updates();
		((self.f)(&current), Mapped::new(updates, Arc::clone(&self.f)))
	}

	fn continuous(&self) -> Self::Continuous {
		Mapped::new(self.source.continuous(), Arc::clone(&self.f))
	}
}

impl<S, T, U, F, G> Signal<U> for Imap<S, T, F, G>
where
	S: Signal<T>,
	F: Fn(&T) -> U,
	G: Fn(U) -> T,
{
	fn modify2<R>(&self, h: impl FnOnce(&U) -> (U, R)) -> (Change<U>, R) {
		let (f, g) = (&*self.f, &*self.g);
		let (change, output) = self.source.modify2(|value| {
			let (next, output) = h(&f(value));
			(g(next), output)
		});
		(change.map(|value| f(&value)), output)
	}

	fn try_modify(&self, h: impl FnOnce(&U) -> Option<U>) -> Option<Change<U>> {
		let (f, g) = (&*self.f, &*self.g);
		self.source
			.try_modify(|value| h(&f(value)).map(g))
			.map(|change| change.map(|value| f(&value)))
	}

	fn set(&self, value: U) {
		self.source.set((self.g)(value));
	}
}

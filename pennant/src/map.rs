use std::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
	sync::Arc,
};

use crate::{stream::Mapped, ReadSignal};

/// A read-only signal over `U`, computed on demand from a source signal over `T`.
///
/// See [`ReadSignal::map`].
pub struct Map<S, T, F> {
	source: S,
	f: Arc<F>,
	_phantom: PhantomData<fn(&T)>,
}

impl<S: Clone, T, F> Clone for Map<S, T, F> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			f: Arc::clone(&self.f),
			_phantom: PhantomData,
		}
	}
}

impl<S: Debug, T, F> Debug for Map<S, T, F> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Map")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

impl<S, T, F> Map<S, T, F> {
	pub(crate) fn new(source: S, f: F) -> Self {
		Self {
			source,
			f: Arc::new(f),
			_phantom: PhantomData,
		}
	}
}

impl<S, T, U, F> ReadSignal<U> for Map<S, T, F>
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

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use pennant_cell::{
	raw::{StateCell, Updated},
	Change, Version,
};

use crate::{Continuous, Discrete, ReadSignal, Signal};

/// A mutable signal that owns its state.
///
/// Clones share that state: an update through any clone is observed through all of them.
pub struct SignalCell<T> {
	cell: Arc<StateCell<T>>,
}

impl<T> Clone for SignalCell<T> {
	fn clone(&self) -> Self {
		Self {
			cell: Arc::clone(&self.cell),
		}
	}
}

impl<T: Debug> Debug for SignalCell<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SignalCell").field(&self.cell).finish()
	}
}

impl<T: Default> Default for SignalCell<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T> From<StateCell<T>> for SignalCell<T> {
	fn from(cell: StateCell<T>) -> Self {
		Self {
			cell: Arc::new(cell),
		}
	}
}

impl<T> SignalCell<T> {
	/// Creates a new signal at [`Version::INITIAL`].
	pub fn new(initial_value: T) -> Self {
		StateCell::new(initial_value).into()
	}

	/// The current version. It advances by one with each update.
	pub fn version(&self) -> Version {
		self.cell.version()
	}

	/// How many [`discrete`](`ReadSignal::discrete`) pulls are currently suspended on this signal.
	pub fn waiting(&self) -> usize {
		self.cell.waiting()
	}

	/// Calls `f` with a borrow of the current value, without cloning it.
	///
	/// The signal **must not** be updated from within `f`.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.cell.with(|value, _| f(value))
	}

	/// A handle that can observe this signal, but not update it.
	pub fn read_only(&self) -> ReadOnly<T> {
		ReadOnly(self.clone())
	}

	/// The backing state cell.
	pub fn raw(&self) -> &Arc<StateCell<T>> {
		&self.cell
	}
}

impl<T: Clone> SignalCell<T> {
	/// The current value and its version, observed together.
	pub fn get_versioned(&self) -> (T, Version) {
		self.cell.get_versioned()
	}

	/// The atomic update all other updates reduce to, with access to the version being replaced.
	pub fn atomic_update<R>(&self, transform: impl FnOnce(&T, Version) -> (T, R)) -> Updated<T, R> {
		self.cell.update(transform)
	}
}

impl<T: Clone> ReadSignal<T> for SignalCell<T> {
	type Discrete = Discrete<T>;
	type Continuous = Continuous<T>;

	fn get(&self) -> T {
		self.cell.get()
	}

	fn discrete(&self) -> Discrete<T> {
		Discrete::new(Arc::clone(&self.cell))
	}

	fn get_and_discrete_updates(&self) -> (T, Discrete<T>) {
		Discrete::updates(Arc::clone(&self.cell))
	}

	fn continuous(&self) -> Continuous<T> {
		Continuous::new(Arc::clone(&self.cell))
	}
}

impl<T: Clone> Signal<T> for SignalCell<T> {
	fn modify2<R>(&self, f: impl FnOnce(&T) -> (T, R)) -> (Change<T>, R) {
		let updated = self.cell.update(|value, _| f(value));
		(updated.change, updated.output)
	}

	fn try_modify(&self, f: impl FnOnce(&T) -> Option<T>) -> Option<Change<T>> {
		self.cell
			.try_update(|value, _| f(value).map(|next| (next, ())))
			.map(|updated| updated.change)
	}
}

/// A read-only handle to a [`SignalCell`].
///
/// See [`SignalCell::read_only`].
pub struct ReadOnly<T>(SignalCell<T>);

impl<T> Clone for ReadOnly<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<T: Debug> Debug for ReadOnly<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadOnly").field(&self.0.cell).finish()
	}
}

impl<T> ReadOnly<T> {
	/// See [`SignalCell::version`].
	pub fn version(&self) -> Version {
		self.0.version()
	}
}

impl<T: Clone> ReadSignal<T> for ReadOnly<T> {
	type Discrete = Discrete<T>;
	type Continuous = Continuous<T>;

	fn get(&self) -> T {
		self.0.get()
	}

	fn discrete(&self) -> Discrete<T> {
		self.0.discrete()
	}

	fn get_and_discrete_updates(&self) -> (T, Discrete<T>) {
		self.0.get_and_discrete_updates()
	}

	fn continuous(&self) -> Continuous<T> {
		self.0.continuous()
	}
}

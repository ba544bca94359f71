//! The state cell itself, plus the waiter handles it hands out.

use std::{
	collections::BTreeMap,
	fmt::{self, Debug, Formatter},
	mem,
	sync::Arc,
};

use futures_channel::oneshot;
use parking_lot::RwLock;
use tracing::trace;

use crate::{Change, Version};

mod pending;
pub use pending::{Pending, Registration, WaiterId};

/// The outcome of one atomic update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Ignore the result with `let _ = …` if only the side effect is needed."]
pub struct Updated<T, R> {
	/// The replaced and the installed value.
	pub change: Change<T>,
	/// The secondary output of the transform.
	pub output: R,
	/// The version of the installed state.
	pub version: Version,
	/// How many waiters received the installed state.
	///
	/// Waiters whose consumer was dropped concurrently with this update are not counted.
	pub notified: usize,
}

/// A value, its [`Version`] and the waiters for the next version, behind one lock.
///
/// # Logic
///
/// Every transition installs `version + 1` and takes the entire waiter set in the same
/// critical section. The taken waiters are then fulfilled with the installed state before
/// the transitioning call returns.
pub struct StateCell<T> {
	state: RwLock<State<T>>,
}

struct State<T> {
	value: T,
	version: Version,
	waiters: Waiters<T>,
	next_waiter: u64,
}

type Waiters<T> = BTreeMap<WaiterId, oneshot::Sender<(T, Version)>>;

impl<T> State<T> {
	/// Installs `next` and detaches the current waiters.
	fn advance(&mut self, next: T) -> (T, Version, Waiters<T>) {
		let previous = mem::replace(&mut self.value, next);
		self.version = self.version.next();
		(previous, self.version, mem::take(&mut self.waiters))
	}
}

impl<T: Debug> Debug for StateCell<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.state.try_read() {
			Some(state) => f
				.debug_struct("StateCell")
				.field("value", &state.value)
				.field("version", &state.version)
				.field("waiters", &state.waiters.len())
				.finish(),
			None => f.debug_tuple("StateCell").field(&"(locked)").finish(),
		}
	}
}

impl<T> StateCell<T> {
	/// Creates a new cell at [`Version::INITIAL`] without waiters.
	pub fn new(initial_value: T) -> Self {
		Self {
			state: RwLock::new(State {
				value: initial_value,
				version: Version::INITIAL,
				waiters: BTreeMap::new(),
				next_waiter: 0,
			}),
		}
	}

	/// The current version.
	pub fn version(&self) -> Version {
		self.state.read().version
	}

	/// The number of currently registered waiters.
	pub fn waiting(&self) -> usize {
		self.state.read().waiters.len()
	}

	/// Calls `f` with a borrow of the current value and its version.
	///
	/// The cell is locked for reading while `f` runs.
	pub fn with<R>(&self, f: impl FnOnce(&T, Version) -> R) -> R {
		let state = self.state.read();
		f(&state.value, state.version)
	}

	/// Removes the waiter `id` iff it's still registered.
	///
	/// # Returns
	///
	/// Whether a waiter was removed.
	/// `false` means it was already taken by an update (or never belonged to this cell).
	pub fn deregister(&self, id: WaiterId) -> bool {
		self.state.write().waiters.remove(&id).is_some()
	}
}

impl<T: Clone> StateCell<T> {
	/// A clone of the current value.
	pub fn get(&self) -> T {
		self.state.read().value.clone()
	}

	/// A clone of the current value, with the version it belongs to.
	pub fn get_versioned(&self) -> (T, Version) {
		let state = self.state.read();
		(state.value.clone(), state.version)
	}

	/// Atomically replaces the value with the result of `transform`.
	///
	/// `transform` receives the current value and version, and runs exactly once, inside the critical section.
	///
	/// # Logic
	///
	/// All waiters registered at the replaced version are fulfilled with the new state
	/// before this method returns.
	///
	/// If `transform` panics, the cell is left as it was.
	pub fn update<R>(&self, transform: impl FnOnce(&T, Version) -> (T, R)) -> Updated<T, R> {
		let (previous, now, version, waiters, output) = {
			let mut state = self.state.write();
			let (next, output) = transform(&state.value, state.version);
			let (previous, version, waiters) = state.advance(next);
			(previous, state.value.clone(), version, waiters, output)
		};
		let notified = fulfil(waiters, &now, version);
		Updated {
			change: Change { previous, now },
			output,
			version,
			notified,
		}
	}

	/// Like [`update`](`StateCell::update`), but `transform` may decline by returning [`None`].
	///
	/// A declined update leaves value, version and waiters untouched.
	pub fn try_update<R>(
		&self,
		transform: impl FnOnce(&T, Version) -> Option<(T, R)>,
	) -> Option<Updated<T, R>> {
		let (previous, now, version, waiters, output) = {
			let mut state = self.state.write();
			let (next, output) = transform(&state.value, state.version)?;
			let (previous, version, waiters) = state.advance(next);
			(previous, state.value.clone(), version, waiters, output)
		};
		let notified = fulfil(waiters, &now, version);
		Some(Updated {
			change: Change { previous, now },
			output,
			version,
			notified,
		})
	}

	/// Registers a waiter for the version after `last_seen`.
	///
	/// If the cell has already advanced past `last_seen`, nothing is registered and the
	/// current state is returned instead. The check and the registration happen in one
	/// critical section, so no update can slip between them.
	///
	/// # Panics
	///
	/// Iff debug assertions are enabled and `last_seen` is *later* than the current version.
	pub fn register(self: &Arc<Self>, last_seen: Version) -> Registration<T> {
		let mut state = self.state.write();
		debug_assert!(
			last_seen <= state.version,
			"{last_seen} was never reached by this cell (at {})",
			state.version,
		);

		if state.version != last_seen {
			trace!(%last_seen, version = %state.version, "cell already advanced, not registering");
			return Registration::Advanced(state.value.clone(), state.version);
		}

		let id = WaiterId(state.next_waiter);
		state.next_waiter += 1;
		let (sender, receiver) = oneshot::channel();
		state.waiters.insert(id, sender);
		drop(state);

		trace!(?id, %last_seen, "registered waiter");
		Registration::Waiting(Pending::new(Arc::downgrade(self), id, receiver))
	}
}

fn fulfil<T: Clone>(waiters: Waiters<T>, now: &T, version: Version) -> usize {
	let notified = waiters
		.into_values()
		.map(|sender| sender.send((now.clone(), version)).is_ok())
		.filter(|delivered| *delivered)
		.count();
	trace!(%version, notified, "updated");
	notified
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use futures_lite::future::{block_on, poll_once};

	use super::{Registration, StateCell};
	use crate::{Abandoned, Change, Version};

	#[test]
	fn update_advances_by_one() {
		let cell = StateCell::new(1);
		let updated = cell.update(|value, version| {
			assert_eq!(version, Version::INITIAL);
			(value + 1, "out")
		});
		assert_eq!(updated.change, Change { previous: 1, now: 2 });
		assert_eq!(updated.output, "out");
		assert_eq!(updated.version.get(), 1);
		assert_eq!(updated.notified, 0);
		assert_eq!(cell.get_versioned(), (2, updated.version));
	}

	#[test]
	fn declined_update_keeps_version() {
		let cell = StateCell::new(1);
		assert!(cell.try_update(|_, _| None::<(i32, ())>).is_none());
		assert_eq!(cell.version(), Version::INITIAL);

		let updated = cell.try_update(|value, _| Some((value * 10, ()))).unwrap();
		assert_eq!(updated.change.now, 10);
		assert_eq!(cell.version().get(), 1);
	}

	#[test]
	fn waiter_is_fulfilled_by_the_first_update() {
		let cell = Arc::new(StateCell::new("a"));
		let Registration::Waiting(pending) = cell.register(Version::INITIAL) else {
			panic!("cell shouldn't have advanced");
		};
		assert_eq!(cell.waiting(), 1);

		let first = cell.update(|_, _| ("b", ()));
		let _ = cell.update(|_, _| ("c", ()));
		assert_eq!(first.notified, 1);
		assert_eq!(cell.waiting(), 0);

		assert_eq!(block_on(pending), Ok(("b", first.version)));
	}

	#[test]
	fn stale_registration_returns_current_state() {
		let cell = Arc::new(StateCell::new(0));
		let _ = cell.update(|_, _| (1, ()));
		let _ = cell.update(|_, _| (2, ()));

		match cell.register(Version::INITIAL) {
			Registration::Advanced(value, version) => {
				assert_eq!(value, 2);
				assert_eq!(version.get(), 2);
			}
			Registration::Waiting(_) => panic!("registered against a stale version"),
		}
		assert_eq!(cell.waiting(), 0);
	}

	#[test]
	fn dropping_pending_deregisters() {
		let cell = Arc::new(StateCell::new(()));
		let Registration::Waiting(mut pending) = cell.register(Version::INITIAL) else {
			panic!("cell shouldn't have advanced");
		};
		assert!(block_on(poll_once(&mut pending)).is_none());
		assert_eq!(cell.waiting(), 1);

		drop(pending);
		assert_eq!(cell.waiting(), 0);
		assert_eq!(cell.update(|_, _| ((), ())).notified, 0);
	}

	#[test]
	fn deregistered_waiter_is_abandoned() {
		let cell = Arc::new(StateCell::new(0));
		let Registration::Waiting(pending) = cell.register(Version::INITIAL) else {
			panic!("cell shouldn't have advanced");
		};
		assert!(cell.deregister(pending.id()));
		assert!(!cell.deregister(pending.id()));
		assert_eq!(cell.waiting(), 0);

		assert_eq!(block_on(pending), Err(Abandoned));
		assert_eq!(cell.update(|n, _| (n + 1, ())).notified, 0);
	}

	#[test]
	fn dropped_cell_abandons_waiters() {
		let cell = Arc::new(StateCell::new(5));
		let Registration::Waiting(pending) = cell.register(Version::INITIAL) else {
			panic!("cell shouldn't have advanced");
		};
		drop(cell);
		assert_eq!(block_on(pending), Err(Abandoned));
	}
}

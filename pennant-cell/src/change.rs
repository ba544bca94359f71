/// The `(previous, now)` pair produced by one successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change<T> {
	/// The value that was replaced.
	pub previous: T,
	/// The value that was installed.
	pub now: T,
}

impl<T> Change<T> {
	/// Maps both sides of the change through `f`, `previous` first.
	pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Change<U> {
		let previous = f(self.previous);
		Change {
			previous,
			now: f(self.now),
		}
	}

	/// Whether the update left the payload equal to what it was, as a refresh does.
	pub fn is_unchanged(&self) -> bool
	where
		T: PartialEq,
	{
		self.previous == self.now
	}
}

impl<T> From<Change<T>> for (T, T) {
	fn from(change: Change<T>) -> Self {
		(change.previous, change.now)
	}
}

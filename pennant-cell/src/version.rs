use std::fmt::{self, Display, Formatter};

/// Position of a state in the total order of updates applied to one cell.
///
/// Each successful update advances the version by exactly one.
/// Versions of different cells are unrelated and **should not** be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u64);

impl Version {
	/// The version of a freshly created cell.
	pub const INITIAL: Self = Version(0);

	/// The raw counter value.
	#[must_use]
	pub fn get(self) -> u64 {
		self.0
	}

	/// The number of updates between `earlier` and `self`.
	///
	/// # Panics
	///
	/// Iff `earlier` is later than `self`.
	#[must_use]
	pub fn since(self, earlier: Self) -> u64 {
		assert!(earlier <= self, "`earlier` ({earlier}) is after {self}");
		self.0 - earlier.0
	}

	/// Overflow would take centuries of continuous updates, so it's not handled.
	pub(crate) fn next(self) -> Self {
		Version(self.0 + 1)
	}
}

impl Default for Version {
	fn default() -> Self {
		Self::INITIAL
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "v{}", self.0)
	}
}

impl From<Version> for u64 {
	fn from(version: Version) -> Self {
		version.0
	}
}

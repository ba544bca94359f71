use futures_lite::{Stream, StreamExt};
use pennant::{prelude::*, SignalCell};

mod _block_on;
use _block_on::assert_ready;

#[test]
fn samples_without_waiting() {
	let cell = SignalCell::new(1);
	let mut continuous = cell.continuous();
	assert_eq!(assert_ready(continuous.next()), Some(1));
	assert_eq!(assert_ready(continuous.next()), Some(1));

	cell.set(2);
	cell.set(3);
	assert_eq!(assert_ready(continuous.next()), Some(3));
	assert_eq!(cell.waiting(), 0);
}

#[test]
fn never_ends() {
	let cell = SignalCell::new(());
	let taken = futures_lite::future::block_on(cell.continuous().take(100).count());
	assert_eq!(taken, 100);
	assert_eq!(cell.continuous().size_hint(), (usize::MAX, None));
}

use futures_lite::{future::block_on, stream, StreamExt};
use pennant::{prelude::*, SignalCell};
use pennant_extra::{hold, HOLD_BUDGET};

use _block_on::{assert_pending, assert_ready};

#[test]
fn writes_every_item() {
	let cell = SignalCell::new(0);
	let written = block_on(hold(cell.clone(), stream::iter(1..=4)));
	assert_eq!(written, 4);
	assert_eq!(cell.get(), 4);
	assert_eq!(cell.version().get(), 4);
}

#[test]
fn discrete_observers_see_held_values() {
	let source = SignalCell::new('a');
	let target = SignalCell::new('-');

	let mut observed = target.discrete();
	assert_eq!(assert_ready(observed.next()), Some('-'));

	let mut forwarding = Box::pin(hold(target.clone(), source.discrete()));
	assert_pending(forwarding.as_mut());
	assert_eq!(assert_ready(observed.next()), Some('a'));

	source.set('b');
	assert_pending(forwarding.as_mut());
	assert_eq!(assert_ready(observed.next()), Some('b'));
	assert_eq!(forwarding.signal().get(), 'b');

	drop(forwarding);
	assert_eq!(source.waiting(), 0);
	source.set('c');
	assert_eq!(target.get(), 'b');
}

#[test]
fn holds_into_views() {
	let cell = SignalCell::new(0_u8);
	let view = cell.clone().imap(|n: &u8| char::from(b'a' + n), |c: char| c as u8 - b'a');
	let written = block_on(hold(view, stream::iter(['b', 'c'])));
	assert_eq!(written, 2);
	assert_eq!(cell.get(), 2);
}

#[test]
fn yields_between_batches_of_an_endless_stream() {
	let source = SignalCell::new(5);
	let target = SignalCell::new(0);

	let mut forwarding = Box::pin(hold(target.clone(), source.continuous()));
	assert_pending(forwarding.as_mut());
	assert_eq!(target.get(), 5);
	assert_eq!(target.version().get(), HOLD_BUDGET as u64);

	source.set(6);
	assert_pending(forwarding.as_mut());
	assert_eq!(target.get(), 6);
	assert_eq!(target.version().get(), 2 * HOLD_BUDGET as u64);
}

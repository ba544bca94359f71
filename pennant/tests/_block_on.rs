#![allow(dead_code)]

use std::future::IntoFuture;

use futures_lite::future::{block_on, poll_once};

/// Polls `f` exactly once and returns its output.
#[track_caller]
pub fn assert_ready<F: IntoFuture>(f: F) -> F::Output {
	match block_on(poll_once(f.into_future())) {
		Some(output) => output,
		None => panic!("Unexpectedly not ready!"),
	}
}

/// Polls `f` exactly once, then drops it.
#[track_caller]
pub fn assert_pending<F: IntoFuture>(f: F) {
	if block_on(poll_once(f.into_future())).is_some() {
		panic!("Unexpectedly ready!");
	}
}

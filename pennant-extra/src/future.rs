//! `ReadSignal` => `Future` adapters.
//!
//! Each function subscribes when it's *called*, not when the returned future is first polled,
//! so an update in between is not missed.

use std::future::Future;

use futures_lite::StreamExt;
use pennant::ReadSignal;
use tracing::trace;

use crate::WaitError;

/// Resolves with the first value, starting with the current one, for which `predicate` returns `true`.
///
/// Values are observed [discretely](`ReadSignal::discrete`), so a value that is replaced
/// before this future is polled again may be skipped.
///
/// # Errors
///
/// [`WaitError::Ended`] iff the signal stops changing before a match is observed.
/// A [`Constant`](`pennant::Constant`) that matches resolves successfully.
pub fn wait_until<T, S: ReadSignal<T>>(
	signal: &S,
	mut predicate: impl FnMut(&T) -> bool,
) -> impl Future<Output = Result<T, WaitError>> {
	let (current, mut updates) = signal.get_and_discrete_updates();
	async move {
		if predicate(&current) {
			return Ok(current);
		}
		while let Some(value) = updates.next().await {
			if predicate(&value) {
				return Ok(value);
			}
			trace!("value didn't match, waiting");
		}
		Err(WaitError::Ended)
	}
}

/// Resolves once the signal holds a value equal to `target`.
///
/// # Errors
///
/// See [`wait_until`].
pub fn wait_for_value<T: PartialEq, S: ReadSignal<T>>(
	signal: &S,
	target: T,
) -> impl Future<Output = Result<(), WaitError>> {
	let matched = wait_until(signal, move |value| *value == target);
	async move { matched.await.map(drop) }
}

/// Resolves with the signal's value once it was updated after this call.
///
/// Updates that happen before the returned future is first polled coalesce into the latest one.
///
/// # Errors
///
/// [`WaitError::Ended`] iff the signal can't change anymore.
pub fn next_change<T, S: ReadSignal<T>>(signal: &S) -> impl Future<Output = Result<T, WaitError>> {
	let (_, mut updates) = signal.get_and_discrete_updates();
	async move { updates.next().await.ok_or(WaitError::Ended) }
}

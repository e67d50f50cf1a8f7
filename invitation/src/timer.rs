//! The seam between the timing logic and whatever actually owns the event loop.
//!
//! In the browser this is `setInterval`/`setTimeout` (through gloo-timers); in tests it's
//! [`manual::ManualScheduler`], which only moves when it's told to.

use std::time::Duration;

/// Something that can call us back later on the same thread.
///
/// Dropping a returned handle must cancel the callback it belongs to, synchronously: once the
/// handle is gone, the callback will never run again. Everything built on top of this relies on
/// that to avoid firing into a view that's already been torn down.
pub trait Scheduler {
	type Handle: 'static;

	fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;

	fn once(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

/// The longest delay `setTimeout`/`setInterval` honour. gloo-timers hands the delay over as an
/// `i32`, and browsers fire anything longer than this straight away.
pub const MAX_TIMER_MS: u32 = i32::MAX as u32;

/// Browser timers only take whole milliseconds, and only up to [`MAX_TIMER_MS`] of them.
#[must_use]
pub fn whole_millis(duration: Duration) -> u32 {
	u32::try_from(duration.as_millis()).map_or(MAX_TIMER_MS, |ms| ms.min(MAX_TIMER_MS))
}


#[cfg(test)]
#[test]
fn clamps_to_browser_range() {
	assert_eq!(whole_millis(Duration::from_millis(1000)), 1000);
	assert_eq!(whole_millis(Duration::from_micros(1500)), 1);
	assert_eq!(whole_millis(Duration::from_secs(u64::MAX)), MAX_TIMER_MS);

	// 3_000_000_000 fits a u32 but wraps negative as the i32 setInterval gets
	assert_eq!(whole_millis(Duration::from_millis(3_000_000_000)), MAX_TIMER_MS);
	assert_eq!(i32::try_from(whole_millis(Duration::from_millis(3_000_000_000))), Ok(i32::MAX));
}

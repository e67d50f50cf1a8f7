use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Where "now" comes from. Everything that needs the current time takes one of these so that
/// tests can pin it.
pub trait Clock {
	fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock(Cell<DateTime<Utc>>);

impl ManualClock {
	#[must_use]
	pub fn new(start: DateTime<Utc>) -> Self {
		Self(Cell::new(start))
	}

	pub fn set(&self, now: DateTime<Utc>) {
		self.0.set(now);
	}

	pub fn advance(&self, by: chrono::Duration) {
		self.0.set(self.0.get() + by);
	}
}

impl Clock for ManualClock {
	fn now(&self) -> DateTime<Utc> {
		self.0.get()
	}
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
	fn now(&self) -> DateTime<Utc> {
		(**self).now()
	}
}

impl<C: Clock + ?Sized> Clock for &C {
	fn now(&self) -> DateTime<Utc> {
		(**self).now()
	}
}

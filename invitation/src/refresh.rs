use std::{
	cell::{Cell, RefCell},
	rc::Rc,
	time::Duration,
};

use crate::{
	clock::Clock,
	countdown::{Countdown, CountdownCalculator},
	timer::Scheduler,
};

/// Whatever ends up showing the values. Closures work for this, which is what the frontend uses.
pub trait DisplaySink<T> {
	fn show(&mut self, value: T);
}

impl<T, F: FnMut(T)> DisplaySink<T> for F {
	fn show(&mut self, value: T) {
		self(value);
	}
}

/// Recomputes a value on a fixed period and pushes it into a sink, until deactivated.
///
/// The timer belongs to this struct: deactivating (or dropping) it cancels the timer right away,
/// and a tick that somehow still gets through afterwards won't deliver anything. Ticks also never
/// nest: if one arrives while the previous one is still being delivered, it's dropped.
pub struct RefreshDriver<H> {
	handle: Option<H>,
	active: Rc<Cell<bool>>,
	tick: Rc<dyn Fn()>,
}

impl<H: 'static> RefreshDriver<H> {
	pub fn activate<S, T, P, K>(scheduler: &S, period: Duration, produce: P, sink: K) -> Self
	where
		S: Scheduler<Handle = H>,
		T: 'static,
		P: FnMut() -> T + 'static,
		K: DisplaySink<T> + 'static,
	{
		let active = Rc::new(Cell::new(true));
		let busy = Rc::new(Cell::new(false));
		let pipeline = RefCell::new((produce, sink));

		let tick_active = Rc::clone(&active);
		let tick: Rc<dyn Fn()> = Rc::new(move || {
			if !tick_active.get() || busy.replace(true) {
				return;
			}

			// try_borrow since a sink that manages to call back into us shouldn't panic the page
			if let Ok(mut pipeline) = pipeline.try_borrow_mut() {
				let (produce, sink) = &mut *pipeline;
				sink.show(produce());
			}

			busy.set(false);
		});

		// show something straight away instead of waiting a whole period on zeros
		tick();

		let scheduled = Rc::clone(&tick);
		let handle = scheduler.every(period, Box::new(move || scheduled()));

		tracing::debug!("Refresh driver activated with a {}ms period", period.as_millis());

		Self { handle: Some(handle), active, tick }
	}

	/// The countdown as it's used on the page: the calculator is the producer
	pub fn countdown<S, C, K>(
		scheduler: &S,
		period: Duration,
		calculator: CountdownCalculator<C>,
		sink: K
	) -> Self
	where
		S: Scheduler<Handle = H>,
		C: Clock + 'static,
		K: DisplaySink<Countdown> + 'static,
	{
		Self::activate(scheduler, period, move || calculator.current(), sink)
	}

	/// Recompute and publish right now, e.g. when the tab comes back into view and the browser
	/// has been throttling our interval
	pub fn refresh_now(&self) {
		(self.tick)();
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.active.get()
	}

	pub fn deactivate(&mut self) {
		if self.active.replace(false) {
			tracing::debug!("Refresh driver deactivated");
		}
		// dropping the handle is what actually cancels the timer
		self.handle = None;
	}
}

impl<H> Drop for RefreshDriver<H> {
	fn drop(&mut self) {
		self.active.set(false);
		self.handle = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{clock::ManualClock, countdown::TargetInstant, timer::manual::ManualScheduler};
	use chrono::Duration as ChronoDuration;

	fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(T) + 'static) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink_seen = Rc::clone(&seen);
		(seen, move |v| sink_seen.borrow_mut().push(v))
	}

	#[test]
	fn publishes_on_activation_and_every_period() {
		let sched = ManualScheduler::default();
		let mut n = 0;
		let (seen, sink) = recorder::<i32>();

		let _driver = RefreshDriver::activate(&sched, Duration::from_secs(1), move || { n += 1; n }, sink);
		assert_eq!(*seen.borrow(), [1]);

		sched.advance(Duration::from_millis(2500));
		assert_eq!(*seen.borrow(), [1, 2, 3]);
	}

	#[test]
	fn deactivation_releases_timer() {
		let sched = ManualScheduler::default();
		let (seen, sink) = recorder::<()>();

		let mut driver = RefreshDriver::activate(&sched, Duration::from_secs(1), || (), sink);
		assert_eq!(sched.live_timers(), 1);
		assert!(driver.is_active());

		driver.deactivate();
		assert!(!driver.is_active());
		assert_eq!(sched.live_timers(), 0);

		sched.advance(Duration::from_secs(10));
		driver.refresh_now();
		assert_eq!(seen.borrow().len(), 1);
	}

	#[test]
	fn dropping_releases_timer() {
		let sched = ManualScheduler::default();
		let (seen, sink) = recorder::<()>();

		{
			let _driver = RefreshDriver::activate(&sched, Duration::from_secs(1), || (), sink);
			sched.advance(Duration::from_secs(1));
		}

		assert_eq!(sched.live_timers(), 0);
		sched.advance(Duration::from_secs(5));
		assert_eq!(seen.borrow().len(), 2);
	}

	#[test]
	fn ticks_dont_nest() {
		let sched = ManualScheduler::default();
		let reentry: Rc<RefCell<Option<Rc<dyn Fn()>>>> = Rc::default();
		let delivered = Rc::new(Cell::new(0));

		let sink_reentry = Rc::clone(&reentry);
		let sink_delivered = Rc::clone(&delivered);
		let driver = RefreshDriver::activate(&sched, Duration::from_secs(1), || (), move |(): ()| {
			sink_delivered.set(sink_delivered.get() + 1);
			// try to tick again from inside a delivery
			if let Some(tick) = sink_reentry.borrow().as_ref() {
				tick();
			}
		});

		*reentry.borrow_mut() = Some(Rc::clone(&driver.tick));

		sched.advance(Duration::from_secs(3));
		// one on activation plus three scheduled; none of the nested ones made it through
		assert_eq!(delivered.get(), 4);
	}

	#[test]
	fn counts_down_to_zero_and_stays() {
		let target = TargetInstant::parse("2025-10-29T11:00:00+07:00").unwrap();
		let sched = ManualScheduler::default();
		let clock = Rc::new(ManualClock::new(target.utc() - ChronoDuration::seconds(2)));
		let (seen, sink) = recorder::<Countdown>();

		let calc = CountdownCalculator::new(Rc::clone(&clock), Some(target));
		let _driver = RefreshDriver::countdown(&sched, Duration::from_secs(1), calc, sink);

		for _ in 0..4 {
			clock.advance(ChronoDuration::seconds(1));
			sched.advance(Duration::from_secs(1));
		}

		let seconds = seen.borrow().iter().map(|c: &Countdown| c.seconds).collect::<Vec<_>>();
		assert_eq!(seconds, [2, 1, 0, 0, 0]);
	}
}

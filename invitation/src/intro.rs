//! The door intro: the page starts locked behind an overlay, the doors swing open, and then the
//! overlay gets out of the way for good.
//!
//! ```text
//! Locked --activate--> Animating --(timer | skip)--> Unlocked
//!    \-----------(reduced motion | skip)-----------/
//! ```

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::{motion::IntroMotion, timer::Scheduler};

/// Keeps the page underneath the intro from scrolling. Both methods may be called any number of
/// times in any order; calling `release` without a matching `suppress` must do nothing.
pub trait ScrollLock {
	fn suppress(&mut self);
	fn release(&mut self);
}

/// For when there's no page behind the intro to lock
#[derive(Clone, Copy, Debug, Default)]
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
	fn suppress(&mut self) {}
	fn release(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntroState {
	Locked,
	Animating,
	Unlocked
}

impl IntroState {
	#[must_use]
	pub fn blocks_page(self) -> bool {
		self != Self::Unlocked
	}
}

pub struct IntroSequencer<L> {
	state: IntroState,
	lock: L,
	listener: Option<Box<dyn FnMut(IntroState)>>,
}

impl<L: ScrollLock> IntroSequencer<L> {
	/// Starts locked, which means the scroll lock goes on right away
	pub fn new(mut lock: L) -> Self {
		lock.suppress();
		Self { state: IntroState::Locked, lock, listener: None }
	}

	/// Called with the new state after every transition (not with the initial `Locked`)
	pub fn on_change(&mut self, listener: impl FnMut(IntroState) + 'static) {
		self.listener = Some(Box::new(listener));
	}

	#[must_use]
	pub fn state(&self) -> IntroState {
		self.state
	}

	#[must_use]
	pub fn lock(&self) -> &L {
		&self.lock
	}

	/// Only does anything from `Locked`. With reduced motion there's nothing to watch, so we go
	/// straight to `Unlocked` without ever passing through `Animating`.
	pub fn activate(&mut self, reduced_motion: bool) -> IntroState {
		if self.state == IntroState::Locked {
			if reduced_motion {
				tracing::debug!("Reduced motion requested; skipping the intro");
				self.unlock();
			} else {
				self.transition(IntroState::Animating);
			}
		}

		self.state
	}

	/// The intro timer ran out
	pub fn elapse(&mut self) {
		if self.state == IntroState::Animating {
			self.unlock();
		}
	}

	pub fn skip(&mut self) {
		self.unlock();
	}

	/// Lifts the scroll lock without touching the state; used when the whole thing is being torn
	/// down mid-intro
	pub fn release_lock(&mut self) {
		self.lock.release();
	}

	fn unlock(&mut self) {
		// always release, even if we're already unlocked. it's idempotent
		self.lock.release();
		self.transition(IntroState::Unlocked);
	}

	fn transition(&mut self, to: IntroState) {
		if self.state == to || self.state == IntroState::Unlocked {
			return;
		}

		tracing::debug!("Intro {:?} -> {to:?}", self.state);
		self.state = to;

		if let Some(listener) = self.listener.as_mut() {
			listener(to);
		}
	}
}

/// Owns a sequencer plus the timer that will unlock it. Skipping cancels the timer; dropping the
/// driver cancels the timer and lifts the scroll lock, so nothing fires into a page that's gone.
pub struct IntroDriver<L: ScrollLock, H> {
	sequencer: Rc<RefCell<IntroSequencer<L>>>,
	pending: Option<H>,
}

impl<L: ScrollLock + 'static, H: 'static> IntroDriver<L, H> {
	pub fn start<S>(
		scheduler: &S,
		motion: &IntroMotion,
		reduced_motion: bool,
		lock: L,
		on_change: impl FnMut(IntroState) + 'static
	) -> Self
	where
		S: Scheduler<Handle = H>
	{
		let mut sequencer = IntroSequencer::new(lock);
		sequencer.on_change(on_change);

		let sequencer = Rc::new(RefCell::new(sequencer));
		let state = sequencer.borrow_mut().activate(reduced_motion);

		let pending = (state == IntroState::Animating).then(|| {
			let weak = Rc::downgrade(&sequencer);
			scheduler.once(motion.unlock_after(), Box::new(move || {
				if let Some(sequencer) = weak.upgrade() {
					sequencer.borrow_mut().elapse();
				}
			}))
		});

		Self { sequencer, pending }
	}

	pub fn skip(&mut self) {
		self.pending = None;
		self.sequencer.borrow_mut().skip();
	}

	#[must_use]
	pub fn state(&self) -> IntroState {
		self.sequencer.borrow().state()
	}

	#[must_use]
	pub fn has_pending_timer(&self) -> bool {
		self.pending.is_some() && self.state() == IntroState::Animating
	}
}

impl<L: ScrollLock, H> Drop for IntroDriver<L, H> {
	fn drop(&mut self) {
		self.pending = None;
		if let Ok(mut sequencer) = self.sequencer.try_borrow_mut() {
			sequencer.release_lock();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::timer::manual::ManualScheduler;
	use std::time::Duration;

	/// Counts calls, and tracks whether the page would currently be locked
	#[derive(Clone, Default)]
	struct CountingLock(Rc<RefCell<(bool, usize, usize)>>);

	impl CountingLock {
		fn locked(&self) -> bool {
			self.0.borrow().0
		}
		fn releases(&self) -> usize {
			self.0.borrow().2
		}
	}

	impl ScrollLock for CountingLock {
		fn suppress(&mut self) {
			let mut s = self.0.borrow_mut();
			s.0 = true;
			s.1 += 1;
		}
		fn release(&mut self) {
			let mut s = self.0.borrow_mut();
			s.0 = false;
			s.2 += 1;
		}
	}

	fn observed() -> (Rc<RefCell<Vec<IntroState>>>, impl FnMut(IntroState) + 'static) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let listener_seen = Rc::clone(&seen);
		(seen, move |s| listener_seen.borrow_mut().push(s))
	}

	#[test]
	fn locked_until_timer() {
		let lock = CountingLock::default();
		let mut seq = IntroSequencer::new(lock.clone());
		assert_eq!(seq.state(), IntroState::Locked);
		assert!(lock.locked());

		assert_eq!(seq.activate(false), IntroState::Animating);
		assert!(lock.locked());

		seq.elapse();
		assert_eq!(seq.state(), IntroState::Unlocked);
		assert!(!lock.locked());
	}

	#[test]
	fn skip_from_anywhere() {
		for activate_first in [false, true] {
			let lock = CountingLock::default();
			let mut seq = IntroSequencer::new(lock.clone());
			if activate_first {
				seq.activate(false);
			}

			seq.skip();
			assert_eq!(seq.state(), IntroState::Unlocked);
			assert!(!lock.locked());
		}
	}

	#[test]
	fn unlocked_is_terminal() {
		let lock = CountingLock::default();
		let (seen, listener) = observed();
		let mut seq = IntroSequencer::new(lock.clone());
		seq.on_change(listener);

		seq.activate(false);
		seq.skip();
		seq.activate(false);
		seq.elapse();
		seq.skip();

		assert_eq!(seq.state(), IntroState::Unlocked);
		assert_eq!(*seen.borrow(), [IntroState::Animating, IntroState::Unlocked]);
		// releasing more than once is fine, and leaves it unlocked
		assert!(lock.releases() >= 2);
		assert!(!lock.locked());
	}

	#[test]
	fn elapse_before_activation_does_nothing() {
		let mut seq = IntroSequencer::new(NoScrollLock);
		seq.elapse();
		assert_eq!(seq.state(), IntroState::Locked);
	}

	#[test]
	fn reduced_motion_never_animates() {
		let sched = ManualScheduler::default();
		let lock = CountingLock::default();
		let (seen, listener) = observed();

		let driver = IntroDriver::start(&sched, &IntroMotion::default(), true, lock.clone(), listener);

		assert_eq!(driver.state(), IntroState::Unlocked);
		assert_eq!(*seen.borrow(), [IntroState::Unlocked]);
		assert!(!lock.locked());
		assert_eq!(sched.live_timers(), 0);
	}

	#[test]
	fn driver_unlocks_when_timer_fires() {
		let sched = ManualScheduler::default();
		let lock = CountingLock::default();
		let (seen, listener) = observed();

		let driver = IntroDriver::start(&sched, &IntroMotion::default(), false, lock.clone(), listener);
		assert_eq!(driver.state(), IntroState::Animating);
		assert!(driver.has_pending_timer());

		sched.advance(Duration::from_millis(4999));
		assert_eq!(driver.state(), IntroState::Animating);
		assert!(lock.locked());

		sched.advance(Duration::from_millis(1));
		assert_eq!(driver.state(), IntroState::Unlocked);
		assert!(!lock.locked());
		assert_eq!(*seen.borrow(), [IntroState::Animating, IntroState::Unlocked]);
	}

	#[test]
	fn skip_cancels_timer() {
		let sched = ManualScheduler::default();
		let lock = CountingLock::default();

		let mut driver = IntroDriver::start(&sched, &IntroMotion::default(), false, lock.clone(), |_| ());
		driver.skip();

		assert_eq!(driver.state(), IntroState::Unlocked);
		assert!(!lock.locked());
		assert_eq!(sched.live_timers(), 0);
		assert!(!driver.has_pending_timer());
	}

	#[test]
	fn teardown_mid_intro() {
		let sched = ManualScheduler::default();
		let lock = CountingLock::default();
		let (seen, listener) = observed();

		let driver = IntroDriver::start(&sched, &IntroMotion::default(), false, lock.clone(), listener);
		drop(driver);

		assert_eq!(sched.live_timers(), 0);
		assert!(!lock.locked());

		sched.advance(Duration::from_secs(60));
		assert_eq!(*seen.borrow(), [IntroState::Animating]);
	}
}

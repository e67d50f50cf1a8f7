//! Every duration, delay and easing curve used on the page, grouped by the effect they belong to.
//! Components pull their numbers from here instead of hardcoding them.

use std::time::Duration;

use crate::content::Timing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
	Linear,
	EaseOut,
	EaseInOut,
	CubicBezier(f64, f64, f64, f64)
}

impl Easing {
	#[must_use]
	pub fn css(&self) -> String {
		match self {
			Self::Linear => "linear".into(),
			Self::EaseOut => "ease-out".into(),
			Self::EaseInOut => "ease-in-out".into(),
			Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
		}
	}
}

#[must_use]
pub fn seconds(s: f64) -> String {
	format!("{s}s")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
	#[default]
	Up,
	Down,
	Left,
	Right
}

impl Direction {
	/// Where the element starts before it slides into place, as (x, y) in px
	#[must_use]
	pub fn offset(self, distance: f64) -> (f64, f64) {
		match self {
			Self::Up => (0.0, distance),
			Self::Down => (0.0, -distance),
			Self::Left => (-distance, 0.0),
			Self::Right => (distance, 0.0),
		}
	}
}

/// Fade + slide in when scrolled into view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
	pub duration_s: f64,
	pub distance_px: f64,
	pub easing: Easing,
	/// fraction of the viewport height; negative shrinks the region things need to enter
	pub viewport_margin: f64,
}

impl Default for RevealMotion {
	fn default() -> Self {
		Self {
			duration_s: 0.8,
			distance_px: 40.0,
			easing: Easing::CubicBezier(0.25, 0.46, 0.45, 0.94),
			viewport_margin: -0.1,
		}
	}
}

impl RevealMotion {
	/// The shorter, smaller rise used for section headings
	#[must_use]
	pub fn heading() -> Self {
		Self {
			duration_s: 0.6,
			distance_px: 20.0,
			easing: Easing::EaseOut,
			..Self::default()
		}
	}

	/// Inline style for an element in the given state
	#[must_use]
	pub fn style(&self, direction: Direction, delay_s: f64, visible: bool) -> String {
		let (x, y, opacity) = if visible {
			(0.0, 0.0, 1)
		} else {
			let (x, y) = direction.offset(self.distance_px);
			(x, y, 0)
		};

		let timing = format!("{} {} {}", seconds(self.duration_s), self.easing.css(), seconds(delay_s));

		format!(
			"opacity: {opacity}; transform: translate({x}px, {y}px); transition: opacity {timing}, transform {timing};"
		)
	}
}

/// Delays that step up by a fixed amount for each item in a list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
	pub base_s: f64,
	pub step_s: f64
}

impl Stagger {
	pub const EVENTS: Self = Self { base_s: 0.4, step_s: 0.1 };
	pub const GALLERY: Self = Self { base_s: 0.0, step_s: 0.1 };
	pub const NAV_ITEMS: Self = Self { base_s: 0.3, step_s: 0.1 };
	pub const MOBILE_NAV_ITEMS: Self = Self { base_s: 0.2, step_s: 0.1 };
	pub const COUNTDOWN_BOXES: Self = Self { base_s: 0.0, step_s: 0.1 };
	/// blocks of a section coming in one after another: hero lines, story paragraphs, rsvp cards
	pub const SECTION: Self = Self { base_s: 0.2, step_s: 0.2 };
	pub const HEARTS: Self = Self { base_s: 0.0, step_s: 1.5 };

	#[must_use]
	pub fn delay(&self, index: usize) -> f64 {
		// round so we don't end up with 0.30000000000000004s in the css
		((self.base_s + self.step_s * index as f64) * 1000.0).round() / 1000.0
	}
}

/// The door-opening overlay shown before the page can be used
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroMotion {
	pub duration_s: f64,
	pub delay_s: f64,
	/// how long the opened doors stay on screen before the overlay goes away
	pub hold_s: f64,
	pub door_angle_deg: f64,
	pub left_easing: Easing,
	pub right_easing: Easing,
	pub logo_fade_s: f64,
	pub logo_delay_s: f64,
	/// the logo grows from this to full size while the doors open
	pub logo_start_scale: f64,
}

impl Default for IntroMotion {
	fn default() -> Self {
		Self::from_timing(&Timing::default())
	}
}

impl IntroMotion {
	#[must_use]
	pub fn from_timing(timing: &Timing) -> Self {
		Self {
			duration_s: timing.intro_duration_s,
			delay_s: timing.intro_delay_s,
			hold_s: timing.intro_hold_s,
			door_angle_deg: 95.0,
			left_easing: Easing::CubicBezier(0.22, 1.0, 0.72, 2.0),
			right_easing: Easing::CubicBezier(0.22, 1.0, 0.36, 1.0),
			logo_fade_s: 1.0,
			logo_delay_s: 0.5,
			logo_start_scale: 0.9,
		}
	}

	/// From activation until the overlay comes down on its own
	#[must_use]
	pub fn unlock_after(&self) -> Duration {
		let total = (self.delay_s + self.duration_s + self.hold_s).max(0.0);
		Duration::try_from_secs_f64(total).unwrap_or(Duration::MAX)
	}

	#[must_use]
	pub fn door_transition(&self, easing: Easing) -> String {
		format!("transform {} {} {}", seconds(self.duration_s), easing.css(), seconds(self.delay_s))
	}

	/// The logo sits behind the doors and fades in as they swing open
	#[must_use]
	pub fn logo_style(&self, opened: bool) -> String {
		let (opacity, scale) = if opened { (1.0, 1.0) } else { (0.0, self.logo_start_scale) };
		let timing = format!("{} {} {}", seconds(self.logo_fade_s), Easing::EaseOut.css(), seconds(self.logo_delay_s));

		format!("opacity: {opacity}; transform: scale({scale}); transition: opacity {timing}, transform {timing};")
	}
}

/// The little boxes holding each countdown unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountdownMotion {
	pub entrance_s: f64,
	pub stagger: Stagger,
	/// how long a changed digit takes to settle back from `pop_scale`
	pub pop_s: f64,
	pub pop_scale: f64,
}

impl Default for CountdownMotion {
	fn default() -> Self {
		Self {
			entrance_s: 0.5,
			stagger: Stagger::COUNTDOWN_BOXES,
			pop_s: 0.3,
			pop_scale: 1.2,
		}
	}
}

/// A looping animation that only plays for `active_s` out of every `active_s + rest_s`. CSS has no
/// repeat delay, so the rest is folded into the keyframes instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseMotion {
	pub active_s: f64,
	pub rest_s: f64,
	pub peak_scale: f64,
	pub easing: Easing,
}

impl PulseMotion {
	pub const HEART: Self = Self { active_s: 2.0, rest_s: 3.0, peak_scale: 1.2, easing: Easing::EaseInOut };

	#[must_use]
	pub fn period_s(&self) -> f64 {
		self.active_s + self.rest_s
	}

	/// Percentage of the period where the active part ends
	#[must_use]
	pub fn active_pct(&self) -> f64 {
		let period = self.period_s();
		if period <= 0.0 {
			100.0
		} else {
			(self.active_s / period * 100.0).clamp(0.0, 100.0)
		}
	}

	#[must_use]
	pub fn keyframes(&self, name: &str) -> String {
		let end = self.active_pct();
		let mid = end / 2.0;
		let peak = self.peak_scale;

		format!(
			"@keyframes {name} {{ \
				0% {{ transform: scale(0); opacity: 0; }} \
				{mid}% {{ transform: scale({peak}); opacity: 1; }} \
				{end}% {{ transform: scale(1); opacity: 0.7; }} \
				100% {{ transform: scale(1); opacity: 0.7; }} \
			}}"
		)
	}

	#[must_use]
	pub fn animation(&self, name: &str) -> String {
		format!("{name} {} {} infinite", seconds(self.period_s()), self.easing.css())
	}
}

/// Where one of the hero's background hearts sits, in percent of the hero
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartSpot {
	pub left_pct: f64,
	pub top_pct: f64,
}

impl HeartSpot {
	pub const HERO: [Self; 4] = [
		Self { left_pct: 15.0, top_pct: 20.0 },
		Self { left_pct: 80.0, top_pct: 30.0 },
		Self { left_pct: 25.0, top_pct: 75.0 },
		Self { left_pct: 70.0, top_pct: 80.0 },
	];

	#[must_use]
	pub fn style(&self, delay_s: f64) -> String {
		format!("left: {}%; top: {}%; animation-delay: {};", self.left_pct, self.top_pct, seconds(delay_s))
	}
}

/// Dust floating up the background
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleMotion {
	pub count: usize,
	pub rise_px: f64,
	pub max_drift_px: f64,
	pub min_duration_s: f64,
	pub max_duration_s: f64,
	pub max_delay_s: f64,
}

impl Default for ParticleMotion {
	fn default() -> Self {
		Self {
			count: 12,
			rise_px: 100.0,
			max_drift_px: 25.0,
			min_duration_s: 10.0,
			max_duration_s: 20.0,
			max_delay_s: 5.0,
		}
	}
}

/// Navigation bar and the mobile menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuMotion {
	pub bar_entrance_s: f64,
	pub toggle_s: f64,
	pub easing: Easing,
}

impl Default for MenuMotion {
	fn default() -> Self {
		Self { bar_entrance_s: 0.8, toggle_s: 0.3, easing: Easing::EaseOut }
	}
}

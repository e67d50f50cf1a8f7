use serde::{Deserialize, Serialize};

use crate::motion::RevealMotion;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
	#[default]
	Hidden,
	Visible
}

/// A one-way latch for a single element: the first time the element is seen, it's revealed, and
/// it stays revealed no matter what the viewport does afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealTrigger {
	state: RevealState
}

impl RevealTrigger {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn state(&self) -> RevealState {
		self.state
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.state == RevealState::Visible
	}

	/// Feed it the latest intersection result. Returns true only on the call that flips it, so the
	/// caller knows when it can stop watching.
	pub fn observe(&mut self, intersecting: bool) -> bool {
		match self.state {
			RevealState::Hidden if intersecting => {
				self.state = RevealState::Visible;
				true
			},
			_ => false
		}
	}
}

/// The region things need to scroll into before they count as seen. `margin` is a fraction of
/// the viewport height taken off (if negative) or added to (if positive) both the top and the
/// bottom, the same way a CSS `rootMargin` percentage would.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub height: f64,
	pub margin: f64
}

impl Viewport {
	#[must_use]
	pub fn new(height: f64, motion: &RevealMotion) -> Self {
		Self { height, margin: motion.viewport_margin }
	}

	/// `top` and `bottom` are the element's bounding box relative to the top of the viewport, the
	/// way `getBoundingClientRect` reports them
	#[must_use]
	pub fn intersects(&self, top: f64, bottom: f64) -> bool {
		let inset = -self.margin * self.height;
		let region_top = inset;
		let region_bottom = self.height - inset;

		// a zero-height (or inverted) region can't see anything
		region_bottom > region_top && bottom > region_top && top < region_bottom
	}
}

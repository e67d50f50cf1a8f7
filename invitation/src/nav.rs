/// How far down the page (in px) before the nav bar gets its solid background
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub name: &'static str,
	pub href: &'static str
}

pub const NAV_ITEMS: [NavItem; 5] = [
	NavItem { name: "Home", href: "#home" },
	NavItem { name: "Our Story", href: "#story" },
	NavItem { name: "Events", href: "#events" },
	NavItem { name: "Gallery", href: "#gallery" },
	NavItem { name: "RSVP", href: "#rsvp" },
];

/// The mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	open: bool
}

impl MenuState {
	#[must_use]
	pub fn is_open(self) -> bool {
		self.open
	}

	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	pub fn close(&mut self) {
		self.open = false;
	}
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD_PX
}

/// How far through the page we are, from 0 to 1. A page that doesn't scroll is always at 0.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_y.is_finite() {
		return 0.0;
	}

	(scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn menu_toggles() {
		let mut menu = MenuState::default();
		assert!(!menu.is_open());
		menu.toggle();
		assert!(menu.is_open());
		menu.close();
		menu.close();
		assert!(!menu.is_open());
	}

	#[test]
	fn scrolled_past_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
	}

	#[test]
	fn progress_is_clamped() {
		assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
		assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
		assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
		// overscroll on mobile can report negatives
		assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
		assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
	}

	#[test]
	fn anchors() {
		let hrefs = NAV_ITEMS.iter().map(|i| i.href).collect::<Vec<_>>();
		assert_eq!(hrefs, ["#home", "#story", "#events", "#gallery", "#rsvp"]);
	}
}

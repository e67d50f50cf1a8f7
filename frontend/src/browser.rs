//! Browser versions of the seams in `invitation`: timers, the scroll lock, and reading the
//! viewport.

use std::time::Duration;

use gloo_console::log;
use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use invitation::{ScrollLock, Scheduler, timer::whole_millis};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Dropping either of these clears the browser timer
pub enum TimerHandle {
	Interval(#[allow(dead_code)] Interval),
	Timeout(#[allow(dead_code)] Timeout)
}

impl Scheduler for BrowserScheduler {
	type Handle = TimerHandle;

	fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> TimerHandle {
		TimerHandle::Interval(Interval::new(whole_millis(period), move || tick()))
	}

	fn once(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> TimerHandle {
		TimerHandle::Timeout(Timeout::new(whole_millis(delay), fire))
	}
}

/// Sets `overflow: hidden` on `<html>` and `<body>` while held
#[derive(Debug, Default)]
pub struct DocumentScrollLock {
	locked: bool
}

impl ScrollLock for DocumentScrollLock {
	fn suppress(&mut self) {
		if !self.locked {
			set_overflow("hidden");
			self.locked = true;
		}
	}

	fn release(&mut self) {
		if self.locked {
			set_overflow("");
			self.locked = false;
		}
	}
}

fn set_overflow(value: &str) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	let root = document.document_element().and_then(|e| e.dyn_into::<HtmlElement>().ok());

	for element in [root, document.body()].into_iter().flatten() {
		if let Err(e) = element.style().set_property("overflow", value) {
			log!("Couldn't set overflow: ", e);
		}
	}
}

#[must_use]
pub fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
		.is_some_and(|query| query.matches())
}

#[must_use]
pub fn viewport_height() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_height().ok())
		.and_then(|h| h.as_f64())
		.unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
	pub y: f64,
	pub document_height: f64,
	pub viewport_height: f64,
}

impl ScrollMetrics {
	#[must_use]
	pub fn read() -> Self {
		let Some(window) = web_sys::window() else {
			return Self::default();
		};

		let document_height = window.document()
			.and_then(|d| d.document_element())
			.map(|e| f64::from(e.scroll_height()))
			.unwrap_or_default();

		Self {
			y: window.scroll_y().unwrap_or_default(),
			document_height,
			viewport_height: viewport_height(),
		}
	}
}

/// Calls `on_change` whenever the window scrolls or resizes. Dropping the returned listeners
/// unhooks them.
pub fn on_scroll_or_resize(on_change: impl Fn() + 'static) -> Option<[EventListener; 2]> {
	let window = web_sys::window()?;
	let on_change = std::rc::Rc::new(on_change);

	let on_scroll = std::rc::Rc::clone(&on_change);
	Some([
		EventListener::new(&window, "scroll", move |_| on_scroll()),
		EventListener::new(&window, "resize", move |_| on_change()),
	])
}

#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
	let metrics = use_state(ScrollMetrics::read);

	{
		let metrics = metrics.clone();
		use_effect_with((), move |()| {
			let listeners = on_scroll_or_resize(move || metrics.set(ScrollMetrics::read()));
			move || drop(listeners)
		});
	}

	*metrics
}

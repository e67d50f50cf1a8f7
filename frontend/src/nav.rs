use invitation::{
	motion::{Easing, MenuMotion, Stagger, seconds},
	nav::{MenuState, NAV_ITEMS, is_scrolled, scroll_progress},
};
use yew::prelude::*;
use crate::browser::use_scroll_metrics;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
	pub monogram: AttrValue,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
	let metrics = use_scroll_metrics();
	let menu = use_state(MenuState::default);
	let motion = MenuMotion::default();

	let toggle = {
		let menu = menu.clone();
		Callback::from(move |_: MouseEvent| {
			let mut next = *menu;
			next.toggle();
			menu.set(next);
		})
	};

	// picking a link on mobile should get the menu out of the way
	let close = {
		let menu = menu.clone();
		Callback::from(move |_: MouseEvent| {
			let mut next = *menu;
			next.close();
			menu.set(next);
		})
	};

	let bar_class = classes!(is_scrolled(metrics.y).then_some("scrolled"));
	let bar_style = format!("animation: nav-drop {} {};", seconds(motion.bar_entrance_s), motion.easing.css());
	let item_style = |stagger: Stagger, idx: usize| format!(
		"animation: nav-item-in {} {} {} both;",
		seconds(motion.toggle_s),
		Easing::EaseOut.css(),
		seconds(stagger.delay(idx))
	);

	html! {
		<nav id="nav" class={ bar_class } style={ bar_style }>
			<div class="nav-inner">
				<a class="nav-logo" href="#home">{ props.monogram.clone() }</a>
				<ul class="nav-links">
				{
					NAV_ITEMS.iter().enumerate().map(|(idx, item)| html! {
						<li style={ item_style(Stagger::NAV_ITEMS, idx) }>
							<a href={ item.href }>{ item.name }</a>
						</li>
					}).collect::<Html>()
				}
				</ul>
				<button class="nav-toggle" aria-label="Menu" onclick={ toggle }>
					{ if menu.is_open() { "✕" } else { "☰" } }
				</button>
			</div>
			if menu.is_open() {
				<ul class="nav-mobile">
				{
					NAV_ITEMS.iter().enumerate().map(|(idx, item)| html! {
						<li style={ item_style(Stagger::MOBILE_NAV_ITEMS, idx) }>
							<a href={ item.href } onclick={ close.clone() }>{ item.name }</a>
						</li>
					}).collect::<Html>()
				}
				</ul>
			}
		</nav>
	}
}

#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
	let metrics = use_scroll_metrics();
	let progress = scroll_progress(metrics.y, metrics.document_height, metrics.viewport_height);

	html! {
		<div id="scroll-progress" style={ format!("transform: scaleX({progress});") } />
	}
}

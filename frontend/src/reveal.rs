use invitation::{
	RevealTrigger,
	Viewport,
	motion::{Direction, RevealMotion},
};
use web_sys::Element;
use yew::prelude::*;
use crate::browser::{on_scroll_or_resize, viewport_height};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
	#[prop_or_default]
	pub children: Html,
	#[prop_or_default]
	pub direction: Direction,
	#[prop_or_default]
	pub delay: f64,
	/// use the shorter rise meant for headings
	#[prop_or_default]
	pub heading: bool,
	#[prop_or_default]
	pub class: Classes,
}

/// Fades and slides its children in the first time they scroll into view, then stops watching.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
	let node = use_node_ref();
	let trigger = use_state(RevealTrigger::new);
	let visible = trigger.is_visible();

	let motion = if props.heading { RevealMotion::heading() } else { RevealMotion::default() };

	{
		let node = node.clone();
		let trigger = trigger.clone();
		use_effect_with(visible, move |visible| {
			let mut listeners = None;

			if !*visible {
				let check = move || {
					let Some(element) = node.cast::<Element>() else {
						return;
					};

					let rect = element.get_bounding_client_rect();
					let in_view = Viewport::new(viewport_height(), &motion).intersects(rect.top(), rect.bottom());

					let mut latched = *trigger;
					if latched.observe(in_view) {
						trigger.set(latched);
					}
				};

				// things that start on screen shouldn't wait for someone to scroll
				check();
				listeners = on_scroll_or_resize(check);
			}

			move || drop(listeners)
		});
	}

	html! {
		<div
			ref={ node }
			class={ classes!("reveal", props.class.clone()) }
			style={ motion.style(props.direction, props.delay, visible) }
		>
			{ props.children.clone() }
		</div>
	}
}

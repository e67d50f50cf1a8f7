use invitation::{
	IntroDriver,
	IntroState,
	Timing,
	motion::IntroMotion,
};
use yew::prelude::*;
use crate::browser::{BrowserScheduler, DocumentScrollLock, TimerHandle, prefers_reduced_motion};

#[derive(Properties, PartialEq)]
pub struct DoorIntroProps {
	pub monogram: AttrValue,
	pub names: AttrValue,
	pub timing: Timing,
}

type Driver = IntroDriver<DocumentScrollLock, TimerHandle>;

#[function_component(DoorIntro)]
pub fn door_intro(props: &DoorIntroProps) -> Html {
	let state = use_state(|| IntroState::Locked);
	let driver = use_mut_ref(|| Option::<Driver>::None);
	let motion = IntroMotion::from_timing(&props.timing);

	{
		let state = state.clone();
		let driver = driver.clone();
		use_effect_with(props.timing, move |timing| {
			let motion = IntroMotion::from_timing(timing);
			*driver.borrow_mut() = Some(IntroDriver::start(
				&BrowserScheduler,
				&motion,
				prefers_reduced_motion(),
				DocumentScrollLock::default(),
				move |new_state| state.set(new_state)
			));

			// dropping it cancels the unlock timer and gives the page its scrollbar back
			move || drop(driver.borrow_mut().take())
		});
	}

	let on_skip = {
		let driver = driver.clone();
		Callback::from(move |_: MouseEvent| {
			if let Some(driver) = driver.borrow_mut().as_mut() {
				driver.skip();
			}
		})
	};

	if !state.blocks_page() {
		return html! {};
	}

	let opened = *state == IntroState::Animating;
	let door_style = |easing, angle: f64| format!(
		"transform: perspective(1200px) rotateY({}deg); transition: {};",
		if opened { angle } else { 0.0 },
		motion.door_transition(easing)
	);

	html! {
		<div id="intro-overlay">
			<div id="intro-logo" style={ motion.logo_style(opened) }>
				<h1>{ props.monogram.clone() }</h1>
				<p>{ props.names.clone() }</p>
			</div>
			<div class="door door-left" style={ door_style(motion.left_easing, -motion.door_angle_deg) } />
			<div class="door door-right" style={ door_style(motion.right_easing, motion.door_angle_deg) } />
			<button id="intro-skip" onclick={ on_skip }>{ "Skip" }</button>
		</div>
	}
}

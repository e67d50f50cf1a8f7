use std::{rc::Rc, time::Duration};

use gloo_console::log;
use gloo_events::EventListener;
use invitation::{
	Countdown,
	CountdownCalculator,
	Invitation,
	RefreshDriver,
	SystemClock,
	countdown::pad_unit,
	motion::{CountdownMotion, Direction, HeartSpot, Stagger, seconds},
};
use yew::prelude::*;
use crate::{browser::BrowserScheduler, reveal::Reveal};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub invitation: Rc<Invitation>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
	let inv = &props.invitation;

	html! {
		<section id="home" class="hero">
			<Hearts />
			<div class="hero-content">
				<Reveal delay={ Stagger::SECTION.delay(0) }>
					<p class="hero-pre">{ "Save the Date" }</p>
				</Reveal>
				<Reveal delay={ Stagger::SECTION.delay(1) } class="hero-names">
					<h1>{ &inv.couple.groom }</h1>
					<span class="hero-amp">{ "&" }</span>
					<h1>{ &inv.couple.bride }</h1>
				</Reveal>
				<Reveal delay={ Stagger::SECTION.delay(2) }>
					<p class="hero-tagline">{ &inv.tagline }</p>
					<p class="hero-date">{ &inv.date_display }</p>
				</Reveal>
				<Reveal delay={ Stagger::SECTION.delay(3) } direction={ Direction::Down }>
					<a class="hero-venue" href={ inv.venue.map_url.clone() } target="_blank" rel="noopener">
						<strong>{ &inv.venue.name }</strong>
						<br />
						{ &inv.venue.address }
					</a>
				</Reveal>
				<Reveal delay={ Stagger::SECTION.delay(4) }>
					<CountdownTimer
						target={ inv.target.clone() }
						tick_interval_ms={ inv.timing.tick_interval_ms }
					/>
				</Reveal>
			</div>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
	pub target: AttrValue,
	pub tick_interval_ms: u32,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
	let countdown = use_state(|| Countdown::ZERO);
	let motion = CountdownMotion::default();

	{
		let countdown = countdown.clone();
		use_effect_with((props.target.clone(), props.tick_interval_ms), move |(target, tick)| {
			let calculator = CountdownCalculator::from_config(SystemClock, target);
			if calculator.target().is_none() {
				log!(format!("'{target}' isn't a usable date, so the countdown will stay at zero"));
			}

			let driver = Rc::new(RefreshDriver::countdown(
				&BrowserScheduler,
				Duration::from_millis(u64::from(*tick)),
				calculator,
				move |value| countdown.set(value)
			));

			// browsers throttle intervals in background tabs, so catch up as soon as we're back
			let on_visible = Rc::clone(&driver);
			let visibility = web_sys::window()
				.and_then(|w| w.document())
				.map(|document| EventListener::new(&document.clone(), "visibilitychange", move |_| {
					if !document.hidden() {
						on_visible.refresh_now();
					}
				}));

			move || {
				drop(visibility);
				drop(driver);
			}
		});
	}

	html! {
		<div class="countdown">
		{
			countdown.units().into_iter().enumerate().map(|(idx, (unit, value))| {
				let entrance = format!(
					"animation: countdown-in {} ease-out {} both;",
					seconds(motion.entrance_s),
					seconds(motion.stagger.delay(idx))
				);
				let digits = pad_unit(value);

				html! {
					<div class="countdown-box" key={ unit.key() } style={ entrance }>
						// keyed on the value so the pop replays every time it changes
						<span class="countdown-value" key={ digits.clone() }>{ digits }</span>
						<span class="countdown-label" key="label">{ unit.label() }</span>
					</div>
				}
			}).collect::<Html>()
		}
		</div>
	}
}

#[function_component(Hearts)]
fn hearts() -> Html {
	html! {
		<div class="hearts" aria-hidden="true">
		{
			HeartSpot::HERO.iter().enumerate().map(|(idx, spot)| html! {
				<span class="heart" style={ spot.style(Stagger::HEARTS.delay(idx)) }>{ "♥" }</span>
			}).collect::<Html>()
		}
		</div>
	}
}

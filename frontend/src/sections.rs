use std::rc::Rc;

use invitation::{
	Invitation,
	motion::{Direction, Stagger},
};
use yew::prelude::*;
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
	pub invitation: Rc<Invitation>,
}

#[function_component(SectionTitle)]
fn section_title(props: &TitleProps) -> Html {
	html! {
		<Reveal heading={ true } class="section-title">
			<h2>{ props.title.clone() }</h2>
			<div class="divider" />
			if let Some(subtitle) = &props.subtitle {
				<p>{ subtitle.clone() }</p>
			}
		</Reveal>
	}
}

#[derive(Properties, PartialEq)]
struct TitleProps {
	title: AttrValue,
	#[prop_or_default]
	subtitle: Option<AttrValue>,
}

#[function_component(Story)]
pub fn story(props: &SectionProps) -> Html {
	let story = &props.invitation.story;

	html! {
		<section id="story">
			<SectionTitle title={ story.title.clone() } />
			<div class="story-body">
			{
				story.paragraphs.iter().enumerate().map(|(idx, paragraph)| {
					let direction = if idx % 2 == 0 { Direction::Left } else { Direction::Right };
					html! {
						<Reveal { direction } delay={ Stagger::SECTION.delay(idx) }>
							<p>{ paragraph }</p>
						</Reveal>
					}
				}).collect::<Html>()
			}
			</div>
		</section>
	}
}

#[function_component(Events)]
pub fn events(props: &SectionProps) -> Html {
	let inv = &props.invitation;

	html! {
		<section id="events">
			<SectionTitle title="Wedding Events" subtitle={ AttrValue::from(inv.date_display.clone()) } />
			<div class="families">
			{
				inv.families.iter().enumerate().map(|(idx, family)| {
					let direction = if idx % 2 == 0 { Direction::Left } else { Direction::Right };
					html! {
						<Reveal { direction } delay={ Stagger::SECTION.delay(0) } class="family">
							<h3>{ &family.side }</h3>
							{ for family.parents.iter().map(|p| html! { <p class="parent">{ p }</p> }) }
							{ for family.address.iter().map(|a| html! { <p class="address">{ a }</p> }) }
						</Reveal>
					}
				}).collect::<Html>()
			}
			</div>
			<div class="timeline">
			{
				inv.events.iter().enumerate().map(|(idx, event)| html! {
					<Reveal delay={ Stagger::EVENTS.delay(idx) } class="event">
						<div class="event-when">
							<span class="event-time">{ &event.time }</span>
							<span class="event-date">{ &event.date }</span>
						</div>
						<div class="event-what">
							<h3>{ &event.title }</h3>
							<p>{ &event.description }</p>
							<p class="event-location">{ &event.location }</p>
						</div>
					</Reveal>
				}).collect::<Html>()
			}
			</div>
		</section>
	}
}

#[function_component(Rsvp)]
pub fn rsvp(props: &SectionProps) -> Html {
	let inv = &props.invitation;
	let rsvp = &inv.rsvp;

	// nothing here is submitted anywhere; the button just opens a prefilled email
	let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

	html! {
		<section id="rsvp">
			<Reveal delay={ Stagger::SECTION.delay(0) } heading={ true }>
				<h2>{ "RSVP" }</h2>
			</Reveal>
			<Reveal delay={ Stagger::SECTION.delay(1) }>
				<p class="rsvp-date">{ &inv.date_display }</p>
				<p class="rsvp-note">{ &rsvp.deadline }</p>
			</Reveal>
			<Reveal delay={ Stagger::SECTION.delay(2) } class="rsvp-card">
				<form { onsubmit }>
				{
					rsvp.fields.iter().map(|label| html! {
						<input type="text" placeholder={ label.clone() } />
					}).collect::<Html>()
				}
					<a class="rsvp-action" href={ rsvp.mailto() }>{ &rsvp.action_text }</a>
				</form>
			</Reveal>
			<Reveal delay={ Stagger::SECTION.delay(3) } class="rsvp-contact">
				<a href={ rsvp.mailto() }>{ "📧 Email us" }</a>
				<a href={ rsvp.tel() }>{ "📞 Call us" }</a>
			</Reveal>
		</section>
	}
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
	let inv = &props.invitation;

	html! {
		<footer id="footer">
			<Reveal class="gift">
				<h3>{ "Mừng cưới" }</h3>
				<p>{ &inv.gift.note }</p>
				<p class="bank">{ &inv.gift.bank }</p>
			</Reveal>
			<Reveal delay={ Stagger::SECTION.delay(0) } direction={ Direction::Down }>
				<p class="footer-names">{ format!("{} & {}", inv.couple.groom, inv.couple.bride) }</p>
				<p class="hashtag">{ &inv.hashtag }</p>
			</Reveal>
		</footer>
	}
}

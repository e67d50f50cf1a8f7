use std::rc::Rc;

use gloo_console::log;
use gloo_net::http::Request;
use invitation::Invitation;
use yew::prelude::*;

use gallery::Gallery;
use hero::Hero;
use intro::DoorIntro;
use nav::{Navigation, ScrollProgress};
use particles::FloatingParticles;
use sections::{Events, Footer, Rsvp, Story};
use style::SharedStyle;

mod browser;
mod gallery;
mod hero;
mod intro;
mod nav;
mod particles;
mod reveal;
mod sections;
mod style;

async fn get_invitation() -> Result<Invitation, String> {
	// This could be such a pretty functional expression but we have to make it an
	// ugly match statement cause we can't have await in closures
	match Request::get("/api/invitation").send().await {
		Ok(res) => if res.ok() {
			res.json::<Invitation>().await
				.map_err(|e| format!("There was an error while decoding: {e:?}"))
		} else {
			let text = res.text().await.unwrap_or_else(|e| format!("{e:?}"));
			Err(format!("Request returned {}: {text}", res.status()))
		},
		Err(err) => Err(format!("{err:?}"))
	}
}

#[function_component(App)]
pub fn app() -> Html {
	let invitation = use_state(|| Option::<Rc<Invitation>>::None);

	{
		let invitation = invitation.clone();
		use_effect_with((), move |()| {
			wasm_bindgen_futures::spawn_local(async move {
				// the page still has something to show if the server doesn't answer
				let loaded = get_invitation().await.unwrap_or_else(|err| {
					log!(format!("Couldn't load the invitation, using the built-in one: {err}"));
					Invitation::default()
				});

				invitation.set(Some(Rc::new(loaded)));
			});

			|| ()
		});
	}

	let Some(inv) = (*invitation).clone() else {
		return html! {
			<>
				<SharedStyle />
				<div id="loading">{ "♥" }</div>
			</>
		};
	};

	html! {
		<>
			<SharedStyle />
			<DoorIntro
				monogram={ inv.monogram.clone() }
				names={ format!("{} & {}", inv.couple.groom, inv.couple.bride) }
				timing={ inv.timing }
			/>
			<ScrollProgress />
			<Navigation monogram={ inv.monogram.clone() } />
			<FloatingParticles />
			<main>
				<Hero invitation={ Rc::clone(&inv) } />
				<Story invitation={ Rc::clone(&inv) } />
				<Events invitation={ Rc::clone(&inv) } />
				<Gallery invitation={ Rc::clone(&inv) } />
				<Rsvp invitation={ Rc::clone(&inv) } />
			</main>
			<Footer invitation={ inv } />
		</>
	}
}

fn main() {
	yew::Renderer::<App>::new().render();
}

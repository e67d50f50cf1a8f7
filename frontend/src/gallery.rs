use std::rc::Rc;

use invitation::{
	Invitation,
	gallery::{Category, Lightbox, Photo, filtered},
	motion::Stagger,
};
use yew::prelude::*;
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
	pub invitation: Rc<Invitation>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
	let photos = Rc::new(props.invitation.gallery.clone());
	let category = use_state(Category::default);
	let lightbox = use_state(Lightbox::default);

	let close = lightbox_action(&lightbox, &photos, &category, |lb, _, _| lb.close());
	let next = lightbox_action(&lightbox, &photos, &category, |lb, photos, cat| lb.next(photos, cat));
	let previous = lightbox_action(&lightbox, &photos, &category, |lb, photos, cat| lb.previous(photos, cat));

	let filters = Category::ALL.into_iter().map(|cat| {
		let onclick = {
			let category = category.clone();
			Callback::from(move |_: MouseEvent| category.set(cat))
		};

		html! {
			<button class={ classes!("filter", (*category == cat).then_some("selected")) } { onclick }>
				{ cat.label() }
			</button>
		}
	}).collect::<Html>();

	let grid = filtered(&photos, *category).into_iter().enumerate().map(|(idx, photo)| {
		let id = photo.id;
		let open = lightbox_action(&lightbox, &photos, &category, move |lb, photos, _| {
			lb.open(photos, id);
		});

		html! {
			<Reveal key={ photo.id.to_string() } delay={ Stagger::GALLERY.delay(idx) } class="photo">
				<img src={ photo.src.clone() } alt={ photo.alt.clone() } loading="lazy" onclick={ open } />
			</Reveal>
		}
	}).collect::<Html>();

	// clicking the photo itself shouldn't count as clicking the backdrop
	let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

	let shown = lightbox.current().and_then(|id| photos.iter().find(|p| p.id == id));

	html! {
		<section id="gallery">
			<Reveal delay={ Stagger::SECTION.delay(0) } heading={ true } class="section-title">
				<h2>{ "Our Memories" }</h2>
				<div class="divider" />
				<p>{ "Capturing the beautiful moments of our journey together" }</p>
			</Reveal>
			<div class="filters">{ filters }</div>
			<div class="photo-grid">{ grid }</div>
			if let Some(photo) = shown {
				<div id="lightbox" onclick={ close.clone() }>
					<button class="lightbox-prev" aria-label="Previous" onclick={ previous }>{ "‹" }</button>
					<img src={ photo.src.clone() } alt={ photo.alt.clone() } onclick={ keep_open } />
					<button class="lightbox-next" aria-label="Next" onclick={ next }>{ "›" }</button>
					<button class="lightbox-close" aria-label="Close" onclick={ close }>{ "✕" }</button>
				</div>
			}
		</section>
	}
}

/// Copy the lightbox, change it, put it back
fn lightbox_action(
	lightbox: &UseStateHandle<Lightbox>,
	photos: &Rc<Vec<Photo>>,
	category: &UseStateHandle<Category>,
	change: impl Fn(&mut Lightbox, &[Photo], Category) + 'static
) -> Callback<MouseEvent> {
	let lightbox = lightbox.clone();
	let photos = Rc::clone(photos);
	let category = category.clone();

	Callback::from(move |e: MouseEvent| {
		// the lightbox closes when its backdrop is clicked, so don't let the buttons bubble to it
		e.stop_propagation();
		let mut next = *lightbox;
		change(&mut next, &photos, *category);
		lightbox.set(next);
	})
}

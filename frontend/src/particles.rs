use invitation::{motion::ParticleMotion, particles::ParticleField};
use rand::{SeedableRng, rngs::SmallRng};
use yew::prelude::*;

const RISE: &str = "particle-rise";

/// The field is made once per mount and dropped with the component
#[function_component(FloatingParticles)]
pub fn floating_particles() -> Html {
	let field = use_memo((), |()| {
		// Math.random is good enough to seed some floating dust
		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		ParticleField::scatter(&ParticleMotion::default(), &mut SmallRng::seed_from_u64(seed))
	});

	html! {
		<div id="particles" aria-hidden="true">
			<style>{ field.keyframes(RISE) }</style>
			{
				field.particles().iter().map(|p| html! {
					<div class="particle" style={ p.style(RISE) } />
				}).collect::<Html>()
			}
		</div>
	}
}

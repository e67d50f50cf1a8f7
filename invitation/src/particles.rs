use rand::Rng;

use crate::motion::ParticleMotion;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// percent of the container
	pub left_pct: f64,
	pub top_pct: f64,
	/// px sideways over one rise
	pub drift_px: f64,
	pub duration_s: f64,
	pub delay_s: f64,
}

impl Particle {
	/// Inline style for this particle; `rise` is the name of the keyframes from [`ParticleField::keyframes`]
	#[must_use]
	pub fn style(&self, rise: &str) -> String {
		format!(
			"left: {:.2}%; top: {:.2}%; --drift: {:.1}px; animation: {rise} {:.2}s linear {:.2}s infinite;",
			self.left_pct, self.top_pct, self.drift_px, self.duration_s, self.delay_s
		)
	}
}

/// A set of particles belonging to whoever made it. Nothing about it is global; two fields never
/// share state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
	particles: Vec<Particle>,
	rise_px: f64
}

impl ParticleField {
	pub fn scatter<R: Rng>(motion: &ParticleMotion, rng: &mut R) -> Self {
		let duration_span = (motion.max_duration_s - motion.min_duration_s).max(0.0);

		let particles = (0..motion.count)
			.map(|_| Particle {
				left_pct: rng.gen_range(0.0..100.0),
				top_pct: rng.gen_range(0.0..100.0),
				drift_px: rng.gen_range(-motion.max_drift_px..=motion.max_drift_px),
				duration_s: motion.min_duration_s + rng.gen_range(0.0..1.0) * duration_span,
				delay_s: rng.gen_range(0.0..1.0) * motion.max_delay_s,
			})
			.collect();

		Self { particles, rise_px: motion.rise_px }
	}

	#[must_use]
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	#[must_use]
	pub fn keyframes(&self, name: &str) -> String {
		format!(
			"@keyframes {name} {{ from {{ transform: translate(0, 0); }} to {{ transform: translate(var(--drift), -{}px); }} }}",
			self.rise_px
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{SeedableRng, rngs::SmallRng};

	#[test]
	fn stays_in_range() {
		let motion = ParticleMotion::default();

		for seed in 0..20 {
			let field = ParticleField::scatter(&motion, &mut SmallRng::seed_from_u64(seed));
			assert_eq!(field.len(), 12);

			for p in field.particles() {
				assert!((0.0..100.0).contains(&p.left_pct));
				assert!((0.0..100.0).contains(&p.top_pct));
				assert!((-25.0..=25.0).contains(&p.drift_px));
				assert!((10.0..20.0).contains(&p.duration_s), "{}", p.duration_s);
				assert!((0.0..5.0).contains(&p.delay_s));
			}
		}
	}

	#[test]
	fn same_seed_same_field() {
		let motion = ParticleMotion::default();
		let a = ParticleField::scatter(&motion, &mut SmallRng::seed_from_u64(7));
		let b = ParticleField::scatter(&motion, &mut SmallRng::seed_from_u64(7));
		assert_eq!(a, b);
	}

	#[test]
	fn empty_field() {
		let motion = ParticleMotion { count: 0, ..ParticleMotion::default() };
		let field = ParticleField::scatter(&motion, &mut SmallRng::seed_from_u64(1));
		assert!(field.is_empty());
		assert!(field.keyframes("rise").contains("-100px"));
	}
}

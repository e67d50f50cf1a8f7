use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
	countdown::TargetInstant,
	error::ConfigError,
	gallery::{Category, Photo},
	rsvp::RsvpTarget,
	timer::MAX_TIMER_MS,
};

/// Everything the page shows. This is loaded once when the server starts and handed to the
/// frontend as-is; none of it changes while the page is open.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Invitation {
	pub couple: Couple,
	/// shown at the top of the door intro and in the nav bar
	pub monogram: String,
	pub tagline: String,
	pub date_display: String,
	/// ISO-8601, with an offset. The countdown counts down to this.
	pub target: String,
	pub venue: Venue,
	pub story: Story,
	pub events: Vec<WeddingEvent>,
	pub families: Vec<Family>,
	pub gallery: Vec<Photo>,
	pub rsvp: RsvpTarget,
	pub gift: Gift,
	pub hashtag: String,
	pub timing: Timing,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Couple {
	pub groom: String,
	pub bride: String
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Venue {
	pub name: String,
	pub address: String,
	pub map_url: String
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Story {
	pub title: String,
	pub paragraphs: Vec<String>
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WeddingEvent {
	pub date: String,
	pub time: String,
	pub title: String,
	pub description: String,
	pub location: String
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Family {
	pub side: String,
	pub parents: Vec<String>,
	pub address: Vec<String>
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Gift {
	pub note: String,
	pub bank: String
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct Timing {
	pub tick_interval_ms: u32,
	pub intro_duration_s: f64,
	pub intro_delay_s: f64,
	pub intro_hold_s: f64,
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			tick_interval_ms: 1000,
			intro_duration_s: 2.0,
			intro_delay_s: 1.0,
			intro_hold_s: 2.0,
		}
	}
}

impl Timing {
	/// Upper bound on each of the intro's delay, duration and hold
	pub const MAX_INTRO_PART_S: f64 = 60.0;

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(1..=MAX_TIMER_MS).contains(&self.tick_interval_ms) {
			return Err(ConfigError::InvalidTiming(format!(
				"tick_interval_ms must be between 1 and {MAX_TIMER_MS}, not {}",
				self.tick_interval_ms
			)));
		}

		for (name, value) in [
			("intro_duration_s", self.intro_duration_s),
			("intro_delay_s", self.intro_delay_s),
			("intro_hold_s", self.intro_hold_s),
		] {
			if !(0.0..=Self::MAX_INTRO_PART_S).contains(&value) {
				return Err(ConfigError::InvalidTiming(format!(
					"{name} must be between 0 and {} seconds, not {value}",
					Self::MAX_INTRO_PART_S
				)));
			}
		}

		Ok(())
	}

	#[must_use]
	pub fn tick_interval(&self) -> std::time::Duration {
		std::time::Duration::from_millis(u64::from(self.tick_interval_ms))
	}
}

impl Invitation {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let invitation: Self = serde_json::from_str(json)?;
		invitation.validate()?;
		Ok(invitation)
	}

	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let json = std::fs::read_to_string(path)
			.map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

		Self::from_json(&json)
	}

	/// Everything that has to be right before we start serving. Returns the parsed target so
	/// callers don't have to parse it twice.
	pub fn validate(&self) -> Result<TargetInstant, ConfigError> {
		self.timing.validate()?;
		self.rsvp.validate()?;
		TargetInstant::parse(&self.target)
	}

	/// Doesn't fail; a broken target just means there's nothing to count down to
	#[must_use]
	pub fn target_instant(&self) -> Option<TargetInstant> {
		TargetInstant::parse(&self.target).ok()
	}

	#[must_use]
	pub fn page_title(&self) -> String {
		format!("{} & {} Wedding", self.couple.groom, self.couple.bride)
	}

	#[must_use]
	pub fn page_description(&self) -> String {
		format!("Save the Date - {}", self.date_display)
	}
}

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
	items.into_iter().map(str::to_string).collect()
}

impl Default for Invitation {
	fn default() -> Self {
		let event = |date: &str, time: &str, title: &str, description: &str, location: &str| WeddingEvent {
			date: date.into(),
			time: time.into(),
			title: title.into(),
			description: description.into(),
			location: location.into(),
		};

		let photo = |id: u32, slug: &str, alt: &str, category: Category| Photo {
			id,
			src: format!("https://images.unsplash.com/photo-{slug}?q=80&w=800&auto=format&fit=crop"),
			alt: alt.into(),
			category,
		};

		Self {
			couple: Couple { groom: "Hồ Hải Đăng".into(), bride: "Nguyễn My".into() },
			monogram: "M & Đ".into(),
			tagline: "are getting married".into(),
			date_display: "October 29, 2025".into(),
			target: "2025-10-29T11:00:00+07:00".into(),
			venue: Venue {
				name: "Nhà Hàng Tướng Duy".into(),
				address: "Hoài Ân, Bình Định".into(),
				map_url: "https://maps.google.com/?q=Hoai+An+Binh+Dinh".into(),
			},
			story: Story {
				title: "Our Story".into(),
				paragraphs: strings([
					"It was a crisp autumn morning at the local coffee shop when our eyes first met. A simple \"excuse me, is this seat taken?\" turned into hours of conversation and the beginning of our story.",
					"Three years later, during a sunset walk on the beach where we had our first date, one knee went down and one question changed our lives forever. We can't wait to celebrate this special day with all of you!",
				]),
			},
			events: vec![
				event("Tối 27/10/2025", "18:00", "Tổ chức ăn uống nhà", "Gia đình họp mặt & chuẩn bị", "Nhà Trai - Hoài Ân, Bình Định"),
				event("Chiều 28/10/2025", "17:30", "Lễ Vu Quy", "Bưng quả qua nhà gái", "Fleur De Lys Quy Nhơn - 16 Nguyễn Huệ, Quy Nhơn, Bình Định"),
				event("Sáng 29/10/2025", "11:00", "Lễ Tân Hôn", "Nhận quả trả - Thành hôn", "Nhà Hàng Tướng Duy - Hoài Ân, Bình Định"),
				event("Tối 21/11/2025", "18:00", "Tiệc Báo Hỷ", "Tiệc cưới mừng đám cưới", "Sài Gòn"),
			],
			families: vec![
				Family {
					side: "Nhà Trai".into(),
					parents: strings(["Ông Hồ Văn Ngọc", "Bà Hồ Thị Kim Liên"]),
					address: strings(["238 Quang Trung, Thị Trấn Tăng Bạt Hổ", "Hoài Ân, Bình Định"]),
				},
				Family {
					side: "Nhà Gái".into(),
					parents: strings(["Ông Nguyễn Thiên Hoà", "Bà Huỳnh Thị Ngọc Tuyết"]),
					address: strings(["472 Đoạn Thạnh, Quy Nhơn", "Tỉnh Bình Định"]),
				},
			],
			gallery: vec![
				photo(1, "1519741497674-611481863552", "Engagement Photo 1", Category::Engagement),
				photo(2, "1464366400600-7168b8af9bc3", "Pre-wedding Photo 1", Category::PreWedding),
				photo(3, "1469371670807-013ccf25f16a", "Couple Photo 1", Category::Couple),
				photo(4, "1519225421980-715cb0215aed", "Engagement Photo 2", Category::Engagement),
				photo(5, "1583939003579-730e3918a45a", "Pre-wedding Photo 2", Category::PreWedding),
				photo(6, "1522673607200-164d1b6ce486", "Couple Photo 2", Category::Couple),
			],
			rsvp: RsvpTarget::default(),
			gift: Gift {
				note: "Tình cảm chân thành là món quà quý báu nhất.".into(),
				bank: "Techcombank: 1234 567 890 (Nguyễn My)".into(),
			},
			hashtag: "#DangMy2025".into(),
			timing: Timing::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_valid() {
		let invitation = Invitation::default();
		let target = invitation.validate().unwrap();
		assert_eq!(target.to_string(), "2025-10-29T11:00:00+07:00");
		assert_eq!(invitation.page_title(), "Hồ Hải Đăng & Nguyễn My Wedding");
	}

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let invitation = Invitation::from_json(r#"{
			"target": "2024-12-15T17:00:00+07:00",
			"timing": { "tick_interval_ms": 500 }
		}"#).unwrap();

		assert_eq!(invitation.target, "2024-12-15T17:00:00+07:00");
		assert_eq!(invitation.timing.tick_interval_ms, 500);
		assert_eq!(invitation.timing.intro_delay_s, 1.0);
		assert_eq!(invitation.events, Invitation::default().events);
	}

	#[test]
	fn bad_target_is_a_startup_error() {
		let err = Invitation::from_json(r#"{ "target": "next tuesday" }"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidTarget { ref value, .. } if value == "next tuesday"), "{err}");

		let invitation = Invitation { target: "next tuesday".into(), ..Invitation::default() };
		assert!(invitation.target_instant().is_none());
	}

	#[test]
	fn bad_timing_is_a_startup_error() {
		let err = Invitation::from_json(r#"{ "timing": { "tick_interval_ms": 0 } }"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidTiming(_)), "{err}");

		let err = Invitation::from_json(r#"{ "timing": { "intro_hold_s": -1.0 } }"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidTiming(_)), "{err}");
	}

	#[test]
	fn timing_has_upper_bounds() {
		// would overflow a Duration once the intro parts are added up
		let err = Invitation::from_json(r#"{ "timing": { "intro_hold_s": 1e20 } }"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidTiming(_)), "{err}");

		// fits a u32, but not the i32 that setInterval takes
		let err = Invitation::from_json(r#"{ "timing": { "tick_interval_ms": 3000000000 } }"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidTiming(_)), "{err}");

		let edge = Timing {
			tick_interval_ms: MAX_TIMER_MS,
			intro_duration_s: Timing::MAX_INTRO_PART_S,
			intro_delay_s: 0.0,
			intro_hold_s: Timing::MAX_INTRO_PART_S,
		};
		assert!(edge.validate().is_ok());
	}

	#[test]
	fn bad_rsvp_email_is_a_startup_error() {
		let err = Invitation::from_json(r#"{ "rsvp": { "email": "my@example.com\n" } }"#).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidRsvpEmail(ref email) if email == "my@example.com\n"), "{err}");

		for email in ["", "not an email", "nobody.example.com"] {
			let invitation = Invitation {
				rsvp: RsvpTarget { email: email.into(), ..RsvpTarget::default() },
				..Invitation::default()
			};
			assert!(matches!(invitation.validate(), Err(ConfigError::InvalidRsvpEmail(_))), "{email:?}");
		}
	}

	#[test]
	fn malformed_json() {
		assert!(matches!(Invitation::from_json("{ nope"), Err(ConfigError::Json(_))));
	}

	#[test]
	fn missing_file() {
		let err = Invitation::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }), "{err}");
	}
}

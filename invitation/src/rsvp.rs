use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where RSVPs go. Nothing is ever submitted from the page; guests get a prefilled email instead.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RsvpTarget {
	pub email: String,
	pub phone: String,
	pub subject: String,
	/// each of these becomes a `label: ` line in the email body for the guest to fill in
	pub fields: Vec<String>,
	pub action_text: String,
	pub deadline: String,
}

impl Default for RsvpTarget {
	fn default() -> Self {
		Self {
			email: "my.nguyen@example.com".into(),
			phone: "+1234567890".into(),
			subject: "RSVP Wedding".into(),
			fields: vec!["Họ tên".into(), "Số lượng".into(), "Ghi chú".into()],
			action_text: "Xác nhận tham dự".into(),
			deadline: "Vui lòng phản hồi trước ngày 15/10/2025".into(),
		}
	}
}

impl RsvpTarget {
	/// The address goes into the `mailto:` link unescaped (and from there into a `Location`
	/// header), so it has to look like an address and can't carry whitespace or control characters.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let usable = self.email
			.split_once('@')
			.is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty())
			&& !self.email.chars().any(|c| c.is_whitespace() || c.is_control());

		if usable {
			Ok(())
		} else {
			Err(ConfigError::InvalidRsvpEmail(self.email.clone()))
		}
	}

	#[must_use]
	pub fn body(&self) -> String {
		self.fields.iter().map(|label| format!("{label}: \n")).collect()
	}

	#[must_use]
	pub fn mailto(&self) -> String {
		format!(
			"mailto:{}?subject={}&body={}",
			self.email,
			urlencoding::encode(&self.subject),
			urlencoding::encode(&self.body())
		)
	}

	/// Only the characters a dialer cares about
	#[must_use]
	pub fn tel(&self) -> String {
		let number = self.phone
			.chars()
			.filter(|c| c.is_ascii_digit() || *c == '+')
			.collect::<String>();

		format!("tel:{number}")
	}
}

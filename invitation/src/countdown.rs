use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{clock::Clock, error::ConfigError};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// The moment everything counts down to. Keeps the offset it was written with so it can be shown
/// back to people the way it was configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetInstant(DateTime<FixedOffset>);

impl TargetInstant {
	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		DateTime::parse_from_rfc3339(raw.trim())
			.map(Self)
			.map_err(|source| ConfigError::InvalidTarget { value: raw.to_string(), source })
	}

	#[must_use]
	pub fn instant(&self) -> DateTime<FixedOffset> {
		self.0
	}

	#[must_use]
	pub fn utc(&self) -> DateTime<Utc> {
		self.0.with_timezone(&Utc)
	}
}

impl FromStr for TargetInstant {
	type Err = ConfigError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for TargetInstant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.to_rfc3339())
	}
}

/// Time left until the target, already split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64
}

impl Countdown {
	pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

	/// Whole seconds from `now` until `target`, floored, split at each unit boundary. Anything at or
	/// past the target is all zeros; we never count up.
	#[must_use]
	pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
		let remaining_ms = target.signed_duration_since(now).num_milliseconds();

		// i64 -> u64 is fine here since we just checked it's positive
		if remaining_ms <= 0 {
			Self::ZERO
		} else {
			Self::from_total_seconds(remaining_ms as u64 / 1000)
		}
	}

	#[must_use]
	pub fn from_total_seconds(total: u64) -> Self {
		Self {
			days: total / SECS_PER_DAY,
			hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
			minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
			seconds: total % SECS_PER_MINUTE,
		}
	}

	#[must_use]
	pub fn total_seconds(&self) -> u64 {
		self.days * SECS_PER_DAY
			+ self.hours * SECS_PER_HOUR
			+ self.minutes * SECS_PER_MINUTE
			+ self.seconds
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		*self == Self::ZERO
	}

	/// In the order they're shown on the page
	#[must_use]
	pub fn units(&self) -> [(CountdownUnit, u64); 4] {
		[
			(CountdownUnit::Days, self.days),
			(CountdownUnit::Hours, self.hours),
			(CountdownUnit::Minutes, self.minutes),
			(CountdownUnit::Seconds, self.seconds),
		]
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountdownUnit {
	Days,
	Hours,
	Minutes,
	Seconds
}

impl CountdownUnit {
	#[must_use]
	pub fn key(self) -> &'static str {
		match self {
			Self::Days => "days",
			Self::Hours => "hours",
			Self::Minutes => "minutes",
			Self::Seconds => "seconds",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Days => "Ngày",
			Self::Hours => "Giờ",
			Self::Minutes => "Phút",
			Self::Seconds => "Giây",
		}
	}
}

/// Always at least two digits, so the boxes don't jump around as the seconds tick over
#[must_use]
pub fn pad_unit(value: u64) -> String {
	format!("{value:02}")
}

/// Binds a clock to the (maybe missing) target. Without a target, every reading is zero; a bad
/// target is a configuration problem that should've been caught at startup, and the page would
/// rather show zeros than an error.
pub struct CountdownCalculator<C> {
	clock: C,
	target: Option<TargetInstant>
}

impl<C: Clock> CountdownCalculator<C> {
	pub fn new(clock: C, target: Option<TargetInstant>) -> Self {
		Self { clock, target }
	}

	pub fn from_config(clock: C, raw_target: &str) -> Self {
		let target = TargetInstant::parse(raw_target)
			.inspect_err(|e| tracing::warn!("Countdown will stay at zero: {e}"))
			.ok();

		Self { clock, target }
	}

	#[must_use]
	pub fn target(&self) -> Option<TargetInstant> {
		self.target
	}

	#[must_use]
	pub fn current(&self) -> Countdown {
		self.target
			.map_or(Countdown::ZERO, |target| Countdown::between(self.clock.now(), target.utc()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::clock::ManualClock;
	use chrono::Duration;

	const WEDDING: &str = "2025-10-29T11:00:00+07:00";

	fn target() -> DateTime<Utc> {
		TargetInstant::parse(WEDDING).unwrap().utc()
	}

	#[test]
	fn one_of_each_unit() {
		let now = target() - Duration::seconds(90_061);
		assert_eq!(
			Countdown::between(now, target()),
			Countdown { days: 1, hours: 1, minutes: 1, seconds: 1 }
		);
	}

	#[test]
	fn past_target_is_zero() {
		let now = target() + Duration::seconds(10);
		assert_eq!(Countdown::between(now, target()), Countdown::ZERO);
		assert_eq!(Countdown::between(target(), target()), Countdown::ZERO);
	}

	#[test]
	fn fields_add_back_up_to_floored_seconds() {
		let offsets_ms = [1, 999, 1000, 1001, 59_999, 3_599_999, 86_399_999, 86_400_000, 123_456_789, 9_876_543_210];

		for ms in offsets_ms {
			let now = target() - Duration::milliseconds(ms);
			let left = Countdown::between(now, target());

			assert_eq!(left.total_seconds(), ms as u64 / 1000, "offset {ms}ms");
			assert!(left.hours < 24 && left.minutes < 60 && left.seconds < 60, "{left:?} for {ms}ms");
		}
	}

	#[test]
	fn sub_second_remainder_is_floored() {
		let now = target() - Duration::milliseconds(1999);
		assert_eq!(Countdown::between(now, target()), Countdown { seconds: 1, ..Countdown::ZERO });

		let now = target() - Duration::milliseconds(999);
		assert!(Countdown::between(now, target()).is_zero());
	}

	#[test]
	fn same_inputs_same_answer() {
		let now = target() - Duration::seconds(1_000_000);
		assert_eq!(Countdown::between(now, target()), Countdown::between(now, target()));
	}

	#[test]
	fn calculator_follows_clock() {
		let clock = ManualClock::new(target() - Duration::seconds(61));
		let calc = CountdownCalculator::from_config(&clock, WEDDING);
		assert_eq!(calc.current(), Countdown { minutes: 1, seconds: 1, ..Countdown::ZERO });

		clock.advance(Duration::seconds(60));
		assert_eq!(calc.current(), Countdown { seconds: 1, ..Countdown::ZERO });

		clock.advance(Duration::seconds(3600));
		assert_eq!(calc.current(), Countdown::ZERO);
	}

	#[test]
	fn bad_target_fails_soft() {
		let clock = ManualClock::new(target() - Duration::days(3));
		let calc = CountdownCalculator::from_config(&clock, "sometime in october");
		assert!(calc.target().is_none());
		assert_eq!(calc.current(), Countdown::ZERO);

		assert!(matches!(
			TargetInstant::parse("2025-13-40T11:00:00+07:00"),
			Err(ConfigError::InvalidTarget { .. })
		));
	}

	#[test]
	fn offset_is_respected() {
		// 11:00 at +07:00 is 04:00 UTC
		let utc = TargetInstant::parse(WEDDING).unwrap().utc();
		assert_eq!(utc.to_rfc3339(), "2025-10-29T04:00:00+00:00");
	}

	#[test]
	fn padding() {
		assert_eq!(pad_unit(0), "00");
		assert_eq!(pad_unit(7), "07");
		assert_eq!(pad_unit(42), "42");
		assert_eq!(pad_unit(365), "365");
	}
}

pub mod clock;
pub mod content;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod intro;
pub mod motion;
pub mod nav;
pub mod particles;
pub mod refresh;
pub mod reveal;
pub mod rsvp;
pub mod style;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use content::{Invitation, Timing};
pub use countdown::{Countdown, CountdownCalculator, CountdownUnit, TargetInstant};
pub use error::ConfigError;
pub use intro::{IntroDriver, IntroState, ScrollLock};
pub use refresh::{DisplaySink, RefreshDriver};
pub use reveal::{RevealState, RevealTrigger, Viewport};
pub use style::BASE_STYLE;
pub use timer::Scheduler;

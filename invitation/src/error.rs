use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading the invitation. All of these are startup errors;
/// nothing here is produced while the page is running.
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("'{value}' is not a valid ISO-8601 instant: {source}")]
	InvalidTarget {
		value: String,
		#[source]
		source: chrono::ParseError
	},

	#[error("Couldn't parse invitation: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Couldn't read invitation at {path:?}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error
	},

	#[error("Invalid timing configuration: {0}")]
	InvalidTiming(String),

	#[error("{0:?} can't be used as an RSVP email address")]
	InvalidRsvpEmail(String),
}

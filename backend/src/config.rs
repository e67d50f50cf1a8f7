use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf,
};

use invitation::{ConfigError, Invitation};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FRONTEND_DIR: &str = "frontend/pkg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	/// When unset, the built-in invitation is served
	pub invitation_file: Option<PathBuf>,
	pub frontend_dir: PathBuf,
}

impl Config {
	/// Reads `.env` (if there is one) and the environment
	#[must_use]
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		macro_rules! env_parse{
			($key:expr, $default:expr, $type:ty) => {
				match lookup($key).filter(|v| !v.is_empty()) {
					None => $default,
					Some(v) => v.parse::<$type>().unwrap_or_else(|e| {
						tracing::warn!("{} is set to '{v}', which isn't valid ({e}); using {}", $key, $default);
						$default
					})
				}
			}
		}

		let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

		Self {
			host: env_parse!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr),
			port: env_parse!("BACKEND_PORT", DEFAULT_PORT, u16),
			invitation_file: non_empty("INVITATION_FILE").map(PathBuf::from),
			frontend_dir: non_empty("FRONTEND_DIR").map_or_else(|| DEFAULT_FRONTEND_DIR.into(), PathBuf::from),
		}
	}

	#[must_use]
	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}

	/// Loads and validates the invitation. Anything wrong with it is fatal; there's no point
	/// serving a page that counts down to nothing.
	pub fn load_invitation(&self) -> Result<Invitation, ConfigError> {
		let invitation = match &self.invitation_file {
			Some(path) => {
				tracing::info!("Reading invitation from {}", path.display());
				Invitation::from_file(path)?
			},
			None => {
				tracing::info!("INVITATION_FILE isn't set; using the built-in invitation");
				Invitation::default()
			}
		};

		invitation.validate()?;
		Ok(invitation)
	}
}

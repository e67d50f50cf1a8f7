use std::sync::Arc;

use backend::{
	config::Config,
	server::{AppState, router},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_target(false)
		.init();

	let config = Config::from_env();
	tracing::info!("Read .env...");

	// A broken invitation means a broken countdown, so don't even start
	let state = match config.load_invitation().and_then(AppState::new) {
		Ok(state) => state,
		Err(err) => {
			tracing::error!("Couldn't load the invitation: {err}");
			std::process::exit(1);
		}
	};

	tracing::info!("Counting down to {}", state.target);

	if !config.frontend_dir.is_dir() {
		tracing::warn!(
			"FRONTEND_DIR ({}) isn't a directory; the page will load without its frontend",
			config.frontend_dir.display()
		);
	}

	let app = router(Arc::new(state), &config.frontend_dir);
	let listener = tokio::net::TcpListener::bind(config.addr()).await?;

	tracing::info!("Serving axum on {}...", config.addr());

	axum::serve(listener, app).await?;

	Ok(())
}

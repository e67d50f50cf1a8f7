use std::{path::Path, sync::Arc};

use axum::{
	extract::State,
	http::{HeaderValue, StatusCode, header},
	response::{Html, IntoResponse},
	routing::get,
	Json,
	Router,
};
use chrono::Utc;
use horrorshow::Template;
use invitation::{ConfigError, Countdown, Invitation, TargetInstant};
use tower_http::services::ServeDir;

use crate::page::PageShell;

/// Everything the handlers need, all of it checked before the server starts
pub struct AppState {
	pub invitation: Invitation,
	pub target: TargetInstant,
}

impl AppState {
	pub fn new(invitation: Invitation) -> Result<Self, ConfigError> {
		let target = invitation.validate()?;
		Ok(Self { invitation, target })
	}
}

pub fn router(state: Arc<AppState>, frontend_dir: &Path) -> Router {
	Router::new()
		.route("/", get(page))
		.route("/api/invitation", get(get_invitation))
		.route("/rsvp", get(rsvp))
		.nest_service("/pkg", ServeDir::new(frontend_dir))
		.with_state(state)
}

async fn page(State(state): State<Arc<AppState>>) -> Result<Html<String>, (StatusCode, String)> {
	let countdown = Countdown::between(Utc::now(), state.target.utc());

	PageShell { invitation: &state.invitation, countdown }
		.into_string()
		.map(Html)
		.map_err(|e| {
			tracing::error!("Couldn't render the page shell: {e:?}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't render page: {e:?}"))
		})
}

async fn get_invitation(State(state): State<Arc<AppState>>) -> Json<Invitation> {
	Json(state.invitation.clone())
}

async fn rsvp(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, (StatusCode, String)> {
	let mailto = state.invitation.rsvp.mailto();

	let location = HeaderValue::from_str(&mailto).map_err(|e| {
		tracing::error!("Couldn't turn {mailto:?} into a redirect: {e}");
		(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't build RSVP link: {e}"))
	})?;

	Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::{Body, to_bytes},
		http::Request,
	};
	use invitation::rsvp::RsvpTarget;
	use tower::ServiceExt;

	fn app() -> Router {
		let state = AppState::new(Invitation::default()).unwrap();
		router(Arc::new(state), Path::new("/definitely/not/a/bundle"))
	}

	async fn get_from(app: Router, uri: &str) -> axum::response::Response {
		app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
			.await
			.unwrap()
	}

	async fn get(uri: &str) -> axum::response::Response {
		get_from(app(), uri).await
	}

	#[tokio::test]
	async fn serves_invitation_json() {
		let res = get("/api/invitation").await;
		assert_eq!(res.status(), StatusCode::OK);

		let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
		let inv: Invitation = serde_json::from_slice(&body).unwrap();
		assert_eq!(inv, Invitation::default());
	}

	#[tokio::test]
	async fn rsvp_redirects_to_mail() {
		let res = get("/rsvp").await;
		assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);

		let location = res.headers()[header::LOCATION].to_str().unwrap();
		assert_eq!(location, Invitation::default().rsvp.mailto());
	}

	#[tokio::test]
	async fn unusable_rsvp_email_is_an_error_not_a_crash() {
		let bad = Invitation {
			rsvp: RsvpTarget { email: "my@example.com\n".into(), ..RsvpTarget::default() },
			..Invitation::default()
		};
		assert!(matches!(AppState::new(bad.clone()), Err(ConfigError::InvalidRsvpEmail(_))));

		// skip validation to make sure the handler still copes on its own
		let target = Invitation::default().validate().unwrap();
		let state = AppState { invitation: bad, target };
		let app = router(Arc::new(state), Path::new("/definitely/not/a/bundle"));

		let res = get_from(app, "/rsvp").await;
		assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert!(res.headers().get(header::LOCATION).is_none());
	}

	#[tokio::test]
	async fn renders_page_shell() {
		let res = get("/").await;
		assert_eq!(res.status(), StatusCode::OK);

		let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
		let html = String::from_utf8(body.to_vec()).unwrap();
		assert!(html.contains("<noscript>"), "{html}");
		assert!(html.contains("Nhà Hàng Tướng Duy"));
	}

	#[tokio::test]
	async fn missing_bundle_is_404() {
		let res = get("/pkg/frontend.js").await;
		assert_eq!(res.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn bad_target_refuses_state() {
		let inv = Invitation { target: "soon".into(), ..Invitation::default() };
		assert!(matches!(AppState::new(inv), Err(ConfigError::InvalidTarget { .. })));
	}
}

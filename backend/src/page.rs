use horrorshow::{RenderOnce, TemplateBuffer, html, Raw, helper::doctype};
use invitation::{Countdown, Invitation, countdown::pad_unit};

/// Loads the wasm bundle that `trunk`/`wasm-bindgen` put in `/pkg`
const BOOTSTRAP: &str = r#"import init from "/pkg/frontend.js"; init();"#;

const NOSCRIPT_STYLE: &str = r"
#noscript {
	max-width: 700px;
	margin: 80px auto;
	padding: 0 24px;
	text-align: center;
}
#noscript ol {
	text-align: left;
}
";

/// The html the server sends before the frontend takes over. It has just enough in it to be
/// useful to people (and crawlers) without javascript.
pub struct PageShell<'a> {
	pub invitation: &'a Invitation,
	/// as of when the page was rendered
	pub countdown: Countdown,
}

impl RenderOnce for PageShell<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let inv = self.invitation;
		let countdown = self.countdown;

		tmpl << html! {
			: doctype::HTML;
			html(lang = "vi") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : inv.page_title();
					meta(name = "description", content = inv.page_description());
					style : Raw(invitation::BASE_STYLE);
					style : Raw(NOSCRIPT_STYLE);
					script(type = "module") : Raw(BOOTSTRAP);
				}
				body {
					noscript {
						div(id = "noscript") {
							h1 : format_args!("{} & {}", inv.couple.groom, inv.couple.bride);
							p : &inv.tagline;
							h2 : &inv.date_display;
							p {
								a(href = &inv.venue.map_url) : &inv.venue.name;
								br;
								: &inv.venue.address;
							}
							p(class = "countdown") {
								@ for (unit, value) in countdown.units() {
									span(class = "countdown-box") : format_args!("{} {} ", pad_unit(value), unit.label());
								}
							}
							ol {
								@ for event in &inv.events {
									li {
										strong : format_args!("{} {}", event.time, event.date);
										: format_args!(" - {}: {} ({})", event.title, event.description, event.location);
									}
								}
							}
							p {
								a(href = "/rsvp") : &inv.rsvp.action_text;
							}
						}
					}
				}
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use horrorshow::Template;

	#[test]
	fn noscript_fallback() {
		let inv = Invitation::default();
		let html = PageShell { invitation: &inv, countdown: Countdown::from_total_seconds(90_061) }
			.into_string()
			.unwrap();

		assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
		assert!(html.contains("<title>Hồ Hải Đăng &amp; Nguyễn My Wedding</title>"), "{html}");
		assert!(html.contains(r#"<span class="countdown-box">01 Ngày </span>"#), "{html}");
		assert!(html.contains("01 Giây"));
		assert!(html.contains("Lễ Tân Hôn"));
		assert!(html.contains(r#"<a href="/rsvp">"#));
		assert!(html.contains(r#"import init from "/pkg/frontend.js""#));
	}
}

use const_format::concatcp;

use crate::motion::{CountdownMotion, MenuMotion, PulseMotion, seconds};

const FONTS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:ital@0;1&family=Be+Vietnam+Pro:wght@300;400;500&display=swap');
"#;

const PALETTE: &str = r#"
* {
	--stone-50: #fafaf9;
	--stone-100: #f5f5f4;
	--stone-200: #e7e5e4;
	--stone-300: #d6d3d1;
	--stone-600: #57534e;
	--stone-800: #292524;
	--stone-900: #1c1917;
	--accent: #b08d57;
	box-sizing: border-box;
	font-family: "Be Vietnam Pro", Arial, sans-serif;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	background-color: var(--stone-50);
	color: var(--stone-800);
}
h1, h2, h3, .serif {
	font-family: "Playfair Display", Georgia, serif;
	font-weight: normal;
}
a {
	color: inherit;
}
section {
	padding: 80px 24px;
	position: relative;
}
"#;

const LAYOUT: &str = r#"
#loading {
	display: flex;
	height: 100vh;
	align-items: center;
	justify-content: center;
	font-size: 48px;
	color: var(--stone-300);
}
#intro-overlay {
	position: fixed;
	inset: 0;
	z-index: 100;
	perspective: 1200px;
	overflow: hidden;
}
.door {
	position: absolute;
	top: 0;
	width: 50%;
	height: 100%;
	z-index: 1;
	background: linear-gradient(135deg, var(--stone-100), var(--stone-300));
	backface-visibility: hidden;
}
.door-left {
	left: 0;
	transform-origin: left center;
	border-right: 1px solid var(--stone-300);
}
.door-right {
	right: 0;
	transform-origin: right center;
	border-left: 1px solid var(--stone-300);
}
#intro-logo {
	position: absolute;
	inset: 0;
	display: flex;
	flex-direction: column;
	align-items: center;
	justify-content: center;
	z-index: 0;
	pointer-events: none;
}
#intro-logo h1 {
	font-size: 64px;
	margin: 0;
}
#intro-skip {
	position: absolute;
	z-index: 2;
	bottom: 32px;
	right: 32px;
	background: none;
	border: 1px solid var(--stone-600);
	padding: 6px 14px;
	border-radius: 999px;
	cursor: pointer;
}
#scroll-progress {
	position: fixed;
	top: 0;
	left: 0;
	right: 0;
	height: 3px;
	background-color: var(--accent);
	transform-origin: left center;
	z-index: 60;
}
#nav {
	position: fixed;
	top: 0;
	left: 0;
	right: 0;
	z-index: 50;
	padding: 16px 24px;
	transition: background-color 0.3s, box-shadow 0.3s;
}
#nav.scrolled {
	background-color: rgba(250, 250, 249, 0.95);
	box-shadow: 0 1px 8px rgba(0, 0, 0, 0.08);
}
.nav-inner {
	display: flex;
	max-width: 1100px;
	margin: auto;
	justify-content: space-between;
	align-items: center;
}
.nav-logo {
	font-family: "Playfair Display", Georgia, serif;
	font-size: 24px;
	text-decoration: none;
}
.nav-links, .nav-mobile {
	list-style: none;
	margin: 0;
	padding: 0;
}
.nav-links {
	display: flex;
	gap: 28px;
}
.nav-links a, .nav-mobile a {
	text-decoration: none;
	color: var(--stone-600);
}
.nav-toggle {
	display: none;
	background: none;
	border: none;
	font-size: 22px;
	cursor: pointer;
}
.nav-mobile li {
	padding: 12px 0;
	border-bottom: 1px solid var(--stone-200);
}
@media (max-width: 768px) {
	.nav-links {
		display: none;
	}
	.nav-toggle {
		display: block;
	}
}
#particles {
	position: fixed;
	inset: 0;
	pointer-events: none;
	overflow: hidden;
	z-index: 0;
}
.particle {
	position: absolute;
	width: 4px;
	height: 4px;
	border-radius: 50%;
	background-color: var(--stone-200);
	opacity: 0.3;
}
main, footer {
	position: relative;
	z-index: 1;
}
.hero {
	min-height: 100vh;
	display: flex;
	align-items: center;
	justify-content: center;
	text-align: center;
	overflow: hidden;
}
.hero-pre {
	letter-spacing: 0.3em;
	text-transform: uppercase;
	color: var(--stone-600);
}
.hero-names h1 {
	font-size: clamp(40px, 8vw, 80px);
	margin: 0;
}
.hero-amp {
	font-family: "Playfair Display", Georgia, serif;
	font-style: italic;
	font-size: 40px;
	color: var(--accent);
}
.hero-date {
	font-size: 22px;
}
.hero-venue {
	display: inline-block;
	margin: 16px 0 32px 0;
	text-decoration: none;
	color: var(--stone-600);
}
.hearts {
	position: absolute;
	inset: 0;
	pointer-events: none;
}
.heart {
	position: absolute;
	font-size: 24px;
	color: var(--stone-300);
}
.countdown {
	display: flex;
	gap: 16px;
	justify-content: center;
	flex-wrap: wrap;
}
.countdown-box {
	min-width: 84px;
	padding: 16px 12px;
	border: 1px solid var(--stone-200);
	border-radius: 12px;
	background-color: rgba(255, 255, 255, 0.7);
}
.countdown-value {
	display: block;
	font-family: "Playfair Display", Georgia, serif;
	font-size: 36px;
}
.countdown-label {
	font-size: 13px;
	text-transform: uppercase;
	color: var(--stone-600);
}
.section-title {
	text-align: center;
	margin-bottom: 48px;
}
.section-title h2, #rsvp h2 {
	font-size: 44px;
	margin-bottom: 16px;
}
.divider {
	width: 96px;
	height: 4px;
	margin: 0 auto 24px auto;
	background-color: var(--stone-300);
}
.story-body, .timeline, .families {
	max-width: 800px;
	margin: auto;
}
.story-body p {
	font-size: 18px;
	line-height: 1.8;
	color: var(--stone-600);
}
.families {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
	gap: 24px;
	margin-bottom: 48px;
	text-align: center;
}
.family .address {
	color: var(--stone-600);
	font-size: 14px;
}
.event {
	display: flex;
	gap: 24px;
	padding: 20px 0;
	border-bottom: 1px solid var(--stone-200);
}
.event-when {
	min-width: 140px;
	display: flex;
	flex-direction: column;
}
.event-time {
	font-family: "Playfair Display", Georgia, serif;
	font-size: 28px;
}
.event-date, .event-location {
	color: var(--stone-600);
	font-size: 14px;
}
.event-what h3 {
	margin: 0 0 4px 0;
}
.filters {
	display: flex;
	gap: 12px;
	justify-content: center;
	flex-wrap: wrap;
	margin-bottom: 32px;
}
.filter {
	padding: 8px 20px;
	border-radius: 999px;
	border: 1px solid var(--stone-300);
	background: none;
	cursor: pointer;
}
.filter.selected {
	background-color: var(--stone-800);
	color: var(--stone-50);
}
.photo-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
	gap: 16px;
	max-width: 1100px;
	margin: auto;
}
.photo img {
	width: 100%;
	aspect-ratio: 1;
	object-fit: cover;
	border-radius: 12px;
	cursor: zoom-in;
}
#lightbox {
	position: fixed;
	inset: 0;
	z-index: 90;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: rgba(0, 0, 0, 0.9);
}
#lightbox img {
	max-width: 90vw;
	max-height: 85vh;
	border-radius: 8px;
}
#lightbox button {
	position: absolute;
	background: none;
	border: none;
	color: white;
	font-size: 40px;
	cursor: pointer;
}
.lightbox-prev {
	left: 24px;
}
.lightbox-next {
	right: 24px;
}
.lightbox-close {
	top: 16px;
	right: 24px;
}
#rsvp {
	background-color: var(--stone-900);
	text-align: center;
	overflow: hidden;
}
#rsvp, #rsvp * {
	color: white;
}
.rsvp-note {
	color: var(--stone-300);
}
.rsvp-card {
	max-width: 420px;
	margin: 32px auto;
	padding: 32px;
	border-radius: 16px;
	background-color: rgba(255, 255, 255, 0.1);
}
.rsvp-card input {
	width: 100%;
	margin-bottom: 16px;
	padding: 12px 16px;
	border-radius: 8px;
	border: 1px solid rgba(255, 255, 255, 0.2);
	background-color: rgba(255, 255, 255, 0.1);
}
.rsvp-action {
	display: block;
	padding: 12px;
	border-radius: 8px;
	text-decoration: none;
	background-color: white;
}
#rsvp .rsvp-action {
	color: var(--stone-900);
}
.rsvp-contact a {
	margin: 0 12px;
	text-decoration: none;
	font-size: 14px;
}
#footer {
	padding: 64px 24px;
	text-align: center;
}
.gift .bank {
	font-family: monospace;
}
.hashtag {
	color: var(--accent);
}
"#;

/// Everything that doesn't depend on the motion presets
pub const BASE_STYLE: &str = concatcp!(FONTS, PALETTE, LAYOUT);

/// The whole stylesheet: [`BASE_STYLE`] plus the keyframes built from the motion presets
#[must_use]
pub fn page_style() -> String {
	let heart = PulseMotion::HEART;
	let countdown = CountdownMotion::default();
	let menu = MenuMotion::default();

	format!(
		"{BASE_STYLE}
{heart_frames}
.heart {{ animation: {heart_animation}; }}
@keyframes countdown-in {{ from {{ opacity: 0; transform: translateY(20px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes countdown-pop {{ from {{ transform: scale({pop_scale}); }} to {{ transform: scale(1); }} }}
.countdown-value {{ animation: countdown-pop {pop} ease-out; }}
@keyframes nav-drop {{ from {{ transform: translateY(-100%); }} to {{ transform: none; }} }}
@keyframes nav-item-in {{ from {{ opacity: 0; transform: translateY(-10px); }} to {{ opacity: 1; transform: none; }} }}
.nav-mobile {{ transition: max-height {toggle} {toggle_easing}; }}
@media (prefers-reduced-motion: reduce) {{
	.heart, .particle, .countdown-value, .countdown-box, #nav, #nav li {{ animation: none !important; }}
	.reveal {{ transition: none !important; opacity: 1 !important; transform: none !important; }}
}}
",
		heart_frames = heart.keyframes("heart-pulse"),
		heart_animation = heart.animation("heart-pulse"),
		pop_scale = countdown.pop_scale,
		pop = seconds(countdown.pop_s),
		toggle = seconds(menu.toggle_s),
		toggle_easing = menu.easing.css(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn includes_motion_keyframes() {
		let style = page_style();
		assert!(style.starts_with(BASE_STYLE));
		assert!(style.contains("@keyframes heart-pulse"));
		assert!(style.contains("heart-pulse 5s ease-in-out infinite"));
		assert!(style.contains("countdown-pop 0.3s ease-out"));
	}
}

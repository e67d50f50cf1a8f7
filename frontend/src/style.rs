use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ invitation::style::page_style() }</style> }
}

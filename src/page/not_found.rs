use crate::page::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn NotFound() -> Html {
	html! {
		<div class="text-center">
			<p class="lead">{"The page you are looking for does not exist."}</p>
			<Link<Route> to={Route::Home}>{"Back to the shelter"}</Link<Route>>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ConfigErrorProps {
	pub error: AttrValue,
}

/// Shown instead of the app when it was built without its endpoints configured.
#[function_component]
pub fn ConfigError(ConfigErrorProps { error }: &ConfigErrorProps) -> Html {
	html! {
		<div class="container py-5">
			<div class="alert alert-danger" role="alert">
				<h4 class="alert-heading">{"The site is not configured correctly."}</h4>
				<p class="mb-0">{error.clone()}</p>
			</div>
		</div>
	}
}

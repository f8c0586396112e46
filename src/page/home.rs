use crate::page::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Home() -> Html {
	html! {
		<div class="text-center">
			<h1 class="display-4 fw-bold mb-4">{"Welcome to our Pet Shelter"}</h1>
			<p class="lead mx-auto mb-5" style="max-width: 800px;">
				{"Welcome to AnyCompany Pet Shelter, where we care for and find loving homes for stray and abandoned pets. \
				Our shelter provides a safe haven for dogs and cats while we work tirelessly to match them with their forever families. \
				We believe every pet deserves a second chance at happiness and are committed to ensuring they receive the best care and love."}
			</p>
			<div class="d-flex gap-2 justify-content-center flex-wrap">
				<Link<Route> classes={classes!("btn", "btn-primary", "btn-lg", "px-4")} to={Route::Pets}>
					{"View Available Pets"}
				</Link<Route>>
				<Link<Route> classes={classes!("btn", "btn-outline-primary", "btn-lg", "px-4")} to={Route::About}>
					{"Learn More"}
				</Link<Route>>
			</div>
		</div>
	}
}

use crate::page::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn About() -> Html {
	html! {
		<div class="mx-auto" style="max-width: 800px;">
			<h1 class="mb-4">{"About Us"}</h1>
			<p>
				{"AnyCompany Pet Shelter takes in stray and surrendered dogs and cats from the surrounding community. \
				Every animal is examined by a veterinarian, vaccinated and cared for by our staff and volunteers until \
				the right family comes along."}
			</p>
			<p>
				{"Adoption starts with an application. Our staff reviews each one and gets in touch to arrange a meeting \
				between you and the pet you have chosen."}
			</p>
			<Link<Route> classes={classes!("btn", "btn-primary")} to={Route::Adopt}>{"Apply to Adopt"}</Link<Route>>
		</div>
	}
}

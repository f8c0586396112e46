use crate::{config::Config, data::Pet, page::Route};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct PetCardProps {
	pub pet: Pet,
}

#[function_component]
pub fn PetCard(PetCardProps { pet }: &PetCardProps) -> Html {
	let config = use_context::<Rc<Config>>().unwrap();
	let details = [pet.species.clone(), pet.breed.clone(), pet.age_label()]
		.into_iter()
		.flatten()
		.collect::<Vec<_>>()
		.join(" · ");
	html! {
		<div class="card h-100 shadow-sm">
			{pet.image_url(&config.images_url).map(|src| html! {
				<img class="card-img-top" {src} alt={pet.name.clone()} style="object-fit: cover; height: 220px;" />
			})}
			<div class="card-body d-flex flex-column">
				<h5 class="card-title">{&pet.name}</h5>
				{(!details.is_empty()).then(|| html!(<h6 class="card-subtitle mb-2 text-body-secondary">{details}</h6>))}
				{pet.description.as_ref().map(|text| html!(<p class="card-text">{text}</p>))}
				<Link<Route> classes={classes!("btn", "btn-primary", "mt-auto")} to={Route::Adopt}>{"Adopt Me"}</Link<Route>>
			</div>
		</div>
	}
}

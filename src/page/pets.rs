use crate::{
	components::{PetCard, Spinner},
	data::PetListing,
};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Pets() -> Html {
	let listing = use_store_value::<PetListing>();
	let content = match &*listing {
		PetListing::Loading => html!(<Spinner label="Loading pets..." />),
		PetListing::Failed(text) => html!(<div class="alert alert-warning" role="alert">{text.clone()}</div>),
		PetListing::Loaded(pets) if pets.is_empty() => html!(<p class="text-center">{"Every pet has found a home. Check back soon!"}</p>),
		PetListing::Loaded(pets) => html! {
			<div class="row row-cols-1 row-cols-sm-2 row-cols-lg-3 g-4">
				{pets.iter().map(|pet| html! {
					<div class="col" key={pet.id.to_string()}>
						<PetCard pet={pet.clone()} />
					</div>
				}).collect::<Html>()}
			</div>
		},
	};
	html! {<>
		<h1 class="mb-4">{"Available Pets"}</h1>
		{content}
	</>}
}

use crate::{
	api::ApiClient,
	components::{Feedback, FeedbackAlert},
	config::Config,
	data::{Application, Id, PetListing},
	task::use_task_scope,
	utility::InputExt,
};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn Adopt() -> Html {
	let config = use_context::<Rc<Config>>().unwrap();
	let listing = use_store_value::<PetListing>();
	let draft = use_state(Application::default);
	let feedback = use_state_eq(Feedback::default);
	let scope = use_task_scope();

	let edit = |apply: fn(&mut Application, String)| {
		let draft = draft.clone();
		Callback::from(move |evt: Event| {
			let mut application = (*draft).clone();
			apply(&mut application, evt.input_value().unwrap_or_default());
			draft.set(application);
		})
	};
	let on_name = edit(|app, value| app.name = value);
	let on_email = edit(|app, value| app.email = value);
	let on_phone = edit(|app, value| app.phone = value);
	let on_message = edit(|app, value| app.message = value);
	let on_pet = edit(|app, value| app.pet_id = (!value.is_empty()).then(|| Id::from(value.as_str())));

	let onsubmit = Callback::from({
		let draft = draft.clone();
		let feedback = feedback.clone();
		move |evt: SubmitEvent| {
			evt.prevent_default();
			if feedback.is_sending() {
				return;
			}
			let application = (*draft).clone();
			if let Some(field) = application.missing_field() {
				feedback.set(Feedback::Failed(format!("Please provide your {field}.")));
				return;
			}
			feedback.set(Feedback::Sending);
			let config = config.clone();
			let draft = draft.clone();
			let feedback = feedback.clone();
			scope.spawn("submit application", async move {
				let result = async { ApiClient::new(&config, None)?.submit_application(&application).await }.await;
				let outcome = Feedback::from_result(&result, "submitting application");
				if outcome == Feedback::Sent {
					log::info!(target: "adopt", "Application submitted for pet {:?}.", application.pet_id);
					draft.set(Application::default());
				}
				feedback.set(outcome);
				Ok(())
			});
		}
	});

	let selected_pet = draft.pet_id.as_ref().map(Id::to_string).unwrap_or_default();
	html! {
		<div class="mx-auto" style="max-width: 640px;">
			<h1 class="mb-4">{"Adoption Application"}</h1>
			<form {onsubmit}>
				<div class="mb-3">
					<label class="form-label" for="adopt-name">{"Full name"}</label>
					<input id="adopt-name" class="form-control" type="text" value={draft.name.clone()} onchange={on_name} />
				</div>
				<div class="mb-3">
					<label class="form-label" for="adopt-email">{"Email"}</label>
					<input id="adopt-email" class="form-control" type="email" value={draft.email.clone()} onchange={on_email} />
				</div>
				<div class="mb-3">
					<label class="form-label" for="adopt-phone">{"Phone"}</label>
					<input id="adopt-phone" class="form-control" type="tel" value={draft.phone.clone()} onchange={on_phone} />
				</div>
				<div class="mb-3">
					<label class="form-label" for="adopt-pet">{"Pet"}</label>
					<select id="adopt-pet" class="form-select" onchange={on_pet}>
						<option value="" selected={selected_pet.is_empty()}>{"Choose a pet..."}</option>
						{listing.pets().iter().map(|pet| {
							let value = pet.id.to_string();
							let selected = value == selected_pet;
							html!(<option {value} {selected}>{&pet.name}</option>)
						}).collect::<Html>()}
					</select>
					{listing.error_text().map(|text| html!(<div class="form-text text-danger">{text}</div>))}
				</div>
				<div class="mb-3">
					<label class="form-label" for="adopt-message">{"Why would you like to adopt?"}</label>
					<textarea id="adopt-message" class="form-control" rows="4" value={draft.message.clone()} onchange={on_message} />
				</div>
				<button type="submit" class="btn btn-primary" disabled={feedback.is_sending()}>
					{match feedback.is_sending() {
						true => "Submitting...",
						false => "Submit Application",
					}}
				</button>
			</form>
			<FeedbackAlert feedback={(*feedback).clone()} success="Thank you! Our staff will review your application and contact you soon." />
		</div>
	}
}

use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SpinnerProps {
	#[prop_or(AttrValue::from("Loading..."))]
	pub label: AttrValue,
}

#[function_component]
pub fn Spinner(SpinnerProps { label }: &SpinnerProps) -> Html {
	html! {
		<div class="d-flex justify-content-center my-4">
			<div class="spinner-border text-primary" role="status">
				<span class="visually-hidden">{label.clone()}</span>
			</div>
		</div>
	}
}

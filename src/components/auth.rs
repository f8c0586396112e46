use crate::auth::use_auth;
use yew::prelude::*;

#[function_component]
pub fn LoginButton() -> Html {
	let auth = use_auth();
	if auth.is_signed_in() {
		let onclick = auth.logout_callback().reform(|_: MouseEvent| ());
		let disabled = auth.is_signing_out();
		html! {
			<button class="btn btn-outline-danger ms-lg-2" {disabled} {onclick}>
				{match disabled {
					true => "Signing Out...",
					false => "Sign Out",
				}}
			</button>
		}
	} else {
		let onclick = auth.login_callback().reform(|_: MouseEvent| ());
		html! {
			<button class="btn btn-success ms-lg-2" {onclick}>
				{"Employee Sign In"}
			</button>
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct SignedInOnlyProps {
	#[prop_or_default]
	pub children: Children,
}

/// Renders its children for signed in staff, and a sign in prompt for everyone else.
#[function_component]
pub fn SignedInOnly(SignedInOnlyProps { children }: &SignedInOnlyProps) -> Html {
	let auth = use_auth();
	if auth.is_signed_in() {
		return html!(<>{children.clone()}</>);
	}
	html! {
		<div class="d-flex flex-column align-items-center my-5">
			<p class="lead">{"This page is only available to shelter staff."}</p>
			<LoginButton />
		</div>
	}
}

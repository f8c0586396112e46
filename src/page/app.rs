use crate::{
	api::ApiClient,
	auth::{self, use_auth, Gate},
	components::auth::LoginButton,
	config::Config,
	data::PetListing,
	page,
	session::LocalSessionStore,
	task::use_task_scope,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component]
pub fn App() -> Html {
	let config = use_memo((), |_| {
		Config::from_env().map_err(|err| {
			log::error!(target: "config", "{err}");
			err
		})
	});
	match &*config {
		Ok(config) => html!(<Shell config={Rc::new(config.clone())} />),
		Err(err) => html!(<page::ConfigError error={err.to_string()} />),
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ShellProps {
	config: Rc<Config>,
}

#[function_component]
fn Shell(ShellProps { config }: &ShellProps) -> Html {
	let gate = use_memo(config.clone(), |config| Gate::new(Rc::new(LocalSessionStore), config.clone()));

	// The listing is shared by the pets page and the adoption form, fetched once per load.
	let scope = use_task_scope();
	use_effect_with(config.clone(), move |config| {
		let config = config.clone();
		scope.spawn("load pets", async move {
			let result = async { ApiClient::new(&config, None)?.pets().await }.await;
			if let Ok(pets) = &result {
				log::info!(target: "pets", "Loaded {} pets.", pets.len());
			}
			Dispatch::<PetListing>::global().set(PetListing::from_result(result));
			Ok(())
		});
	});

	html! {
		<ContextProvider<Rc<Config>> context={config.clone()}>
			<auth::ActionProvider gate={(*gate).clone()}>
				<BrowserRouter>
					<div class="d-flex flex-column min-vh-100">
						<Header />
						<main class="container flex-grow-1 py-5">
							<Switch<Route> render={Route::switch} />
						</main>
						<Footer />
					</div>
				</BrowserRouter>
			</auth::ActionProvider>
		</ContextProvider<Rc<Config>>>
	}
}

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/about")]
	About,
	#[at("/pets")]
	Pets,
	#[at("/adopt")]
	Adopt,
	#[at("/applications")]
	Applications,
	#[at("/applications/:id")]
	ApplicationDetail { id: String },
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	fn switch(self) -> Html {
		match self {
			Self::Home => html!(<page::Home />),
			Self::About => html!(<page::About />),
			Self::Pets => html!(<page::Pets />),
			Self::Adopt => html!(<page::Adopt />),
			Self::Applications => html!(<page::Applications />),
			Self::ApplicationDetail { id } => html!(<page::ApplicationDetail {id} />),
			Self::NotFound => html!(<page::NotFound />),
		}
	}
}

static NAV_ITEMS: [(&str, Route); 4] = [
	("Home", Route::Home),
	("About Us", Route::About),
	("Pets", Route::Pets),
	("Adopt", Route::Adopt),
];

#[function_component]
fn Header() -> Html {
	let auth = use_auth();
	let current = use_route::<Route>();
	let nav_item = |title: &'static str, route: Route| {
		let active = current.as_ref() == Some(&route);
		html! {
			<li class="nav-item">
				<Link<Route> classes={classes!("nav-link", active.then_some("active"))} to={route}>{title}</Link<Route>>
			</li>
		}
	};
	html! {
		<header>
			<nav class="navbar navbar-expand-sm sticky-top bg-body-tertiary">
				<div class="container">
					<Link<Route> classes={classes!("navbar-brand", "fw-bold")} to={Route::Home}>
						<i class="bi bi-heart-pulse me-2" />
						{"AnyCompany Pet Shelter"}
					</Link<Route>>
					<button
						class="navbar-toggler" type="button"
						data-bs-toggle="collapse" data-bs-target="#navContent"
						aria-controls="navContent" aria-expanded="false" aria-label="Toggle navigation"
					>
						<span class="navbar-toggler-icon"></span>
					</button>
					<div class="collapse navbar-collapse" id="navContent">
						<ul class="navbar-nav ms-auto align-items-sm-center">
							{NAV_ITEMS.iter().map(|(title, route)| nav_item(*title, route.clone())).collect::<Html>()}
							{auth.is_signed_in().then(|| nav_item("Applications", Route::Applications))}
							<li class="nav-item">
								<LoginButton />
							</li>
						</ul>
					</div>
				</div>
			</nav>
		</header>
	}
}

#[function_component]
fn Footer() -> Html {
	let year = js_sys::Date::new_0().get_full_year();
	html! {
		<footer class="py-3 mt-auto border-top bg-body-tertiary">
			<div class="container text-center text-body-secondary small">
				{format!("Copyright {year} AnyCompany Pet Shelter. All rights reserved.")}
			</div>
		</footer>
	}
}

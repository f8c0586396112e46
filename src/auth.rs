use crate::{
	config::Config,
	session::{Credential, SessionStore},
};
use gloo_timers::callback::Timeout;
use lazy_static::lazy_static;
use regex::Regex;
use std::rc::Rc;
use yew::prelude::*;

/// How long the sign-out feedback stays on screen before leaving for the provider's logout page.
pub static SIGN_OUT_GRACE_MS: u32 = 1000;
static SCOPE: &str = "email+openid";

lazy_static! {
	static ref ID_TOKEN: Regex = Regex::new("#id_token=([^&]+)").unwrap();
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Status {
	#[default]
	SignedOut,
	SignedIn,
}

impl Status {
	pub fn is_signed_in(&self) -> bool {
		matches!(self, Self::SignedIn)
	}
}

/// Extracts the token an implicit-grant redirect leaves in the url fragment
/// (`#id_token=<value>&...`), the value ending at the first `&`.
pub fn parse_fragment(fragment: &str) -> Option<&str> {
	let captures = ID_TOKEN.captures(fragment)?;
	captures.get(1).map(|value| value.as_str())
}

/// Derives the signed-in status from the session store and moves tokens
/// delivered by the identity provider into it.
#[derive(Clone)]
pub struct Gate {
	store: Rc<dyn SessionStore>,
	config: Rc<Config>,
}

impl PartialEq for Gate {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.config, &other.config)
	}
}

impl Gate {
	pub fn new(store: Rc<dyn SessionStore>, config: Rc<Config>) -> Self {
		Self { store, config }
	}

	/// The stored credential, if it is present and non-empty.
	/// Storage failures are logged and read as no credential.
	pub fn credential(&self) -> Option<Credential> {
		match self.store.get() {
			Ok(Some(credential)) if !credential.is_empty() => Some(credential),
			Ok(_) => None,
			Err(err) => {
				log::error!(target: "auth", "{err}");
				None
			}
		}
	}

	/// Resolves the status of this page load. Runs once, when the app starts;
	/// later changes to the store (other tabs, expiry) are not observed.
	///
	/// A token in the fragment is only taken when the store holds none,
	/// so an existing session is never replaced by a stray redirect.
	pub fn resolve(&self, fragment: Option<&str>) -> Status {
		let fragment = fragment.filter(|fragment| !fragment.is_empty());
		if let (None, Some(fragment)) = (self.credential(), fragment) {
			match parse_fragment(fragment) {
				Some(token) => {
					log::debug!(target: "auth", "Received credential from identity provider redirect.");
					if let Err(err) = self.store.set(token) {
						log::error!(target: "auth", "{err}");
					}
				}
				None => {
					log::debug!(target: "auth", "No credential in url fragment {fragment:?}.");
				}
			}
		}
		match self.credential() {
			Some(_) => Status::SignedIn,
			None => Status::SignedOut,
		}
	}

	pub fn login_url(&self) -> String {
		let Config {
			auth_url,
			client_id,
			redirect_uri,
			..
		} = &*self.config;
		let client_id = urlencoding::encode(client_id);
		let redirect_uri = urlencoding::encode(redirect_uri);
		format!("{auth_url}/login?client_id={client_id}&response_type=token&scope={SCOPE}&redirect_uri={redirect_uri}")
	}

	pub fn logout_url(&self) -> String {
		let Config {
			auth_url,
			client_id,
			redirect_uri,
			..
		} = &*self.config;
		let client_id = urlencoding::encode(client_id);
		let redirect_uri = urlencoding::encode(redirect_uri);
		format!(
			"{auth_url}/logout?client_id={client_id}&response_type=token&scope={SCOPE}&logout_uri={redirect_uri}&redirect_uri={redirect_uri}"
		)
	}

	/// Wipes all persisted client state and returns where the browser should go next.
	/// A failed wipe is logged, the logout page is still returned.
	pub fn sign_out(&self) -> String {
		if let Err(err) = self.store.clear() {
			log::error!(target: "auth", "{err}");
		}
		self.logout_url()
	}
}

/// The url fragment of the current page, including the leading `#`.
pub fn current_fragment() -> Option<String> {
	let hash = gloo_utils::window().location().hash().ok()?;
	(!hash.is_empty()).then_some(hash)
}

fn navigate(url: &str) {
	if let Err(err) = gloo_utils::window().location().set_href(url) {
		log::error!(target: "auth", "Failed to navigate to {url:?}: {err:?}");
	}
}

#[derive(Clone, PartialEq)]
pub struct Auth {
	status: Status,
	signing_out: bool,
	gate: Gate,
	login: Callback<()>,
	logout: Callback<()>,
}

impl Auth {
	pub fn is_signed_in(&self) -> bool {
		self.status.is_signed_in()
	}

	/// True while the sign-out grace period runs.
	pub fn is_signing_out(&self) -> bool {
		self.signing_out
	}

	pub fn credential(&self) -> Option<Credential> {
		self.gate.credential()
	}

	pub fn login_callback(&self) -> &Callback<()> {
		&self.login
	}

	pub fn logout_callback(&self) -> &Callback<()> {
		&self.logout
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ActionProviderProps {
	pub gate: Gate,
	#[prop_or_default]
	pub children: Html,
}

#[function_component]
pub fn ActionProvider(ActionProviderProps { gate, children }: &ActionProviderProps) -> Html {
	let status = use_state_eq({
		let gate = gate.clone();
		move || gate.resolve(current_fragment().as_deref())
	});
	let signing_out = use_state_eq(|| false);
	let pending_redirect = use_mut_ref(|| None::<Timeout>);

	// Login is a full page navigation, the new status is resolved when the provider redirects back.
	let login = Callback::from({
		let gate = gate.clone();
		move |_: ()| navigate(&gate.login_url())
	});
	let logout = Callback::from({
		let gate = gate.clone();
		let signing_out = signing_out.clone();
		move |_: ()| {
			if pending_redirect.borrow().is_some() {
				return;
			}
			let logout_url = gate.sign_out();
			log::info!(target: "auth", "Signed out, leaving for the identity provider.");
			signing_out.set(true);
			let timeout = Timeout::new(SIGN_OUT_GRACE_MS, move || navigate(&logout_url));
			*pending_redirect.borrow_mut() = Some(timeout);
		}
	});

	let auth = Auth {
		status: *status,
		signing_out: *signing_out,
		gate: gate.clone(),
		login,
		logout,
	};
	html! {
		<ContextProvider<Auth> context={auth}>
			{children.clone()}
		</ContextProvider<Auth>>
	}
}

#[hook]
pub fn use_auth() -> Auth {
	use_context::<Auth>().expect("use_auth called outside of auth::ActionProvider")
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		config::test_config,
		session::{MemorySessionStore, CREDENTIAL_KEY},
	};

	fn gate(store: &Rc<MemorySessionStore>) -> Gate {
		Gate::new(store.clone(), Rc::new(test_config()))
	}

	mod fragment {
		use super::*;

		#[test]
		fn token_then_params() {
			assert_eq!(parse_fragment("#id_token=abc.def&access_token=x&expires_in=3600"), Some("abc.def"));
		}

		#[test]
		fn token_at_end() {
			assert_eq!(parse_fragment("#id_token=abc"), Some("abc"));
		}

		#[test]
		fn empty_value() {
			assert_eq!(parse_fragment("#id_token=&access_token=x"), None);
		}

		#[test]
		fn other_keys() {
			assert_eq!(parse_fragment("#access_token=x&token_type=Bearer"), None);
			assert_eq!(parse_fragment("#section-2"), None);
		}

		#[test]
		fn not_first_key() {
			// the pattern needs its own `#`, a later `&id_token=` is not recognized
			assert_eq!(parse_fragment("#access_token=x&id_token=abc"), None);
		}
	}

	mod resolve {
		use super::*;

		#[test]
		fn redirect_into_empty_store() {
			let store = Rc::new(MemorySessionStore::default());
			let status = gate(&store).resolve(Some("#id_token=X&access_token=Y&token_type=Bearer"));
			assert_eq!(status, Status::SignedIn);
			assert_eq!(store.get().unwrap(), Some("X".to_owned()));
			assert_eq!(store.len(), 1);
		}

		#[test]
		fn no_token_in_fragment() {
			let store = Rc::new(MemorySessionStore::default());
			assert_eq!(gate(&store).resolve(Some("#about")), Status::SignedOut);
			assert!(store.is_empty());

			let store = Rc::new(MemorySessionStore::with_credential("prior"));
			assert_eq!(gate(&store).resolve(Some("#about")), Status::SignedIn);
			assert_eq!(store.get().unwrap(), Some("prior".to_owned()));
		}

		#[test]
		fn no_fragment() {
			let store = Rc::new(MemorySessionStore::default());
			assert_eq!(gate(&store).resolve(None), Status::SignedOut);
			assert_eq!(gate(&store).resolve(Some("")), Status::SignedOut);
			assert!(store.is_empty());
		}

		#[test]
		fn existing_session_kept() {
			let store = Rc::new(MemorySessionStore::with_credential("first"));
			let status = gate(&store).resolve(Some("#id_token=second&expires_in=3600"));
			assert_eq!(status, Status::SignedIn);
			assert_eq!(store.get().unwrap(), Some("first".to_owned()));
		}

		#[test]
		fn empty_credential_is_signed_out() {
			let store = Rc::new(MemorySessionStore::with_credential(""));
			assert_eq!(gate(&store).resolve(None), Status::SignedOut);
		}

		#[test]
		fn empty_credential_replaced_by_redirect() {
			let store = Rc::new(MemorySessionStore::with_credential(""));
			assert_eq!(gate(&store).resolve(Some("#id_token=fresh")), Status::SignedIn);
			assert_eq!(store.value(CREDENTIAL_KEY), Some("fresh".to_owned()));
		}
	}

	#[test]
	fn login_url() {
		let store = Rc::new(MemorySessionStore::default());
		assert_eq!(
			gate(&store).login_url(),
			"https://shelter.auth.example.com/login?client_id=client123&response_type=token\
			&scope=email+openid&redirect_uri=https%3A%2F%2Fshelter.example.com%2F"
		);
	}

	#[test]
	fn logout_url() {
		let store = Rc::new(MemorySessionStore::default());
		assert_eq!(
			gate(&store).logout_url(),
			"https://shelter.auth.example.com/logout?client_id=client123&response_type=token\
			&scope=email+openid&logout_uri=https%3A%2F%2Fshelter.example.com%2F\
			&redirect_uri=https%3A%2F%2Fshelter.example.com%2F"
		);
	}

	#[test]
	fn sign_out_signed_in() {
		let store = Rc::new(MemorySessionStore::with_credential("token"));
		store.insert("theme", "dark");
		let gate = gate(&store);
		assert_eq!(gate.resolve(None), Status::SignedIn);
		assert_eq!(gate.sign_out(), gate.logout_url());
		assert!(store.is_empty());
		assert_eq!(gate.resolve(None), Status::SignedOut);
	}

	#[test]
	fn context_reads_through_gate() {
		let store = Rc::new(MemorySessionStore::with_credential("token"));
		let gate = gate(&store);
		let auth = Auth {
			status: gate.resolve(None),
			signing_out: false,
			gate: gate.clone(),
			login: Callback::noop(),
			logout: Callback::noop(),
		};
		assert!(auth.is_signed_in());
		assert!(!auth.is_signing_out());
		assert_eq!(auth.credential(), Some("token".to_owned()));

		gate.sign_out();
		// status is resolved once per page load, the credential is read live
		assert!(auth.is_signed_in());
		assert_eq!(auth.credential(), None);
	}

	#[test]
	fn sign_out_signed_out() {
		let store = Rc::new(MemorySessionStore::default());
		let gate = gate(&store);
		assert_eq!(gate.sign_out(), gate.logout_url());
		assert!(store.is_empty());
	}
}

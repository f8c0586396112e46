#[cfg(test)]
use std::{cell::RefCell, collections::BTreeMap};
use wasm_bindgen::JsValue;

/// The storage key the identity provider's token is kept under.
pub static CREDENTIAL_KEY: &str = "accessToken";

/// An opaque bearer token. Never parsed or validated by the client.
pub type Credential = String;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("Browser storage is unavailable: {0}")]
	Unavailable(String),
	#[error("Failed to read {0:?} from browser storage: {1}")]
	Read(&'static str, String),
	#[error("Failed to write {0:?} to browser storage: {1}")]
	Write(&'static str, String),
	#[error("Failed to clear browser storage: {0}")]
	Clear(String),
}

/// The single persisted slot holding the signed-in user's credential.
///
/// Implementations use interior mutability, the same way browser storage is
/// shared by everything running on the page.
pub trait SessionStore {
	/// Reads the persisted credential, if any.
	fn get(&self) -> Result<Option<Credential>, Error>;

	/// Overwrites the persisted credential.
	fn set(&self, credential: &str) -> Result<(), Error>;

	/// Removes the credential AND every other value persisted for this origin.
	/// Signing out resets all client-side state, not only the credential slot.
	fn clear(&self) -> Result<(), Error>;
}

fn js_error(value: JsValue) -> String {
	match value.as_string() {
		Some(msg) => msg,
		None => format!("{value:?}"),
	}
}

/// Session store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalSessionStore;

impl LocalSessionStore {
	fn storage() -> Result<web_sys::Storage, Error> {
		let Some(window) = web_sys::window() else {
			return Err(Error::Unavailable("no window".into()));
		};
		match window.local_storage() {
			Ok(Some(storage)) => Ok(storage),
			Ok(None) => Err(Error::Unavailable("localStorage is disabled".into())),
			Err(err) => Err(Error::Unavailable(js_error(err))),
		}
	}
}

impl SessionStore for LocalSessionStore {
	fn get(&self) -> Result<Option<Credential>, Error> {
		let storage = Self::storage()?;
		storage.get_item(CREDENTIAL_KEY).map_err(|err| Error::Read(CREDENTIAL_KEY, js_error(err)))
	}

	fn set(&self, credential: &str) -> Result<(), Error> {
		let storage = Self::storage()?;
		storage
			.set_item(CREDENTIAL_KEY, credential)
			.map_err(|err| Error::Write(CREDENTIAL_KEY, js_error(err)))
	}

	fn clear(&self) -> Result<(), Error> {
		let storage = Self::storage()?;
		storage
			.remove_item(CREDENTIAL_KEY)
			.map_err(|err| Error::Write(CREDENTIAL_KEY, js_error(err)))?;
		storage.clear().map_err(|err| Error::Clear(js_error(err)))
	}
}

/// In-memory stand-in for browser storage. Holds a whole key-value map so that
/// the full wipe performed by [`SessionStore::clear`] can be observed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
	values: RefCell<BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemorySessionStore {
	pub fn with_credential(credential: impl Into<String>) -> Self {
		let store = Self::default();
		store.insert(CREDENTIAL_KEY, credential);
		store
	}

	/// Writes an arbitrary key, as other parts of a page might.
	pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
		self.values.borrow_mut().insert(key.into(), value.into());
	}

	pub fn value(&self, key: &str) -> Option<String> {
		self.values.borrow().get(key).cloned()
	}

	pub fn len(&self) -> usize {
		self.values.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.borrow().is_empty()
	}
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
	fn get(&self) -> Result<Option<Credential>, Error> {
		Ok(self.value(CREDENTIAL_KEY))
	}

	fn set(&self, credential: &str) -> Result<(), Error> {
		self.insert(CREDENTIAL_KEY, credential);
		Ok(())
	}

	fn clear(&self) -> Result<(), Error> {
		self.values.borrow_mut().clear();
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn set_overwrites() {
		let store = MemorySessionStore::with_credential("first");
		store.set("second").unwrap();
		assert_eq!(store.get().unwrap(), Some("second".to_owned()));
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn clear_wipes_everything() {
		let store = MemorySessionStore::with_credential("token");
		store.insert("theme", "dark");
		store.insert("draft-application", "{}");
		store.clear().unwrap();
		assert_eq!(store.get().unwrap(), None);
		assert!(store.is_empty());
	}
}

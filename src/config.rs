use url::Url;

pub static AUTH_URL: &str = "PET_SHELTER_AUTH_URL";
pub static CLIENT_ID: &str = "PET_SHELTER_CLIENT_ID";
pub static REDIRECT_URI: &str = "PET_SHELTER_REDIRECT_URI";
pub static API_URL: &str = "PET_SHELTER_API_URL";
pub static IMAGES_URL: &str = "PET_SHELTER_IMAGES_URL";

// Resolved when the wasm bundle is built, the browser has no process environment.
static BUILD_ENV: [(&str, Option<&str>); 5] = [
	("PET_SHELTER_AUTH_URL", option_env!("PET_SHELTER_AUTH_URL")),
	("PET_SHELTER_CLIENT_ID", option_env!("PET_SHELTER_CLIENT_ID")),
	("PET_SHELTER_REDIRECT_URI", option_env!("PET_SHELTER_REDIRECT_URI")),
	("PET_SHELTER_API_URL", option_env!("PET_SHELTER_API_URL")),
	("PET_SHELTER_IMAGES_URL", option_env!("PET_SHELTER_IMAGES_URL")),
];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("Missing configuration value {0}.")]
	Missing(&'static str),
	#[error("Configuration value {key} is not a valid url: {source}")]
	InvalidUrl {
		key: &'static str,
		source: url::ParseError,
	},
}

/// External endpoints and ids the client talks to.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
	/// Base url of the hosted identity provider (login/logout pages).
	pub auth_url: String,
	pub client_id: String,
	/// Where the identity provider sends the browser back to, verbatim.
	pub redirect_uri: String,
	/// Base url of the api gateway.
	pub api_url: String,
	/// Base url of the bucket pet images are served from.
	pub images_url: String,
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|key| BUILD_ENV.iter().find(|(name, _)| *name == key).and_then(|(_, value)| *value))
	}

	pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, Error>
	where
		F: Fn(&'static str) -> Option<&'a str>,
	{
		let value = |key: &'static str| -> Result<String, Error> {
			match lookup(key).map(str::trim) {
				Some(value) if !value.is_empty() => Ok(value.to_owned()),
				_ => Err(Error::Missing(key)),
			}
		};
		let base_url = |key: &'static str| -> Result<String, Error> {
			let raw = value(key)?;
			Url::parse(&raw).map_err(|source| Error::InvalidUrl { key, source })?;
			Ok(raw.trim_end_matches('/').to_owned())
		};

		let redirect_uri = value(REDIRECT_URI)?;
		Url::parse(&redirect_uri).map_err(|source| Error::InvalidUrl {
			key: REDIRECT_URI,
			source,
		})?;

		Ok(Self {
			auth_url: base_url(AUTH_URL)?,
			client_id: value(CLIENT_ID)?,
			redirect_uri,
			api_url: base_url(API_URL)?,
			images_url: base_url(IMAGES_URL)?,
		})
	}
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
	Config {
		auth_url: "https://shelter.auth.example.com".into(),
		client_id: "client123".into(),
		redirect_uri: "https://shelter.example.com/".into(),
		api_url: "https://api.example.com/prod".into(),
		images_url: "https://images.example.com".into(),
	}
}

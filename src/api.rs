use crate::{
	config::Config,
	data::{Application, ApplicationResponse, ApplicationsResponse, Id, Pet, PetsResponse, ReportRequest},
};
use futures::{
	future::{select, Either},
	pin_mut, Future,
};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Requests still waiting after this long are abandoned.
pub static REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	#[error(transparent)]
	Request(Arc<reqwest::Error>),
	#[error(transparent)]
	Deserialization(Arc<serde_json::Error>),
	#[error("{0} responded with status {1}.")]
	Status(String, u16),
	#[error("Request timed out after {0} ms.")]
	Timeout(u32),
	#[error("Credential cannot be sent as an authorization header.")]
	InvalidCredential,
}
impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(Arc::new(value))
	}
}
impl From<serde_json::Error> for Error {
	fn from(value: serde_json::Error) -> Self {
		Self::Deserialization(Arc::new(value))
	}
}

/// Races a request against a browser timer of `timeout_ms`.
pub async fn with_timeout<T, F>(pending: F, timeout_ms: u32) -> Result<T, Error>
where
	F: Future<Output = Result<T, Error>>,
{
	race(pending, TimeoutFuture::new(timeout_ms), timeout_ms).await
}

/// Resolves with `pending`, unless `timer` fires first. The losing future is dropped.
pub async fn race<T, F, Tm>(pending: F, timer: Tm, timeout_ms: u32) -> Result<T, Error>
where
	F: Future<Output = Result<T, Error>>,
	Tm: Future<Output = ()>,
{
	pin_mut!(pending, timer);
	match select(pending, timer).await {
		Either::Left((result, _)) => result,
		Either::Right(((), _)) => Err(Error::Timeout(timeout_ms)),
	}
}

/// Client for the shelter's api gateway.
#[derive(Clone)]
pub struct ApiClient {
	client: reqwest::Client,
	base_url: String,
}

impl ApiClient {
	/// Builds a client; when a credential is given, every request carries it as a bearer token.
	pub fn new(config: &Config, credential: Option<&str>) -> Result<Self, Error> {
		let mut client = reqwest::Client::builder();
		if let Some(credential) = credential {
			let auth_header = format!("Bearer {credential}");
			let Ok(auth_value) = reqwest::header::HeaderValue::from_str(&auth_header) else {
				return Err(Error::InvalidCredential);
			};
			client = client.default_headers([(reqwest::header::AUTHORIZATION, auth_value)].into_iter().collect());
		}
		Ok(Self {
			client: client.build()?,
			base_url: config.api_url.clone(),
		})
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, url: String) -> Result<T, Error> {
		let pending = async move {
			let response = request.send().await?;
			let status = response.status();
			if !status.is_success() {
				return Err(Error::Status(url, status.as_u16()));
			}
			let body = response.text().await?;
			Ok(serde_json::from_str::<T>(&body)?)
		};
		with_timeout(pending, REQUEST_TIMEOUT_MS).await
	}

	async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
		let url = self.url(path);
		log::debug!(target: "api", "GET {url}");
		self.send(self.client.get(&url), url).await
	}

	async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
	where
		B: serde::Serialize,
		T: DeserializeOwned,
	{
		let url = self.url(path);
		log::debug!(target: "api", "POST {url}");
		self.send(self.client.post(&url).json(body), url).await
	}

	pub async fn pets(&self) -> Result<Vec<Pet>, Error> {
		let response = self.get::<PetsResponse>("pets").await?;
		Ok(response.pets)
	}

	/// Asks the backend to email a report of current applications to the shelter.
	pub async fn create_report(&self, msg: impl Into<String>) -> Result<serde_json::Value, Error> {
		let body = ReportRequest { msg: msg.into() };
		self.post("create-report", &body).await
	}

	pub async fn submit_application(&self, application: &Application) -> Result<serde_json::Value, Error> {
		self.post("applications", application).await
	}

	pub async fn applications(&self) -> Result<Vec<Application>, Error> {
		let response = self.get::<ApplicationsResponse>("applications").await?;
		Ok(response.applications)
	}

	pub async fn application(&self, id: &Id) -> Result<Application, Error> {
		let path = format!("applications/{}", urlencoding::encode(&id.to_string()));
		let response = self.get::<ApplicationResponse>(&path).await?;
		Ok(response.application)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::test_config;
	use futures::{executor::block_on, future};

	#[test]
	fn timer_first_is_timeout() {
		let result = block_on(race(future::pending::<Result<(), Error>>(), future::ready(()), REQUEST_TIMEOUT_MS));
		assert!(matches!(result, Err(Error::Timeout(15_000))));
		assert_eq!(result.unwrap_err().to_string(), "Request timed out after 15000 ms.");
	}

	#[test]
	fn response_first_wins() {
		let result = block_on(race(future::ready(Ok::<_, Error>(7)), future::pending::<()>(), REQUEST_TIMEOUT_MS));
		assert_eq!(result.unwrap(), 7);
	}

	#[test]
	fn failed_response_before_timer() {
		let failed = future::ready(Err::<(), _>(Error::Status("https://api.example.com/prod/pets".into(), 500)));
		let result = block_on(race(failed, future::pending::<()>(), REQUEST_TIMEOUT_MS));
		assert!(matches!(result, Err(Error::Status(_, 500))));
	}

	#[test]
	fn urls() {
		let client = ApiClient::new(&test_config(), None).unwrap();
		assert_eq!(client.url("pets"), "https://api.example.com/prod/pets");
		assert_eq!(client.url("/create-report"), "https://api.example.com/prod/create-report");
	}

	#[test]
	fn credential_must_be_header_safe() {
		let result = ApiClient::new(&test_config(), Some("line\nbreak"));
		assert!(matches!(result, Err(Error::InvalidCredential)));
	}

	#[test]
	fn report_body() {
		let body = ReportRequest {
			msg: "Requesting report".into(),
		};
		assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"msg":"Requesting report"}"#);
	}
}

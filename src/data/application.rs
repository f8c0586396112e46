use super::Id;
use serde::{Deserialize, Serialize};

/// An adoption application, as submitted by the public form and reviewed by staff.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<Id>,
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pet_id: Option<Id>,
	#[serde(default)]
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
}

impl Application {
	/// The reason the application cannot be submitted yet, if any.
	pub fn missing_field(&self) -> Option<&'static str> {
		if self.name.trim().is_empty() {
			return Some("name");
		}
		if !self.email.contains('@') {
			return Some("email");
		}
		if self.pet_id.is_none() {
			return Some("pet");
		}
		None
	}

	pub fn status_label(&self) -> &str {
		self.status.as_deref().unwrap_or("pending")
	}
}

/// Body of `GET /applications`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApplicationsResponse {
	#[serde(default)]
	pub applications: Vec<Application>,
}

/// Body of `GET /applications/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApplicationResponse {
	pub application: Application,
}

/// Body of `POST /create-report`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRequest {
	pub msg: String,
}

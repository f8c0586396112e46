use super::Pet;
use crate::api;
use yewdux::prelude::*;

/// The pet listing fetched once when the app starts and shared by the
/// listing page and the adoption form.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub enum PetListing {
	#[default]
	Loading,
	Loaded(Vec<Pet>),
	Failed(String),
}

impl PetListing {
	pub fn from_result(result: Result<Vec<Pet>, api::Error>) -> Self {
		match result {
			Ok(pets) => Self::Loaded(pets),
			Err(err) => Self::Failed(format!("Error loading pets: {err}")),
		}
	}

	pub fn pets(&self) -> &[Pet] {
		match self {
			Self::Loaded(pets) => pets.as_slice(),
			Self::Loading | Self::Failed(_) => &[],
		}
	}

	pub fn error_text(&self) -> Option<&str> {
		match self {
			Self::Failed(text) => Some(text.as_str()),
			_ => None,
		}
	}
}

use super::Id;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
	pub id: Id,
	pub name: String,
	#[serde(default)]
	pub species: Option<String>,
	#[serde(default)]
	pub breed: Option<String>,
	#[serde(default)]
	pub age: Option<serde_json::Value>,
	#[serde(default)]
	pub description: Option<String>,
	/// Object key of the pet's photo in the image bucket.
	#[serde(default)]
	pub image: Option<String>,
}

impl Pet {
	pub fn image_url(&self, images_url: &str) -> Option<String> {
		let image = self.image.as_ref()?.trim_start_matches('/');
		if image.is_empty() {
			return None;
		}
		Some(format!("{images_url}/{image}"))
	}

	/// Age as shown on the card; the api sends it either as a number or as text.
	pub fn age_label(&self) -> Option<String> {
		match self.age.as_ref()? {
			serde_json::Value::Number(years) => Some(format!("{years} years")),
			serde_json::Value::String(age) if !age.is_empty() => Some(age.clone()),
			_ => None,
		}
	}
}

/// Body of `GET /pets`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PetsResponse {
	#[serde(default)]
	pub pets: Vec<Pet>,
}

#[cfg(test)]
mod test {
	use super::*;
	use trim_margin::MarginTrimmable;

	#[test]
	fn parse_full() {
		let body = "
			|{
			|  \"pets\": [
			|    {
			|      \"id\": 3,
			|      \"name\": \"Whiskers\",
			|      \"species\": \"cat\",
			|      \"breed\": \"tabby\",
			|      \"age\": 2,
			|      \"image\": \"whiskers.jpg\",
			|      \"adoption_fee\": 50
			|    }
			|  ]
			|}
		"
		.trim_margin()
		.unwrap();
		let response = serde_json::from_str::<PetsResponse>(&body).unwrap();
		assert_eq!(response.pets.len(), 1);
		let pet = &response.pets[0];
		assert_eq!(pet.id, Id::Number(3));
		assert_eq!(pet.species.as_deref(), Some("cat"));
		assert_eq!(pet.age_label().as_deref(), Some("2 years"));
		assert_eq!(
			pet.image_url("https://images.example.com").as_deref(),
			Some("https://images.example.com/whiskers.jpg")
		);
	}

	#[test]
	fn parse_minimal() {
		let response = serde_json::from_str::<PetsResponse>(r#"{"pets":[{"id":"p1","name":"Rex"}]}"#).unwrap();
		let pet = &response.pets[0];
		assert_eq!(pet.image_url("https://images.example.com"), None);
		assert_eq!(pet.age_label(), None);
	}
}

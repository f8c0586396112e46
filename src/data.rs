mod application;
pub use application::*;
mod listing;
pub use listing::*;
mod pet;
pub use pet::*;

use serde::{Deserialize, Serialize};

/// Record ids from the api are numbers for some tables and strings for others.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
	Number(i64),
	Text(String),
}

impl std::fmt::Display for Id {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Number(id) => write!(f, "{id}"),
			Self::Text(id) => write!(f, "{id}"),
		}
	}
}

impl From<&str> for Id {
	fn from(value: &str) -> Self {
		match value.parse::<i64>() {
			Ok(id) => Self::Number(id),
			Err(_) => Self::Text(value.to_owned()),
		}
	}
}

impl std::str::FromStr for Id {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from(s))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn id_from_json() {
		let ids: Vec<Id> = serde_json::from_str(r#"[7, "a1b2"]"#).unwrap();
		assert_eq!(ids, vec![Id::Number(7), Id::Text("a1b2".into())]);
	}

	#[test]
	fn id_from_route() {
		assert_eq!("42".parse::<Id>(), Ok(Id::Number(42)));
		assert_eq!(Id::from("app-42"), Id::Text("app-42".into()));
		assert_eq!(Id::Number(42).to_string(), "42");
	}
}

pub mod auth;
mod feedback;
pub use feedback::*;
mod pet_card;
pub use pet_card::*;
mod query;
pub use query::*;
mod spinner;
pub use spinner::*;

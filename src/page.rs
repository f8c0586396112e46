pub mod app;
pub use app::{App, Route};

mod about;
pub use about::About;

mod adopt;
pub use adopt::Adopt;

pub mod applications;
pub use applications::{ApplicationDetail, Applications};

mod home;
pub use home::Home;

mod not_found;
pub use not_found::{ConfigError, NotFound};

mod pets;
pub use pets::Pets;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod data;
pub mod logging;
pub mod page;
pub mod session;
pub mod task;
pub mod utility;

pub mod wasm;
pub use log::Level;

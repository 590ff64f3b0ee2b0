pub mod acquire;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod store;
pub mod week;

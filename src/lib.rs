pub mod config;
pub mod domain;
pub mod models;
pub mod services;
pub mod store;
pub mod view;

pub use config::*;
pub use models::*;
pub use services::*;
pub use store::*;
pub use view::*;

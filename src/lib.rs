pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod utils;
pub mod wizard;

pub use error::{AppError, AppResult};
pub use response::ApiResponse;

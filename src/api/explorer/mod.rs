pub mod client;
pub mod models;

pub use client::ExplorerClient;
pub use models::ApiError;

//! Client for the account server's JSON facade over the Spotify Web API.

pub mod client;
pub mod error;
pub mod http;
pub mod models;

pub use client::*;
pub use error::ApiError;
pub use models::*;

//! Network layer with bounded retry and error classification

pub mod client;
pub mod error_handler;

pub use client::NetworkClient;
pub use error_handler::ErrorHandler;

//! Sites

pub mod data;
pub mod definition;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::SitesServiceError;
pub use service::*;

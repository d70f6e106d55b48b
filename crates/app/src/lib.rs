//! Storefront CMS domain, persistence and server actions.

pub mod actions;
pub mod context;
pub mod database;
pub mod domain;
pub mod schema;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;

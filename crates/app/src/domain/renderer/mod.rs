//! Site Renderer

pub mod errors;
pub mod models;
mod service;

pub use errors::RenderError;
pub use models::{RenderNode, RenderedPage};
pub use service::SiteRenderer;

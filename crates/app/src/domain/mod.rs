//! Storefront CMS Domain Concerns

pub mod components;
pub mod describe;
pub mod organizations;
pub mod pages;
pub mod renderer;
pub mod sites;
pub mod theme;

//! Organizations
//!
//! Organizations are the tenant boundary: each one owns a site config, a
//! theme, a component map and a set of page layouts. They are managed
//! elsewhere; this crate only refers to them by id.

use crate::uuids::TypedUuid;

/// Marker for organization ids.
#[derive(Debug, Clone, Copy)]
pub struct Organization;

/// Organization UUID
pub type OrganizationUuid = TypedUuid<Organization>;

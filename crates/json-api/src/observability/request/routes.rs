//! Route labels for request spans.

use uuid::Uuid;

/// Collapse id segments so requests to the same route share a label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{organization}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_ids_are_collapsed() {
        assert_eq!(
            route_label("/sites/0190f1a8-5a7e-7cc0-8a55-3d2f7a1e9b10/theme.css"),
            "/sites/{organization}/theme.css",
            "uuid segment should be replaced"
        );
    }

    #[test]
    fn root_is_kept() {
        assert_eq!(route_label("/"), "/", "root path");
        assert_eq!(route_label("/healthcheck"), "/healthcheck", "static path");
    }
}

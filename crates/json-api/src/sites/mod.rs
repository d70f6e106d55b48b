//! Site routes: theme and rendered pages per organization.

mod errors;
pub(crate) mod pages;
pub(crate) mod theme;

use salvo::Router;

pub(crate) fn router() -> Router {
    Router::with_path("sites/{organization}")
        .push(
            Router::with_path("theme")
                .get(theme::get::handler)
                .put(theme::save::handler),
        )
        .push(Router::with_path("theme.css").get(theme::css::handler))
        .push(Router::with_path("pages").get(pages::handler))
}

//! Home page

use axum::{response::Html, routing::get, Router};

use crate::http::views;

/// GET /
async fn home() -> Html<String> {
    Html(views::index())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

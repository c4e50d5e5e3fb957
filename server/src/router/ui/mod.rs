use axum::response::Redirect;
use axum::routing::get;

mod error;
mod profile;

async fn redirect_home() -> Redirect {
    Redirect::to(profile::PATH)
}

pub(super) fn router() -> axum::Router {
    axum::Router::new()
        .route("/", get(redirect_home))
        .route(profile::PATH, get(profile::show).post(profile::submit))
}

mod asset;
mod ui;

pub(crate) fn create() -> axum::Router {
    axum::Router::new()
        .merge(asset::router())
        .merge(ui::router())
}

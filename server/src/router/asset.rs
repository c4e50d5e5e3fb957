use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::get;

async fn handle_style_css() -> impl IntoResponse {
    (
        [
            (CACHE_CONTROL, "public, max-age=31536000, immutable"),
            (CONTENT_TYPE, "text/css"),
        ],
        formwright_ui::asset::STYLE_CSS_CONTENT,
    )
}

pub(super) fn router() -> axum::Router {
    axum::Router::new().route(formwright_ui::asset::STYLE_CSS_PATH, get(handle_style_css))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
    use axum::http::{Request, StatusCode};

    #[tokio::test]
    async fn should_serve_stylesheet() {
        let app = crate::app::Application::test();
        let req = Request::builder()
            .uri(formwright_ui::asset::STYLE_CSS_PATH)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let res = app.handle(req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let content_types: Vec<_> = res
            .headers()
            .get_all(CONTENT_TYPE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .collect();
        assert_eq!(content_types, vec!["text/css"]);
        assert_eq!(
            res.headers()
                .get(CACHE_CONTROL)
                .and_then(|h| h.to_str().ok()),
            Some("public, max-age=31536000, immutable")
        );
    }
}

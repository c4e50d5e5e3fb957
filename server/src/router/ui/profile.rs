use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Extension;
use axum_extra::extract::cookie::CookieJar;
use formwright_ui::form::CSRF_FIELD;
use formwright_ui::view::View;
use formwright_ui::{Nothing, Renderer, Submitted};

use crate::router::ui::error::Error;
use crate::service::session::Manager;

pub(super) const PATH: &str = "/profile";

pub(crate) enum ResponseError {
    MissingSession,
    InvalidToken,
    InvalidPayload,
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::MissingSession => Error::new(
                StatusCode::FORBIDDEN,
                "Your session expired, please reload the form.",
            )
            .into_response(),
            Self::InvalidToken => {
                Error::new(StatusCode::FORBIDDEN, "The form token is invalid.").into_response()
            }
            Self::InvalidPayload => {
                Error::new(StatusCode::BAD_REQUEST, "The submitted form is invalid.")
                    .into_response()
            }
        }
    }
}

pub(super) async fn show(
    Extension(sessions): Extension<Manager>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, token) = sessions.resolve(jar);
    let forms = Renderer::new(Nothing, &token);
    let html = formwright_ui::view::profile::View::new(&forms, PATH).render();
    (jar, Html(html))
}

pub(super) async fn submit(
    Extension(sessions): Extension<Manager>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Html<String>, ResponseError> {
    let Some(token) = sessions.token(&jar) else {
        tracing::warn!(message = "form submitted without csrf cookie");
        return Err(ResponseError::MissingSession);
    };
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&body).map_err(|err| {
        tracing::warn!(message = "unable to decode submitted form", error = %err);
        ResponseError::InvalidPayload
    })?;
    let submitted = Submitted::new(pairs);
    if !token.verify(submitted.raw(CSRF_FIELD)) {
        tracing::warn!(message = "csrf token mismatch");
        return Err(ResponseError::InvalidToken);
    }
    tracing::info!(
        message = "profile submitted",
        email = submitted.raw("user[email]").unwrap_or_default()
    );

    let forms = Renderer::new(&submitted, &token);
    let mut view = formwright_ui::view::profile::View::new(&forms, PATH);
    view.set_notice("Profile saved.");
    Ok(Html(view.render()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt; // for `collect`

    const TOKEN: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    async fn read_body(res: axum::http::Response<Body>) -> String {
        let body = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn post(cookie: Option<&str>, payload: &[(&str, &str)]) -> Request<Body> {
        let builder = Request::builder()
            .uri(super::PATH)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        let builder = match cookie {
            Some(value) => builder.header(header::COOKIE, format!("formwright_csrf={value}")),
            None => builder,
        };
        builder
            .body(Body::from(serde_urlencoded::to_string(payload).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_redirect_home_to_profile() {
        crate::enable_tracing();

        let app = crate::app::Application::test();
        let req = Request::builder()
            .uri("/")
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let res = app.handle(req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|h| h.to_str().ok()),
            Some(super::PATH)
        );
    }

    #[tokio::test]
    async fn should_render_form_and_set_cookie() {
        crate::enable_tracing();

        let app = crate::app::Application::test();
        let req = Request::builder()
            .uri(super::PATH)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let res = app.handle(req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let cookie = res
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .unwrap()
            .to_owned();
        assert!(cookie.starts_with("formwright_csrf="), "{cookie}");
        let token = cookie
            .trim_start_matches("formwright_csrf=")
            .split(';')
            .next()
            .unwrap()
            .to_owned();
        assert_eq!(token.len(), 32);

        let body = read_body(res).await;
        assert!(body.contains(r#"name="__csrf_value""#), "{body}");
        assert!(body.contains(&format!(r#"value="{token}""#)), "{body}");
        assert!(body.contains(r#"<form action="/profile" method="post""#), "{body}");
    }

    #[tokio::test]
    async fn should_reuse_existing_cookie() {
        crate::enable_tracing();

        let app = crate::app::Application::test();
        let req = Request::builder()
            .uri(super::PATH)
            .method("GET")
            .header(header::COOKIE, format!("formwright_csrf={TOKEN}"))
            .body(Body::empty())
            .unwrap();
        let res = app.handle(req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(header::SET_COOKIE).is_none());

        let body = read_body(res).await;
        assert!(body.contains(&format!(r#"value="{TOKEN}""#)), "{body}");
    }

    #[tokio::test]
    async fn should_reject_submission_without_cookie() {
        crate::enable_tracing();

        let app = crate::app::Application::test();
        let res = app
            .handle(post(None, &[("__csrf_value", TOKEN), ("user[name]", "Alice")]))
            .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_reject_submission_with_invalid_token() {
        crate::enable_tracing();

        let app = crate::app::Application::test();
        let res = app
            .handle(post(
                Some(TOKEN),
                &[("__csrf_value", "forged"), ("user[name]", "Alice")],
            ))
            .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body = read_body(res).await;
        assert!(body.contains("The form token is invalid."), "{body}");
        assert!(!body.contains("Alice"), "{body}");
    }

    #[tokio::test]
    async fn should_render_submitted_values() {
        crate::enable_tracing();

        let app = crate::app::Application::test();
        let res = app
            .handle(post(
                Some(TOKEN),
                &[
                    ("__csrf_value", TOKEN),
                    ("user[name]", "Alice"),
                    ("user[email]", "alice@example.com"),
                    ("user[password]", "hunter2"),
                    ("user[country]", "fr"),
                    ("user[languages][]", "rust"),
                    ("user[plan]", "free"),
                    ("user[newsletter]", "0"),
                    ("save", "Save"),
                ],
            ))
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = read_body(res).await;
        assert!(body.contains("Profile saved."), "{body}");
        assert!(body.contains(r#"value="Alice""#), "{body}");
        assert!(body.contains(r#"value="alice@example.com""#), "{body}");
        assert!(!body.contains("hunter2"), "{body}");
        assert!(
            body.contains(r#"<option value="fr" selected>France</option>"#),
            "{body}"
        );
        assert!(
            body.contains(r#"<option value="rust" selected>Rust</option>"#),
            "{body}"
        );
        assert!(
            body.contains(r#"id="userPlanFree" value="free" class="radio" checked"#),
            "{body}"
        );
        assert!(
            !body.contains(r#"id="userNewsletter" value="1" checked"#),
            "{body}"
        );
    }
}

use formwright_ui::view::error::View;

mod helper;

#[test]
fn default() {
    let html = helper::write(
        "/view-error-default.html",
        View::new("Invalid CSRF token.").with_style_path("style.css"),
    );
    assert!(html.contains("Invalid CSRF token."));
    assert!(html.contains(r#"href="style.css""#));
}

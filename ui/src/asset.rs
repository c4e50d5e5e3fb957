pub const STYLE_CSS_PATH: &str = concat!("/assets/style-", env!("CARGO_PKG_VERSION"), ".css");
pub const STYLE_CSS_CONTENT: &str = include_str!("style.css");

use std::borrow::Cow;

use another_html_builder::{Body, Buffer};

use crate::field::{Field, FieldType};
use crate::form::{FormParams, Method, Renderer};
use crate::source::{InputSource, Session};

const COUNTRIES_EUROPE: [(&str, &str); 3] = [("fr", "France"), ("de", "Germany"), ("es", "Spain")];
const COUNTRIES_AMERICAS: [(&str, &str); 2] = [("ca", "Canada"), ("us", "United States")];
const LANGUAGES: [(&str, &str); 4] = [
    ("rust", "Rust"),
    ("go", "Go"),
    ("python", "Python"),
    ("typescript", "TypeScript"),
];

/// Page holding the profile form.
pub struct View<'r, I, S> {
    forms: &'r Renderer<I, S>,
    action: Cow<'static, str>,
    notice: Option<Cow<'static, str>>,
    style_path: Option<&'static str>,
}

impl<'r, I: InputSource, S: Session> View<'r, I, S> {
    pub fn new(forms: &'r Renderer<I, S>, action: impl Into<Cow<'static, str>>) -> Self {
        Self {
            forms,
            action: action.into(),
            notice: None,
            style_path: None,
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<Cow<'static, str>>) {
        self.notice = Some(notice.into());
    }

    pub fn with_style_path(mut self, style_path: &'static str) -> Self {
        self.style_path = Some(style_path);
        self
    }

    fn render_form(&self) -> String {
        let forms = self.forms;
        let country = Field::default()
            .option("", "Choose a country")
            .group("Europe", COUNTRIES_EUROPE)
            .group("Americas", COUNTRIES_AMERICAS);
        let languages = LANGUAGES
            .iter()
            .fold(Field::default(), |field, (value, text)| field.option(*value, *text));

        [
            forms.open(
                FormParams::default()
                    .action(self.action.clone())
                    .method(Method::Post),
            ),
            forms.input(
                "user.name",
                "Name",
                Field::default()
                    .attr("placeholder", "Jane Doe")
                    .attr("required", "required"),
            ),
            forms.input(
                "user.email",
                "Email address",
                Field::new(FieldType::from("email"))
                    .attr("placeholder", "jane@example.com")
                    .after(r#"<span class="help-block">Never shared with anyone.</span>"#),
            ),
            // an explicit empty value keeps the submitted password out of the page
            forms.password("user.password", "Password", Field::default().value("")),
            forms.select("user.country", "Country", country),
            forms.multiselect("user.languages", "Languages", languages),
            forms.radio(
                "user.plan",
                "Free plan",
                Field::default()
                    .id("userPlanFree")
                    .value("free")
                    .hidden_checkbox(false),
            ),
            forms.radio(
                "user.plan",
                "Pro plan",
                Field::default()
                    .id("userPlanPro")
                    .value("pro")
                    .hidden_checkbox(false),
            ),
            forms.checkbox(
                "user.newsletter",
                "Subscribe to the newsletter",
                Field::default(),
            ),
            forms.wysiwyg("user.bio", "Biography", Field::default().attr("rows", "6")),
            forms.submit("save", "Save", Field::default()),
            forms.close().to_owned(),
        ]
        .concat()
    }

    fn render_body<'b, W: std::fmt::Write>(&self, buf: Buffer<W, Body<'b>>) -> Buffer<W, Body<'b>> {
        buf.node("body").content(|buf| {
            let buf = self.notice.iter().fold(buf, |buf, notice| {
                buf.node("section")
                    .attr(("class", "card card-notice shadow max-w600 mx-auto my-32"))
                    .content(|buf| {
                        buf.node("div")
                            .attr(("class", "card-body"))
                            .content(|buf| buf.text(notice.as_ref()))
                    })
            });
            buf.node("main")
                .attr(("class", "card shadow max-w600 mx-auto my-32"))
                .content(|buf| {
                    buf.node("div")
                        .attr(("class", "card-header text-center"))
                        .content(|buf| buf.text("Profile"))
                        .node("div")
                        .attr(("class", "card-body"))
                        .content(|buf| buf.raw(self.render_form()))
                })
        })
    }
}

impl<I: InputSource, S: Session> crate::view::View for View<'_, I, S> {
    fn render(self) -> String {
        Buffer::default()
            .doctype()
            .node("html")
            .attr(("lang", "en"))
            .content(|buf| {
                let buf = crate::component::head::render(buf, "Profile", self.style_path);
                self.render_body(buf)
            })
            .into_inner()
    }
}

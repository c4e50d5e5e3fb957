//! Form renderer.
//!
//! ```ignore
//! let forms = Renderer::new(&submitted, csrf_token.as_str());
//! let html = [
//!     forms.open(FormParams::default().action("/profile")),
//!     forms.input("user.email", "Email", Field::new(FieldType::from("email"))),
//!     forms.checkbox("newsletter", "Subscribe", Field::default()),
//!     forms.submit("save", "Save", Field::default()),
//!     forms.close().to_owned(),
//! ]
//! .concat();
//! ```

use std::borrow::Cow;

use another_html_builder::Buffer;

use crate::attribute::Attributes;
use crate::field::{Field, FieldType};
use crate::name::{derive_id, transform_name};
use crate::source::{InputSource, Session, Value};

mod control;
pub mod editor;
mod fragment;

use control::{Builder, Control};
use editor::{CkEditor, Editor};
use fragment::{Fragments, Slot};

/// Name of the hidden field carrying the CSRF token.
pub const CSRF_FIELD: &str = "__csrf_value";

const DEFAULT_FORM_CLASS: &str = "form-horizontal";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    Get,
    #[default]
    Post,
    /// Post with a multipart encoding, for file uploads.
    Files,
}

impl Method {
    pub fn parse(value: &str) -> Self {
        match value {
            "get" | "GET" => Self::Get,
            "files" => Self::Files,
            _ => Self::Post,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post | Self::Files => "post",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormParams {
    method: Method,
    action: Option<String>,
    class: Option<String>,
    attributes: Attributes,
}

impl FormParams {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.insert(key, value);
        self
    }

    fn compile(self) -> Attributes {
        let mut attrs = Attributes::default()
            .with("action", self.action.unwrap_or_default())
            .with("method", self.method.as_str());
        if self.method == Method::Files {
            attrs.insert("enctype", "multipart/form-data");
        }
        attrs.insert(
            "class",
            self.class.unwrap_or_else(|| DEFAULT_FORM_CLASS.to_owned()),
        );
        attrs.extend(&self.attributes);
        attrs
    }
}

/// Renders form elements, pre-filled from the submitted values.
pub struct Renderer<I, S> {
    input: I,
    session: S,
    editor: Box<dyn Editor + Send + Sync>,
}

impl<I, S> std::fmt::Debug for Renderer<I, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

impl<I: InputSource, S: Session> Renderer<I, S> {
    pub fn new(input: I, session: S) -> Self {
        Self {
            input,
            session,
            editor: Box::new(CkEditor),
        }
    }

    pub fn with_editor(mut self, editor: impl Editor + Send + Sync + 'static) -> Self {
        self.editor = Box::new(editor);
        self
    }

    pub fn open(&self, params: FormParams) -> String {
        let attributes = params.compile();
        let token = self.session.csrf_token();
        let csrf_field = self.hidden(CSRF_FIELD, Field::default().value(token.into_owned()));
        format!("<form {attributes}>{csrf_field}")
    }

    pub fn close(&self) -> &'static str {
        "</form>"
    }

    pub fn label(&self, text: &str, attributes: &Attributes) -> String {
        control::render_label(Buffer::default(), text, attributes).into_inner()
    }

    /// Renders a field and its label in its wrapper.
    ///
    /// `field_name` is a dotted path (`user.email`), used to look up the
    /// submitted value and turned into `user[email]` for the `name` attribute.
    /// Without label (`None` or an empty string) no `<label>` is rendered.
    pub fn input<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        let label = label.into().filter(|text| !text.is_empty());
        let mut field = field.resolve();
        let name = transform_name(field_name);
        let id = field.id.take().unwrap_or_else(|| derive_id(field_name));

        let mut fragments = Fragments::default();
        if let Some(tag) = field.wrap {
            let opening = match field.wrap_class {
                Some(ref class) => {
                    let attrs = Attributes::default().with("class", class.clone());
                    format!("<{tag} {attrs}>")
                }
                None => format!("<{tag}>"),
            };
            fragments.set(Slot::WrapperOpen, opening);
            fragments.set(Slot::WrapperClose, format!("</{tag}>"));
        }
        fragments.set_optional(Slot::Before, field.before.take());
        fragments.set_optional(Slot::After, field.after.take());

        if label.is_some() {
            field.label.insert("for", id.clone());
        }

        let submitted = self.input.get(field_name).filter(|value| !value.is_empty());
        tracing::trace!(
            message = "looked up submitted value",
            field = field_name,
            found = submitted.is_some()
        );

        if field.kind.is_checkable() {
            let value = field.value.as_ref().and_then(Value::first);
            let matching = match (submitted.as_ref(), value) {
                (Some(submitted), Some(value)) => submitted.matches(value),
                _ => false,
            };
            let control = Control {
                name: &name,
                id: &id,
                label,
                checked: field.checked || matching,
                field: &field,
                editor: &*self.editor,
            };
            fragments.set(Slot::Control, control.render(Builder::Checkbox));
        } else {
            if field.value.is_none() {
                field.value = submitted;
            }
            if let Some(text) = label.filter(|_| field.kind != FieldType::Hidden) {
                fragments.set(Slot::Label, self.label(text, &field.label));
            }
            fragments.set_optional(Slot::Between, field.between.take());

            let builder = Builder::for_field(&field.kind, field.wysiwyg);
            let control = Control {
                name: &name,
                id: &id,
                label,
                checked: field.checked,
                field: &field,
                editor: &*self.editor,
            };
            fragments.set(Slot::Control, control.render(builder));
        }

        fragments.render()
    }

    pub fn hidden(&self, field_name: &str, field: Field) -> String {
        self.input(field_name, None::<&str>, field.kind(FieldType::Hidden))
    }

    pub fn password<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::Password))
    }

    pub fn file<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::File))
    }

    pub fn textarea<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::Textarea))
    }

    pub fn wysiwyg<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::Textarea).wysiwyg())
    }

    pub fn select<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::Select))
    }

    /// Select accepting several values, submitted as `name[]`.
    pub fn multiselect<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        let field_name = format!("{field_name}.");
        self.input(
            &field_name,
            label,
            field.kind(FieldType::Select).flag("multiple"),
        )
    }

    pub fn checkbox<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::Checkbox))
    }

    pub fn radio<'l>(
        &self,
        field_name: &str,
        label: impl Into<Option<&'l str>>,
        field: Field,
    ) -> String {
        self.input(field_name, label, field.kind(FieldType::Radio))
    }

    pub fn submit(&self, field_name: &str, label: &str, field: Field) -> String {
        self.input(field_name, None::<&str>, field.kind(FieldType::Submit).value(label))
    }

    pub fn button(&self, field_name: &str, label: &str, field: Field) -> String {
        self.input(field_name, None::<&str>, field.kind(FieldType::Button).value(label))
    }
}

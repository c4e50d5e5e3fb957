use another_html_builder::{Body, Buffer};

use super::editor::Editor;
use crate::attribute::{Attributes, Escaped};
use crate::field::{FieldType, FormLayout, Resolved, SelectOption};
use crate::source::Value;

const WYSIWYG_HORIZONTAL_CLASS: &str = "col-md-9 col-sm-12 col-offset-md-3 nomargin nopadding";

/// Renders the markup of a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Builder {
    Input,
    Select,
    Textarea,
    Wysiwyg,
    Checkbox,
    Button,
}

impl Builder {
    pub(crate) fn for_field(kind: &FieldType, wysiwyg: bool) -> Self {
        match kind {
            FieldType::Select => Self::Select,
            FieldType::Textarea if wysiwyg => Self::Wysiwyg,
            FieldType::Textarea => Self::Textarea,
            FieldType::Checkbox | FieldType::Radio => Self::Checkbox,
            FieldType::Submit | FieldType::Button => Self::Button,
            _ => Self::Input,
        }
    }
}

pub(crate) fn render_label<'a, W: std::fmt::Write>(
    buf: Buffer<W, Body<'a>>,
    text: &str,
    attributes: &Attributes,
) -> Buffer<W, Body<'a>> {
    attributes
        .apply(buf.node("label"))
        .content(|buf| buf.text(text))
}

fn render_option<'a, W: std::fmt::Write>(
    buf: Buffer<W, Body<'a>>,
    value: &str,
    text: &str,
    current: Option<&Value>,
) -> Buffer<W, Body<'a>> {
    let buf = buf.node("option").attr(("value", Escaped(value)));
    let buf = if current.is_some_and(|current| current.matches(value)) {
        buf.attr("selected")
    } else {
        buf
    };
    buf.content(|buf| buf.text(text))
}

pub(crate) struct Control<'f> {
    pub name: &'f str,
    pub id: &'f str,
    pub label: Option<&'f str>,
    pub checked: bool,
    pub field: &'f Resolved,
    pub editor: &'f dyn Editor,
}

impl Control<'_> {
    fn value(&self) -> Option<&str> {
        self.field.value.as_ref().and_then(Value::first)
    }

    fn attributes(&self, with_type: bool, with_value: bool) -> Attributes {
        let mut attrs = Attributes::default();
        if with_type {
            attrs.insert("type", self.field.kind.as_str());
        }
        attrs.insert("name", self.name);
        attrs.insert("id", self.id);
        if let Some(value) = self.value().filter(|_| with_value) {
            attrs.insert("value", value);
        }
        if let Some(ref class) = self.field.class {
            attrs.insert("class", class.clone());
        }
        attrs.extend(&self.field.attributes);
        attrs
    }

    fn render_input<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        self.attributes(true, true).apply(buf.node("input")).close()
    }

    fn render_button<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        self.attributes(true, false)
            .apply(buf.node("button"))
            .content(|buf| match self.value() {
                Some(text) => buf.text(text),
                None => buf,
            })
    }

    fn render_select<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        let current = self.field.value.as_ref().filter(|value| !value.is_empty());
        self.attributes(false, false)
            .apply(buf.node("select"))
            .content(|buf| {
                self.field
                    .options
                    .iter()
                    .fold(buf, |buf, option| match option {
                        SelectOption::Item { value, text } => {
                            render_option(buf, value, text, current)
                        }
                        SelectOption::Group { label, items } => buf
                            .node("optgroup")
                            .attr(("label", Escaped(label)))
                            .content(|buf| {
                                items.iter().fold(buf, |buf, (value, text)| {
                                    render_option(buf, value, text, current)
                                })
                            }),
                    })
            })
    }

    fn render_textarea<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        self.attributes(false, false)
            .apply(buf.node("textarea"))
            .content(|buf| match self.value() {
                Some(text) => buf.text(text),
                None => buf,
            })
    }

    fn render_editor<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
        script: &str,
    ) -> Buffer<W, Body<'a>> {
        self.render_textarea(buf)
            .node("script")
            .content(|buf| buf.raw(script))
    }

    fn render_wysiwyg<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        let script = self.editor.init_script(self.id);
        match self.field.layout {
            FormLayout::Horizontal => buf
                .node("div")
                .attr(("class", WYSIWYG_HORIZONTAL_CLASS))
                .content(|buf| self.render_editor(buf, &script)),
            FormLayout::Vertical | FormLayout::Inline => self.render_editor(buf, &script),
        }
    }

    /// Hidden fallback, visible control, between markup and label.
    fn render_checkbox<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        let buf = if self.field.hidden_checkbox {
            let hidden_id = format!("_{}", self.id);
            buf.node("input")
                .attr(("type", "hidden"))
                .attr(("name", Escaped(self.name)))
                .attr(("id", Escaped(&hidden_id)))
                .attr(("value", "0"))
                .close()
        } else {
            buf
        };
        let mut attrs = self.attributes(true, true);
        if self.checked {
            attrs.insert("checked", "checked");
        }
        let buf = attrs.apply(buf.node("input")).close();
        let buf = match self.field.between {
            Some(ref html) => buf.raw(html),
            None => buf,
        };
        match self.label {
            Some(text) => render_label(buf, text, &self.field.label),
            None => buf,
        }
    }

    pub(crate) fn render(&self, builder: Builder) -> String {
        tracing::trace!(message = "building control", name = self.name, builder = ?builder);
        let buf = Buffer::default();
        let buf = match builder {
            Builder::Input => self.render_input(buf),
            Builder::Select => self.render_select(buf),
            Builder::Textarea => self.render_textarea(buf),
            Builder::Wysiwyg => self.render_wysiwyg(buf),
            Builder::Checkbox => self.render_checkbox(buf),
            Builder::Button => self.render_button(buf),
        };
        buf.into_inner()
    }
}

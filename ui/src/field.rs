use std::borrow::Cow;

use crate::attribute::Attributes;
use crate::source::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    Text,
    Password,
    File,
    Hidden,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Submit,
    Button,
    /// Any other `<input>` type, like `email` or `date`.
    Other(Cow<'static, str>),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::File => "file",
            Self::Hidden => "hidden",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Submit => "submit",
            Self::Button => "button",
            Self::Other(inner) => inner.as_ref(),
        }
    }

    pub fn defaults(&self) -> &'static Defaults {
        match self {
            Self::Checkbox => &Defaults::CHECKBOX,
            Self::Radio => &Defaults::RADIO,
            Self::Hidden => &Defaults::HIDDEN,
            Self::Submit => &Defaults::SUBMIT,
            Self::Button => &Defaults::BUTTON,
            _ => &Defaults::TEXT,
        }
    }

    #[inline]
    pub fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            "password" => Self::Password,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "submit" => Self::Submit,
            "button" => Self::Button,
            other => Self::Other(Cow::Owned(other.to_owned())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Defaults {
    pub wrap: Option<&'static str>,
    pub wrap_class: Option<&'static str>,
    pub class: Option<&'static str>,
    pub value: Option<&'static str>,
    pub hidden_checkbox: bool,
}

impl Defaults {
    pub const TEXT: Self = Self {
        wrap: Some("div"),
        wrap_class: Some("form-group"),
        class: Some("form-control"),
        value: None,
        hidden_checkbox: false,
    };

    pub const CHECKBOX: Self = Self {
        wrap: Some("div"),
        wrap_class: Some("checkbox"),
        class: None,
        value: Some("1"),
        hidden_checkbox: true,
    };

    pub const RADIO: Self = Self {
        wrap: Some("div"),
        wrap_class: Some("radio"),
        class: Some("radio"),
        value: Some("1"),
        hidden_checkbox: true,
    };

    pub const HIDDEN: Self = Self {
        wrap: None,
        wrap_class: None,
        class: None,
        value: None,
        hidden_checkbox: false,
    };

    pub const SUBMIT: Self = Self {
        wrap: None,
        wrap_class: None,
        class: Some("btn btn-primary"),
        value: None,
        hidden_checkbox: false,
    };

    pub const BUTTON: Self = Self {
        wrap: None,
        wrap_class: None,
        class: Some("btn"),
        value: None,
        hidden_checkbox: false,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormLayout {
    #[default]
    Horizontal,
    Vertical,
    Inline,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOption {
    Item {
        value: String,
        text: String,
    },
    Group {
        label: String,
        items: Vec<(String, String)>,
    },
}

impl SelectOption {
    pub fn item(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Item {
            value: value.into(),
            text: text.into(),
        }
    }

    pub fn group<V, T>(label: impl Into<String>, items: impl IntoIterator<Item = (V, T)>) -> Self
    where
        V: Into<String>,
        T: Into<String>,
    {
        Self::Group {
            label: label.into(),
            items: items
                .into_iter()
                .map(|(value, text)| (value.into(), text.into()))
                .collect(),
        }
    }
}

/// Describes a form control. Every option left unset falls back to the
/// defaults of the field type.
#[derive(Clone, Debug, Default)]
pub struct Field {
    pub(crate) kind: Option<FieldType>,
    pub(crate) id: Option<String>,
    pub(crate) value: Option<Value>,
    pub(crate) class: Option<Option<Cow<'static, str>>>,
    pub(crate) wrap: Option<Option<&'static str>>,
    pub(crate) wrap_class: Option<Option<Cow<'static, str>>>,
    pub(crate) before: Option<Cow<'static, str>>,
    pub(crate) between: Option<Cow<'static, str>>,
    pub(crate) after: Option<Cow<'static, str>>,
    pub(crate) label: Attributes,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) hidden_checkbox: Option<bool>,
    pub(crate) checked: bool,
    pub(crate) wysiwyg: bool,
    pub(crate) layout: FormLayout,
    pub(crate) attributes: Attributes,
}

impl Field {
    pub fn new(kind: FieldType) -> Self {
        Self::default().kind(kind)
    }

    pub fn kind(mut self, kind: FieldType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the value explicitly, submitted values are then ignored.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(Value::Single(value.into()));
        self
    }

    pub fn values<V: Into<String>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.value = Some(Value::Many(values.into_iter().map(Into::into).collect()));
        self
    }

    pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.class = Some(Some(class.into()));
        self
    }

    pub fn without_class(mut self) -> Self {
        self.class = Some(None);
        self
    }

    pub fn wrap(mut self, tag: &'static str) -> Self {
        self.wrap = Some(Some(tag));
        self
    }

    pub fn wrap_class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.wrap_class = Some(Some(class.into()));
        self
    }

    pub fn unwrapped(mut self) -> Self {
        self.wrap = Some(None);
        self
    }

    pub fn before(mut self, html: impl Into<Cow<'static, str>>) -> Self {
        self.before = Some(html.into());
        self
    }

    /// Markup inserted between the label and the control.
    pub fn between(mut self, html: impl Into<Cow<'static, str>>) -> Self {
        self.between = Some(html.into());
        self
    }

    pub fn after(mut self, html: impl Into<Cow<'static, str>>) -> Self {
        self.after = Some(html.into());
        self
    }

    pub fn label_attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.label.insert(key, value);
        self
    }

    pub fn option(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.options.push(SelectOption::item(value, text));
        self
    }

    pub fn group<V, T>(mut self, label: impl Into<String>, items: impl IntoIterator<Item = (V, T)>) -> Self
    where
        V: Into<String>,
        T: Into<String>,
    {
        self.options.push(SelectOption::group(label, items));
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn hidden_checkbox(mut self, enabled: bool) -> Self {
        self.hidden_checkbox = Some(enabled);
        self
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn wysiwyg(mut self) -> Self {
        self.wysiwyg = true;
        self
    }

    pub fn layout(mut self, layout: FormLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn flag(self, key: &'static str) -> Self {
        self.attr(key, key)
    }

    pub(crate) fn resolve(self) -> Resolved {
        let kind = self.kind.unwrap_or_default();
        let defaults = kind.defaults();
        Resolved {
            wrap: self.wrap.unwrap_or(defaults.wrap).filter(|tag| !tag.is_empty()),
            wrap_class: self
                .wrap_class
                .unwrap_or_else(|| defaults.wrap_class.map(Cow::Borrowed))
                .filter(|class| !class.is_empty()),
            class: self
                .class
                .unwrap_or_else(|| defaults.class.map(Cow::Borrowed)),
            value: self
                .value
                .or_else(|| defaults.value.map(Value::from)),
            hidden_checkbox: self.hidden_checkbox.unwrap_or(defaults.hidden_checkbox),
            kind,
            id: self.id.filter(|id| !id.is_empty()),
            before: self.before.filter(|html| !html.is_empty()),
            between: self.between.filter(|html| !html.is_empty()),
            after: self.after.filter(|html| !html.is_empty()),
            label: self.label,
            options: self.options,
            checked: self.checked,
            wysiwyg: self.wysiwyg,
            layout: self.layout,
            attributes: self.attributes,
        }
    }
}

/// A field descriptor with the type defaults applied.
#[derive(Debug)]
pub(crate) struct Resolved {
    pub kind: FieldType,
    pub id: Option<String>,
    pub value: Option<Value>,
    pub class: Option<Cow<'static, str>>,
    pub wrap: Option<&'static str>,
    pub wrap_class: Option<Cow<'static, str>>,
    pub before: Option<Cow<'static, str>>,
    pub between: Option<Cow<'static, str>>,
    pub after: Option<Cow<'static, str>>,
    pub label: Attributes,
    pub options: Vec<SelectOption>,
    pub hidden_checkbox: bool,
    pub checked: bool,
    pub wysiwyg: bool,
    pub layout: FormLayout,
    pub attributes: Attributes,
}

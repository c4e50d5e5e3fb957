use std::borrow::Cow;
use std::fmt::Write;

use another_html_builder::{AttributeValue, Buffer, Element};

/// Attributes rendered as bare tokens instead of `key="value"` pairs.
pub const BOOLEAN_ATTRIBUTES: [&str; 5] = ["checked", "disabled", "multiple", "selected", "readonly"];

#[inline]
pub fn is_boolean(key: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&key)
}

const ESCAPED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Writes `value` with its html entities escaped, safe between double quotes.
pub fn escape<W: Write>(f: &mut W, value: &str) -> std::fmt::Result {
    let mut start = 0;
    while let Some(index) = value[start..].find(ESCAPED) {
        let begin = start + index;
        f.write_str(&value[start..begin])?;
        f.write_str(match &value[begin..=begin] {
            "&" => "&amp;",
            "<" => "&lt;",
            ">" => "&gt;",
            "\"" => "&quot;",
            _ => "&#x27;",
        })?;
        start = begin + 1;
    }
    f.write_str(&value[start..])
}

/// Attribute value written through [escape] by the html builder.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Escaped<'a>(pub &'a str);

impl AttributeValue for Escaped<'_> {
    fn render(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        escape(f, self.0)
    }
}

/// Ordered attribute list.
///
/// Inserting a key that already exists replaces the value where the key
/// first appeared, new keys are appended. This keeps the output stable
/// whatever order the overrides come in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    inner: Vec<(Cow<'static, str>, String)>,
}

impl Attributes {
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.inner.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.inner.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.inner.iter().position(|(name, _)| name == key)?;
        Some(self.inner.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.iter().any(|(name, _)| name == key)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_str()))
    }

    /// Merges `other` on top of `self`.
    pub fn extend(&mut self, other: &Attributes) {
        for (key, value) in other.inner.iter() {
            self.insert(key.clone(), value.clone());
        }
    }

    /// Compiles the attributes into `key="value"` text, boolean attributes
    /// being written as bare tokens.
    pub fn compile(&self) -> String {
        self.to_string()
    }

    /// Writes the attributes on an element being built.
    pub(crate) fn apply<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Element<'a>>,
    ) -> Buffer<W, Element<'a>> {
        self.iter().fold(buf, |buf, (key, value)| {
            if is_boolean(key) {
                buf.attr(key)
            } else {
                buf.attr((key, Escaped(value)))
            }
        })
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            if is_boolean(key) {
                f.write_str(key)?;
            } else {
                write!(f, "{key}=\"")?;
                escape(f, value)?;
                f.write_char('"')?;
            }
        }
        Ok(())
    }
}

impl<K: Into<Cow<'static, str>>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |acc, (key, value)| acc.with(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::Attributes;

    #[test]
    fn should_compile_key_value_pairs() {
        let attrs = Attributes::default()
            .with("action", "/save")
            .with("method", "post");
        assert_eq!(attrs.compile(), r#"action="/save" method="post""#);
    }

    #[test]
    fn should_compile_boolean_attributes_as_tokens() {
        let attrs = Attributes::default()
            .with("name", "tags[]")
            .with("multiple", "multiple")
            .with("disabled", "");
        assert_eq!(attrs.compile(), r#"name="tags[]" multiple disabled"#);
    }

    #[test]
    fn should_replace_existing_keys_in_place() {
        let mut attrs = Attributes::default()
            .with("type", "text")
            .with("class", "form-control")
            .with("name", "email");
        attrs.insert("class", "form-control input-lg");
        assert_eq!(
            attrs.compile(),
            r#"type="text" class="form-control input-lg" name="email""#
        );
    }

    #[test]
    fn should_escape_values() {
        let attrs = Attributes::default().with("value", r#""><script>alert('x')</script>"#);
        assert_eq!(
            attrs.compile(),
            r#"value="&quot;&gt;&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;""#
        );
    }

    #[test]
    fn should_escape_values_applied_on_elements() {
        let attrs = Attributes::default()
            .with("value", r#"x" autofocus="1"#)
            .with("title", "it's <b>")
            .with("checked", "checked");
        let html = attrs
            .apply(another_html_builder::Buffer::default().node("input"))
            .close()
            .into_inner();
        assert!(html.starts_with(&format!("<input {}", attrs.compile())), "{html}");
        assert!(
            html.starts_with(r#"<input value="x&quot; autofocus=&quot;1" title="it&#x27;s &lt;b&gt;" checked"#),
            "{html}"
        );
    }

    #[test]
    fn should_compile_empty_list() {
        assert_eq!(Attributes::default().compile(), "");
    }

    #[test]
    fn should_remove_keys() {
        let mut attrs: Attributes = [("type", "textarea"), ("value", "hello"), ("name", "bio")]
            .into_iter()
            .collect();
        assert_eq!(attrs.remove("value").as_deref(), Some("hello"));
        assert_eq!(attrs.remove("value"), None);
        assert_eq!(attrs.compile(), r#"type="textarea" name="bio""#);
    }
}

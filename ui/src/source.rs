//! Collaborators the renderer reads from: the submitted values and the
//! session holding the CSRF token.

use std::borrow::Cow;

use crate::name::transform_name;

/// A submitted (or caller provided) field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Single(String),
    Many(Vec<String>),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(inner) => inner.is_empty(),
            Self::Many(inner) => inner.iter().all(String::is_empty),
        }
    }

    /// Whether `candidate` is the value, or one of the values.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Single(inner) => inner == candidate,
            Self::Many(inner) => inner.iter().any(|item| item == candidate),
        }
    }

    /// The value to put in a single-valued control.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(inner) => Some(inner.as_str()),
            Self::Many(inner) => inner.first().map(String::as_str),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

/// Gives access to the previously submitted values, addressed by dotted path.
pub trait InputSource {
    fn get(&self, name: &str) -> Option<Value>;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }
}

/// Input source for a request where nothing was submitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nothing;

impl InputSource for Nothing {
    fn get(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Input source built from url encoded `(key, value)` pairs, as found in a
/// posted form body.
#[derive(Clone, Debug, Default)]
pub struct Submitted {
    pairs: Vec<(String, String)>,
}

impl Submitted {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    fn collect_many(&self, key: &str) -> Option<Value> {
        let values: Vec<String> = self.values(key).map(String::from).collect();
        if values.is_empty() {
            None
        } else {
            Some(Value::Many(values))
        }
    }

    /// Raw access by the submitted key, without any transformation.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

impl FromIterator<(String, String)> for Submitted {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl InputSource for Submitted {
    fn get(&self, name: &str) -> Option<Value> {
        let key = transform_name(name);
        if key.ends_with("[]") {
            return self.collect_many(&key);
        }
        match self.values(&key).last() {
            Some(found) => Some(Value::Single(found.to_owned())),
            None => self.collect_many(&format!("{key}[]")),
        }
    }
}

/// Gives access to the session CSRF token.
pub trait Session {
    fn csrf_token(&self) -> Cow<'_, str>;
}

impl<T: Session + ?Sized> Session for &T {
    fn csrf_token(&self) -> Cow<'_, str> {
        (**self).csrf_token()
    }
}

impl Session for str {
    fn csrf_token(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Session for String {
    fn csrf_token(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

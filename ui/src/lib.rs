pub mod asset;
pub mod attribute;
mod component;
pub mod field;
pub mod form;
pub mod name;
pub mod source;
pub mod view;

pub use field::{Field, FieldType, FormLayout, SelectOption};
pub use form::{FormParams, Method, Renderer};
pub use source::{InputSource, Nothing, Session, Submitted, Value};

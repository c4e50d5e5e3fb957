/// Produces the script binding a rich text editor to a textarea.
pub trait Editor {
    fn init_script(&self, element_id: &str) -> String;
}

/// Binds CKEditor with `CKEDITOR.replace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CkEditor;

impl Editor for CkEditor {
    fn init_script(&self, element_id: &str) -> String {
        format!("CKEDITOR.replace({});", script_string(element_id))
    }
}

/// Javascript string literal that can't close the surrounding script tag.
pub(crate) fn script_string(value: &str) -> String {
    let literal = serde_json::Value::String(value.to_owned()).to_string();
    literal.replace("</", "<\\/")
}

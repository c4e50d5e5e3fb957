use std::borrow::Cow;

/// Turns a dotted field path into the bracket notation used for submission
/// grouping: `user.address.city` becomes `user[address][city]` and a trailing
/// dot (`tags.`) becomes `tags[]`.
pub fn transform_name(name: &str) -> Cow<'_, str> {
    if !name.contains('.') {
        return Cow::Borrowed(name);
    }
    let mut parts = name.split('.');
    let head = parts.next().unwrap_or_default();
    let transformed = parts.fold(String::from(head), |mut acc, part| {
        acc.push('[');
        acc.push_str(part);
        acc.push(']');
        acc
    });
    Cow::Owned(transformed)
}

/// Derives an element id from a dotted field path, in camel case:
/// `user.first_name` becomes `userFirstName`.
pub fn derive_id(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        match c {
            '.' | '_' | '-' | ' ' => {
                upper_next = !output.is_empty();
            }
            c if upper_next => {
                output.extend(c.to_uppercase());
                upper_next = false;
            }
            c if output.is_empty() => output.extend(c.to_lowercase()),
            c => output.push(c),
        }
    }
    output
}

use std::collections::BTreeMap;

/// Position of a piece of markup in a rendered field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Slot {
    WrapperOpen = 0,
    Before = 5,
    Label = 30,
    Between = 40,
    Control = 50,
    After = 95,
    WrapperClose = 100,
}

/// Pieces of a rendered field, concatenated by slot priority whatever the
/// insertion order.
#[derive(Debug, Default)]
pub(crate) struct Fragments {
    inner: BTreeMap<Slot, String>,
}

impl Fragments {
    pub fn set(&mut self, slot: Slot, html: impl Into<String>) {
        self.inner.insert(slot, html.into());
    }

    pub fn set_optional(&mut self, slot: Slot, html: Option<impl Into<String>>) {
        if let Some(html) = html {
            self.set(slot, html);
        }
    }

    pub fn render(self) -> String {
        self.inner.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Fragments, Slot};

    #[test]
    fn should_concatenate_by_priority() {
        let mut fragments = Fragments::default();
        fragments.set(Slot::After, "[after]");
        fragments.set(Slot::Control, "[control]");
        fragments.set(Slot::WrapperClose, "</div>");
        fragments.set(Slot::Between, "[between]");
        fragments.set(Slot::Label, "[label]");
        fragments.set(Slot::Before, "[before]");
        fragments.set(Slot::WrapperOpen, "<div>");
        assert_eq!(
            fragments.render(),
            "<div>[before][label][between][control][after]</div>"
        );
    }

    #[test]
    fn should_skip_missing_slots() {
        let mut fragments = Fragments::default();
        fragments.set_optional(Slot::Before, None::<String>);
        fragments.set(Slot::Control, "[control]");
        fragments.set_optional(Slot::After, Some("[after]"));
        assert_eq!(fragments.render(), "[control][after]");
    }
}

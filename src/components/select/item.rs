/// Defines how an entry of a select is identified and displayed.
pub trait SelectItem {
    /// The type of value this item represents.
    type Value: PartialEq;

    /// Text shown for this item.
    fn label(&self) -> &str;

    fn value(&self) -> &Self::Value;
}

/// A labelled entry with a value of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<V> {
    pub label: String,
    pub value: V,
}

impl<V> SelectOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<V: PartialEq> SelectItem for SelectOption<V> {
    type Value = V;

    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> &V {
        &self.value
    }
}

impl SelectItem for &'static str {
    type Value = &'static str;

    fn label(&self) -> &str {
        self
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

impl SelectItem for String {
    type Value = String;

    fn label(&self) -> &str {
        self
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

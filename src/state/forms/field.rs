//! Form field value objects

/// Longest name the form accepts, in characters
pub const MAX_FIELD_LENGTH: usize = 50;

/// A single-line text field of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::text_with_value(name, label, String::new())
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character, ignoring control characters and input past the limit
    pub fn push_char(&mut self, c: char) {
        if c.is_control() || self.value.chars().count() >= MAX_FIELD_LENGTH {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

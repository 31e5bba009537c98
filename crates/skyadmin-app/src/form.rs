//! Small form primitives shared by the editor screens

use skyadmin_core::SelectOption;

/// Editable text value
///
/// Input is appended at the end; the terminal has no caret positioning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    /// Accepts newlines (markup bodies)
    pub multiline: bool,
    /// Rendered as bullets
    pub masked: bool,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn multiline(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            multiline: true,
            masked: false,
        }
    }

    pub fn masked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            multiline: false,
            masked: true,
        }
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Insert a line break; ignored on single-line fields
    pub fn newline(&mut self) -> bool {
        if self.multiline {
            self.value.push('\n');
        }
        self.multiline
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Text as shown on screen
    pub fn display(&self) -> String {
        if self.masked {
            "\u{2022}".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Server-provided choice list with the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectField {
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl SelectField {
    /// Replace the options, keeping the current value when it is offered
    ///
    /// Without a current value, the option marked `selected` wins.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        if self.value.is_empty() {
            if let Some(selected) = options.iter().find(|o| o.selected) {
                self.value = selected.value.clone();
            }
        }
        self.options = options;
    }

    fn position(&self) -> Option<usize> {
        self.options.iter().position(|o| o.value == self.value)
    }

    /// Step through the options, wrapping at both ends
    pub fn cycle(&mut self, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        let next = match self.position() {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.value = self.options[next].value.clone();
    }

    /// Label of the current value, falling back to the raw value
    pub fn label(&self) -> String {
        match self.position() {
            Some(i) => self.options[i].label.clone(),
            None if self.value.is_empty() => "--none--".to_string(),
            None => self.value.clone(),
        }
    }
}

use std::fmt;

/// Validation failures keyed by the configuration field they belong to.
///
/// A field holds at most one message; adding another replaces it. Insertion order is kept
/// so errors are reported in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollection {
    field_errors: Vec<(String, String)>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        log::debug!("Validation error on `{field}`: {message}");
        match self.field_errors.iter_mut().find(|(f, _)| f == field) {
            Some((_, existing)) => *existing = message.to_string(),
            None => self
                .field_errors
                .push((field.to_string(), message.to_string())),
        }
    }

    pub fn has_any_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    pub fn total_errors(&self) -> usize {
        self.field_errors.len()
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn field_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.field_errors
            .iter()
            .map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in self.field_errors() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

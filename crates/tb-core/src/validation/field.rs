use crate::{CoreError, FieldValue, Result as CoreErrorResult};

/// A named form field plus the constraints to check it against.
///
/// Constraints are evaluated in a fixed order (required, then the length
/// bounds, then the numeric bounds) and checking stops at the first failure.
/// Length bounds only apply to text values, numeric bounds only to numbers;
/// constraints that do not match the value's kind are skipped.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    value: FieldValue,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
}

impl Field {
    /// Start a check for a free-text field
    pub fn text<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self::new(name.into(), FieldValue::Text(value.into()))
    }

    /// Start a check for a numeric field
    pub fn number<N: Into<String>>(name: N, value: i64) -> Self {
        Self::new(name.into(), FieldValue::Number(value))
    }

    fn new(name: String, value: FieldValue) -> Self {
        Self {
            name,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn min(mut self, value: i64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: i64) -> Self {
        self.max = Some(value);
        self
    }

    /// Check the value against the configured constraints.
    /// The failure message is the blocking text shown to the user,
    /// in the form "<FieldName> <reason>".
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.required && !self.value.is_present() {
            return Err(CoreError::validation(format!("{} is required", self.name)));
        }

        if let FieldValue::Text(text) = &self.value {
            if let Some(min_length) = self.min_length {
                if text.len() < min_length {
                    return Err(CoreError::validation(format!(
                        "{} must be at least {} characters",
                        self.name, min_length
                    )));
                }
            }

            if let Some(max_length) = self.max_length {
                if text.len() > max_length {
                    return Err(CoreError::validation(format!(
                        "{} must not exceed {} characters",
                        self.name, max_length
                    )));
                }
            }
        }

        if let FieldValue::Number(value) = self.value {
            if let Some(min) = self.min {
                if value < min {
                    return Err(CoreError::validation(format!(
                        "{} must be at least {}",
                        self.name, min
                    )));
                }
            }

            if let Some(max) = self.max {
                if value > max {
                    return Err(CoreError::validation(format!(
                        "{} must not exceed {}",
                        self.name, max
                    )));
                }
            }
        }

        Ok(())
    }
}

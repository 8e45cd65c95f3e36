//! Form collection for a new project card.

use tb_config::ValidationConfig;
use tb_core::{Field, Result as CoreErrorResult, sanitize_string};

/// Sanitized, validated input for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: i64,
}

impl ProjectDraft {
    /// Sanitize the free-text fields, then check every field against the
    /// configured constraints, stopping at the first failure. A failure
    /// aborts the creation; no partial entity leaves this function.
    pub fn gather(
        title: &str,
        description: &str,
        people: i64,
        limits: &ValidationConfig,
    ) -> CoreErrorResult<Self> {
        let title = sanitize_string(title);
        let description = sanitize_string(description);

        let checks = [
            Field::text("Title", title.as_str())
                .required()
                .max_length(limits.max_title_length),
            Field::text("Description", description.as_str())
                .required()
                .min_length(limits.min_description_length),
            Field::number("People", people)
                .required()
                .min(limits.min_people)
                .max(limits.max_people),
        ];

        for check in &checks {
            check.validate()?;
        }

        Ok(Self {
            title,
            description,
            people,
        })
    }
}

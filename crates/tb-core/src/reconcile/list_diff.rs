use uuid::Uuid;

/// Outcome of comparing a rendered column against a target subset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDiff {
    /// Target ids missing from the rendered column, in target order
    pub insertions: Vec<Uuid>,
    /// Rendered ids absent from the target, in rendered order
    pub removals: Vec<Uuid>,
}

impl ListDiff {
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.removals.is_empty()
    }
}

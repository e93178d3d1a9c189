//! Push-only log of treated patients, searchable by name.

use crate::formatting::join_names;
use crate::models::Patient;

/// Records of treated patients, bottom (first treated) to top (last treated).
///
/// Records are never popped or reordered; the stack only grows until it is
/// cleared.
#[derive(Debug, Default, Clone)]
pub struct RecordStack {
    items: Vec<Patient>,
}

impl RecordStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a record on top of the stack.
    pub fn push(&mut self, patient: Patient) {
        self.items.push(patient);
    }

    /// Whether a record with exactly this name exists anywhere in the stack.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|p| p == name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Comma-separated listing, bottom to top. `None` when there are no records.
    pub fn render(&self) -> Option<String> {
        join_names(self.iter())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate bottom to top (treatment order).
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_contains() {
        let mut s = RecordStack::new();
        for name in ["Alice", "Bob", "Carol"] {
            s.push(name.into());
        }
        assert!(s.contains("Alice"));
        assert!(s.contains("Bob"));
        assert!(s.contains("Carol"));
        assert!(!s.contains("Dave"));
    }

    #[test]
    fn test_contains_is_exact_match() {
        let mut s = RecordStack::new();
        s.push("Carol".into());
        assert!(!s.contains("carol"));
        assert!(!s.contains("Carol "));
        assert!(!s.contains("Car"));
    }

    #[test]
    fn test_contains_on_empty_stack() {
        let s = RecordStack::new();
        assert!(!s.contains(""));
        assert!(!s.contains("Anyone"));
    }

    #[test]
    fn test_render_bottom_to_top() {
        let mut s = RecordStack::new();
        assert!(s.render().is_none());
        s.push("Alice".into());
        s.push("Bob".into());
        assert_eq!(s.render().as_deref(), Some("Alice, Bob"));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut s = RecordStack::new();
        s.push("Bob".into());
        s.push("Bob".into());
        assert_eq!(s.len(), 2);
        assert_eq!(s.render().as_deref(), Some("Bob, Bob"));
    }

    #[test]
    fn test_clear_forgets_records() {
        let mut s = RecordStack::new();
        s.push("Alice".into());
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains("Alice"));
        assert!(s.render().is_none());
    }
}

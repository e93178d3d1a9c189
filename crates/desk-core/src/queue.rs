//! First-in-first-out waiting line of patients.

use std::collections::VecDeque;

use crate::formatting::join_names;
use crate::models::Patient;

/// Patients waiting to be seen, in arrival order.
///
/// Removal always yields the earliest-arrived patient still waiting. Taking
/// from an empty queue is a no-op that yields `None`.
#[derive(Debug, Default, Clone)]
pub struct PatientQueue {
    items: VecDeque<Patient>,
}

impl PatientQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a patient to the back of the line.
    pub fn enqueue(&mut self, patient: Patient) {
        self.items.push_back(patient);
    }

    /// Remove and return the patient at the front, if any.
    pub fn dequeue(&mut self) -> Option<Patient> {
        self.items.pop_front()
    }

    /// Peek at the patient who would be attended next.
    pub fn front(&self) -> Option<&Patient> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Comma-separated listing, front to back. `None` when nobody is waiting.
    pub fn render(&self) -> Option<String> {
        join_names(self.iter())
    }

    /// Empty the line in place.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.items.iter()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(names: &[&str]) -> PatientQueue {
        let mut q = PatientQueue::new();
        for name in names {
            q.enqueue(Patient::from(*name));
        }
        q
    }

    // ── FIFO order ────────────────────────────────────────────────────────────

    #[test]
    fn test_dequeue_order_matches_enqueue_order() {
        let names = ["Alice", "Bob", "Carol", "Bob", "Dave"];
        let mut q = queue_of(&names);

        let drained: Vec<String> = std::iter::from_fn(|| q.dequeue())
            .map(|p| p.to_string())
            .collect();
        assert_eq!(drained, names);
        assert!(q.is_empty());
    }

    #[test]
    fn test_interleaved_enqueue_dequeue() {
        let mut q = PatientQueue::new();
        q.enqueue("A".into());
        q.enqueue("B".into());
        assert_eq!(q.dequeue(), Some(Patient::from("A")));
        q.enqueue("C".into());
        assert_eq!(q.dequeue(), Some(Patient::from("B")));
        assert_eq!(q.dequeue(), Some(Patient::from("C")));
        assert_eq!(q.dequeue(), None);
    }

    // ── Empty behaviour ───────────────────────────────────────────────────────

    #[test]
    fn test_new_queue_is_empty() {
        let q = PatientQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.front().is_none());
        assert!(q.render().is_none());
    }

    #[test]
    fn test_extra_dequeues_do_not_underflow() {
        let mut q = queue_of(&["Only"]);
        assert!(q.dequeue().is_some());
        assert!(q.dequeue().is_none());
        assert!(q.dequeue().is_none());
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);

        q.enqueue("Next".into());
        assert!(!q.is_empty());
        assert_eq!(q.front().map(Patient::name), Some("Next"));
    }

    // ── front / render ────────────────────────────────────────────────────────

    #[test]
    fn test_front_does_not_remove() {
        let q = queue_of(&["Alice", "Bob"]);
        assert_eq!(q.front().map(Patient::name), Some("Alice"));
        assert_eq!(q.front().map(Patient::name), Some("Alice"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_render_front_to_back() {
        let q = queue_of(&["Alice", "Bob"]);
        assert_eq!(q.render().as_deref(), Some("Alice, Bob"));
    }

    // ── clear ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_clear_empties_queue() {
        let mut q = queue_of(&["Alice", "Bob", "Carol"]);
        q.clear();
        assert!(q.is_empty());
        assert!(q.render().is_none());
        assert!(q.dequeue().is_none());
    }
}

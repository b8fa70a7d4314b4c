//! Ordered collection of observer handles.
//!
//! Insertion order is notification order. Duplicates are allowed. Lookups and
//! removals outside the list are answered with `None` instead of failing.

use crate::observer::{same_observer, ObserverHandle};

#[derive(Default, Clone)]
pub struct ObserverList {
    observers: Vec<ObserverHandle>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append and return the new count.
    pub fn add(&mut self, observer: ObserverHandle) -> usize {
        self.observers.push(observer);
        self.observers.len()
    }

    pub fn count(&self) -> usize {
        self.observers.len()
    }

    pub fn get(&self, index: usize) -> Option<&ObserverHandle> {
        self.observers.get(index)
    }

    /// First index at or after `start` holding the same observer.
    pub fn index_of(&self, observer: &ObserverHandle, start: usize) -> Option<usize> {
        self.observers
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, candidate)| same_observer(candidate, observer))
            .map(|(i, _)| i)
    }

    /// Remove the observer at `index`, shifting later ones left.
    /// Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<ObserverHandle> {
        if index < self.observers.len() {
            Some(self.observers.remove(index))
        } else {
            None
        }
    }

    /// Handles in current order, detached from the list.
    pub fn snapshot(&self) -> Vec<ObserverHandle> {
        self.observers.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObserverHandle> {
        self.observers.iter()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.observers.iter().map(|o| o.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::MovieObserver;
    use std::rc::Rc;

    #[test]
    fn add_returns_new_count() {
        let mut list = ObserverList::new();
        assert_eq!(list.add(MovieObserver::handle("A")), 1);
        assert_eq!(list.add(MovieObserver::handle("B")), 2);
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut list = ObserverList::new();
        list.add(MovieObserver::handle("A"));

        assert_eq!(list.get(0).map(|o| o.name()), Some("A"));
        assert!(list.get(1).is_none());
        assert!(list.get(usize::MAX).is_none());
    }

    #[test]
    fn index_of_respects_start_and_duplicates() {
        let a = MovieObserver::handle("A");
        let b = MovieObserver::handle("B");
        let mut list = ObserverList::new();
        list.add(Rc::clone(&a));
        list.add(Rc::clone(&b));
        list.add(Rc::clone(&a));

        assert_eq!(list.index_of(&a, 0), Some(0));
        assert_eq!(list.index_of(&a, 1), Some(2));
        assert_eq!(list.index_of(&b, 2), None);
        assert_eq!(list.index_of(&a, 10), None);
    }

    #[test]
    fn index_of_compares_identity_not_name() {
        let mut list = ObserverList::new();
        list.add(MovieObserver::handle("A"));

        let lookalike = MovieObserver::handle("A");
        assert_eq!(list.index_of(&lookalike, 0), None);
    }

    #[test]
    fn remove_at_shifts_left() {
        let mut list = ObserverList::new();
        list.add(MovieObserver::handle("A"));
        list.add(MovieObserver::handle("B"));
        list.add(MovieObserver::handle("C"));

        let removed = list.remove_at(1);
        assert_eq!(removed.map(|o| o.name().to_string()), Some("B".to_string()));

        let names: Vec<_> = list.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut list = ObserverList::new();
        list.add(MovieObserver::handle("A"));

        assert!(list.remove_at(5).is_none());
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn count_tracks_adds_minus_successful_removals() {
        let mut list = ObserverList::new();
        let mut expected = 0usize;

        for (i, op) in [true, true, false, true, false, false, false, true]
            .into_iter()
            .enumerate()
        {
            if op {
                list.add(MovieObserver::handle(format!("O{}", i)));
                expected += 1;
            } else if list.remove_at(0).is_some() {
                expected -= 1;
            }
            assert_eq!(list.count(), expected);
        }
    }

    #[test]
    fn snapshot_is_detached() {
        let mut list = ObserverList::new();
        list.add(MovieObserver::handle("A"));

        let snapshot = list.snapshot();
        list.remove_at(0);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(list.count(), 0);
    }
}

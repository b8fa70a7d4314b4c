//! # Subject
//!
//! A [`Subject`] owns one [`ObserverList`] and broadcasts playback events to it.
//!
//! Notification walks a snapshot of the list taken when `notify_*` is called, so
//! the set of observers reached by one broadcast is fixed at call time even if
//! the list is changed while callbacks run.

use crate::observer::ObserverHandle;
use crate::observer_list::ObserverList;
use crate::transcript::Transcript;
use log::debug;

#[derive(Debug, Default, Clone)]
pub struct Subject {
    observers: ObserverList,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: ObserverHandle) {
        debug!("adding observer: {}", observer.name());
        self.observers.add(observer);
    }

    /// Remove the first registration of `observer`. Returns false when it was
    /// not registered.
    pub fn remove_observer(&mut self, observer: &ObserverHandle) -> bool {
        let Some(index) = self.observers.index_of(observer, 0) else {
            debug!("observer not registered: {}", observer.name());
            return false;
        };
        debug!("removing observer: {} (at {})", observer.name(), index);
        self.observers.remove_at(index).is_some()
    }

    pub fn notify_start(&self, label: &str, out: &mut Transcript) {
        let observers = self.observers.snapshot();
        debug!("notify start '{}' to {} observer(s)", label, observers.len());
        for observer in observers {
            observer.on_playback_start(label, out);
        }
    }

    pub fn notify_stop(&self, label: &str, out: &mut Transcript) {
        let observers = self.observers.snapshot();
        debug!("notify stop '{}' to {} observer(s)", label, observers.len());
        for observer in observers {
            observer.on_playback_stop(label, out);
        }
    }

    pub fn observers(&self) -> &ObserverList {
        &self.observers
    }
}

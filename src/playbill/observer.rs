//! # Observers
//!
//! An [`Observer`] is anything with a name that wants to hear about playback.
//! Subjects hold observers through [`ObserverHandle`], a shared handle: the
//! same observer can watch several movies at once, and identity is the handle's
//! address, not the observer's name.

use crate::transcript::{Line, Transcript};
use std::rc::Rc;

pub trait Observer {
    fn name(&self) -> &str;

    /// Called when a watched movie starts playing.
    fn on_playback_start(&self, title: &str, out: &mut Transcript);

    /// Called when a watched movie stops.
    fn on_playback_stop(&self, title: &str, out: &mut Transcript);
}

pub type ObserverHandle = Rc<dyn Observer>;

/// True when both handles point at the same observer.
pub fn same_observer(a: &ObserverHandle, b: &ObserverHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Observer that reports playback by name.
#[derive(Debug, Clone)]
pub struct MovieObserver {
    name: String,
}

impl MovieObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Convenience for the common case of registering a fresh observer.
    pub fn handle(name: impl Into<String>) -> ObserverHandle {
        Rc::new(Self::new(name))
    }
}

impl Observer for MovieObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_playback_start(&self, title: &str, out: &mut Transcript) {
        out.push(Line::notice(format!("{}: Playing {}...", self.name, title)));
    }

    fn on_playback_stop(&self, title: &str, out: &mut Transcript) {
        out.push(Line::notice(format!("{}: Stopped {}...", self.name, title)));
    }
}

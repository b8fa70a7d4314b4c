//! # Movies
//!
//! [`Playable`] is the role of anything that has attributes and broadcasts
//! playback to observers. Its operations are provided on top of three accessors,
//! so an implementor only says where its attribute store and subject live.
//!
//! - [`Movie`] owns an [`AttributeStore`] and a [`Subject`].
//! - [`DownloadableMovie`] owns a `Movie`, forwards everything to it and adds
//!   [`DownloadableMovie::download`].
//!
//! Playing or stopping before a title is set is fine: observers are told the
//! empty title.

use crate::attributes::{AttributeStore, Attributes};
use crate::observer::ObserverHandle;
use crate::social::Social;
use crate::subject::Subject;
use crate::transcript::{Line, Transcript};

pub trait Playable: Attributes {
    fn subject(&self) -> &Subject;

    fn subject_mut(&mut self) -> &mut Subject;

    fn attributes_mut(&mut self) -> &mut AttributeStore;

    fn set(&mut self, attr: &str, value: &str) {
        self.attributes_mut().set(attr, value);
    }

    fn add_observer(&mut self, observer: ObserverHandle) {
        self.subject_mut().add_observer(observer);
    }

    fn remove_observer(&mut self, observer: &ObserverHandle) -> bool {
        self.subject_mut().remove_observer(observer)
    }

    fn play(&self, out: &mut Transcript) {
        self.subject().notify_start(self.title(), out);
    }

    fn stop(&self, out: &mut Transcript) {
        self.subject().notify_stop(self.title(), out);
    }
}

#[derive(Debug, Default, Clone)]
pub struct Movie {
    attributes: AttributeStore,
    subject: Subject,
}

impl Movie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: &str) -> Self {
        let mut movie = Self::new();
        movie.set(crate::attributes::TITLE, title);
        movie
    }
}

impl Attributes for Movie {
    fn get(&self, attr: &str) -> Option<&str> {
        self.attributes.get(attr)
    }
}

impl Playable for Movie {
    fn subject(&self) -> &Subject {
        &self.subject
    }

    fn subject_mut(&mut self) -> &mut Subject {
        &mut self.subject
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}

impl Social for Movie {}

/// A movie that can also be downloaded.
#[derive(Debug, Default, Clone)]
pub struct DownloadableMovie {
    movie: Movie,
}

impl DownloadableMovie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn download(&self, out: &mut Transcript) {
        out.push(Line::notice(format!(
            "now downloading movie: {}",
            self.title()
        )));
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }
}

impl From<Movie> for DownloadableMovie {
    fn from(movie: Movie) -> Self {
        Self { movie }
    }
}

impl Attributes for DownloadableMovie {
    fn get(&self, attr: &str) -> Option<&str> {
        self.movie.get(attr)
    }
}

impl Playable for DownloadableMovie {
    fn subject(&self) -> &Subject {
        self.movie.subject()
    }

    fn subject_mut(&mut self) -> &mut Subject {
        self.movie.subject_mut()
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        self.movie.attributes_mut()
    }
}

impl Social for DownloadableMovie {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{DIRECTOR, TITLE, YEAR};
    use crate::observer::MovieObserver;

    #[test]
    fn play_then_stop_notifies_observer() {
        let mut fight_club = Movie::new();
        fight_club.set(TITLE, "Fight Club");
        fight_club.set(YEAR, "1999");
        fight_club.set(DIRECTOR, "David Fincher");
        fight_club.add_observer(MovieObserver::handle("Observer A"));

        let mut out = Transcript::new();
        fight_club.play(&mut out);
        fight_club.stop(&mut out);

        assert_eq!(
            out.contents(),
            vec!["Observer A: Playing Fight Club...", "Observer A: Stopped Fight Club..."]
        );
        assert_eq!(fight_club.get(DIRECTOR), Some("David Fincher"));
    }

    #[test]
    fn unset_attribute_is_absent() {
        let movie = Movie::new();
        assert_eq!(movie.get("year"), None);
    }

    #[test]
    fn play_without_title_uses_empty_title() {
        let mut movie = Movie::new();
        movie.add_observer(MovieObserver::handle("Observer A"));

        let mut out = Transcript::new();
        movie.play(&mut out);

        assert_eq!(out.contents(), vec!["Observer A: Playing ..."]);
    }

    #[test]
    fn play_without_observers_is_silent() {
        let movie = Movie::titled("Kill Bill");
        let mut out = Transcript::new();

        movie.play(&mut out);
        movie.stop(&mut out);

        assert!(out.is_empty());
    }

    #[test]
    fn download_before_any_observer() {
        let mut matrix = DownloadableMovie::new();
        matrix.set(TITLE, "The Matrix");

        let mut out = Transcript::new();
        matrix.download(&mut out);

        assert_eq!(out.contents(), vec!["now downloading movie: The Matrix"]);
    }

    #[test]
    fn downloadable_keeps_movie_behavior() {
        let mut matrix = DownloadableMovie::from(Movie::titled("The Matrix"));
        matrix.set(YEAR, "1999");
        matrix.add_observer(MovieObserver::handle("Observer C"));

        let mut out = Transcript::new();
        matrix.download(&mut out);
        matrix.play(&mut out);
        matrix.stop(&mut out);

        assert_eq!(
            out.contents(),
            vec![
                "now downloading movie: The Matrix",
                "Observer C: Playing The Matrix...",
                "Observer C: Stopped The Matrix...",
            ]
        );
        assert_eq!(matrix.get(YEAR), Some("1999"));
        assert_eq!(matrix.movie().subject().observers().count(), 1);
    }

    #[test]
    fn title_change_is_seen_by_next_notification() {
        let mut movie = Movie::titled("Working Title");
        movie.add_observer(MovieObserver::handle("O"));
        movie.set(TITLE, "Final Title");

        let mut out = Transcript::new();
        movie.play(&mut out);

        assert_eq!(out.contents(), vec!["O: Playing Final Title..."]);
    }
}

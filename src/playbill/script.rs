//! # Screening Scripts
//!
//! A [`Script`] is the ordered list of things a driver does to a set of movies:
//! create them, set attributes, attach observers, play, stop, download, share.
//! [`run`] executes a script against fresh entities and returns the
//! [`Transcript`] it produced.
//!
//! Scripts are plain JSON, one object per step, tagged by `op`:
//!
//! ```text
//! { "steps": [
//!     { "op": "create", "id": "matrix", "kind": "downloadable" },
//!     { "op": "set", "movie": "matrix", "attr": "title", "value": "The Matrix" },
//!     { "op": "download", "movie": "matrix" },
//!     { "op": "separator" }
//! ] }
//! ```
//!
//! Movies are referred to by their script id. Observers are referred to by name;
//! within one run, a name always means the same observer, so attaching
//! "Observer A" to two movies shares one observer between them.
//!
//! [`Script::default_screening`] is the built-in driver.

use crate::attributes::{Attributes, DIRECTOR, TITLE, YEAR};
use crate::config::PlaybillConfig;
use crate::error::{PlaybillError, Result};
use crate::movie::{DownloadableMovie, Movie, Playable};
use crate::observer::{MovieObserver, ObserverHandle};
use crate::social::Social;
use crate::transcript::{Line, Transcript};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieKind {
    #[default]
    Movie,
    Downloadable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Create {
        id: String,
        #[serde(default)]
        kind: MovieKind,
    },
    Set {
        movie: String,
        attr: String,
        value: String,
    },
    /// Print title, year and director
    Describe { movie: String },
    AddObserver { movie: String, observer: String },
    RemoveObserver { movie: String, observer: String },
    Play { movie: String },
    Stop { movie: String },
    Download { movie: String },
    Share { movie: String, friend: String },
    Like { movie: String },
    Separator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create a movie, set its three descriptive attributes and describe it.
    fn introduce(&mut self, id: &str, kind: MovieKind, details: [&str; 3]) -> &mut Self {
        self.push(Step::Create {
            id: id.into(),
            kind,
        });
        for (attr, value) in [TITLE, YEAR, DIRECTOR].into_iter().zip(details) {
            self.push(Step::Set {
                movie: id.into(),
                attr: attr.into(),
                value: value.into(),
            });
        }
        self.push(Step::Describe { movie: id.into() })
    }

    fn observe(&mut self, movie: &str, observer: &str) -> &mut Self {
        self.push(Step::AddObserver {
            movie: movie.into(),
            observer: observer.into(),
        })
    }

    /// The built-in screening.
    pub fn default_screening() -> Self {
        let play = |movie: &str| Step::Play {
            movie: movie.into(),
        };
        let stop = |movie: &str| Step::Stop {
            movie: movie.into(),
        };

        let mut script = Script::new();
        script
            .introduce(
                "fight_club",
                MovieKind::Movie,
                ["Fight Club", "1999", "David Fincher"],
            )
            .observe("fight_club", "Observer A")
            .push(Step::Separator)
            .introduce(
                "kill_bill",
                MovieKind::Movie,
                ["Kill Bill", "2003", "Quentin Tarantino"],
            )
            .push(Step::Separator)
            .introduce(
                "school_of_rock",
                MovieKind::Movie,
                ["School of Rock", "2003", "Richard Linklater"],
            )
            .observe("school_of_rock", "Observer B")
            .push(Step::Separator);

        for movie in ["fight_club", "kill_bill", "school_of_rock"] {
            script.push(play(movie));
        }
        for movie in ["fight_club", "kill_bill", "school_of_rock"] {
            script.push(stop(movie));
        }

        script
            .push(Step::Separator)
            .introduce(
                "the_matrix",
                MovieKind::Downloadable,
                ["The Matrix", "1999", "The Wachowskis"],
            )
            .push(Step::Download {
                movie: "the_matrix".into(),
            })
            .observe("the_matrix", "Observer C")
            .push(play("the_matrix"))
            .push(stop("the_matrix"))
            .push(Step::Separator)
            .push(Step::Create {
                id: "iron_man_2".into(),
                kind: MovieKind::Movie,
            })
            .push(Step::Set {
                movie: "iron_man_2".into(),
                attr: TITLE.into(),
                value: "Iron Man 2".into(),
            })
            .push(Step::Share {
                movie: "iron_man_2".into(),
                friend: "V. Rivas".into(),
            });

        script
    }
}

fn lookup<'m>(movies: &'m HashMap<String, Screen>, id: &str) -> Result<&'m Screen> {
    movies
        .get(id)
        .ok_or_else(|| PlaybillError::UnknownMovie(id.to_string()))
}

enum Screen {
    Movie(Movie),
    Downloadable(DownloadableMovie),
}

impl Screen {
    fn new(kind: MovieKind) -> Self {
        match kind {
            MovieKind::Movie => Screen::Movie(Movie::new()),
            MovieKind::Downloadable => Screen::Downloadable(DownloadableMovie::new()),
        }
    }

    fn playable(&self) -> &dyn Playable {
        match self {
            Screen::Movie(m) => m,
            Screen::Downloadable(d) => d,
        }
    }

    fn playable_mut(&mut self) -> &mut dyn Playable {
        match self {
            Screen::Movie(m) => m,
            Screen::Downloadable(d) => d,
        }
    }

    fn social(&self) -> &dyn Social {
        match self {
            Screen::Movie(m) => m,
            Screen::Downloadable(d) => d,
        }
    }
}

/// State of one run: the movies created so far, the observers named so far and
/// the transcript.
struct Screening<'a> {
    config: &'a PlaybillConfig,
    movies: HashMap<String, Screen>,
    observers: HashMap<String, ObserverHandle>,
    out: Transcript,
}

impl<'a> Screening<'a> {
    fn new(config: &'a PlaybillConfig) -> Self {
        Self {
            config,
            movies: HashMap::new(),
            observers: HashMap::new(),
            out: Transcript::new(),
        }
    }

    fn movie_mut(&mut self, id: &str) -> Result<&mut Screen> {
        self.movies
            .get_mut(id)
            .ok_or_else(|| PlaybillError::UnknownMovie(id.to_string()))
    }

    fn observer(&mut self, name: &str) -> ObserverHandle {
        let handle = self
            .observers
            .entry(name.to_string())
            .or_insert_with(|| MovieObserver::handle(name));
        Rc::clone(handle)
    }

    fn apply(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Create { id, kind } => {
                if self.movies.contains_key(id) {
                    return Err(PlaybillError::DuplicateMovie(id.clone()));
                }
                debug!("creating {:?} '{}'", kind, id);
                self.movies.insert(id.clone(), Screen::new(*kind));
            }
            Step::Set { movie, attr, value } => {
                self.movie_mut(movie)?.playable_mut().set(attr, value);
            }
            Step::Describe { movie } => {
                let playable = lookup(&self.movies, movie)?.playable();
                let lines = [("Movie", TITLE), ("Year", YEAR), ("Director", DIRECTOR)].map(
                    |(label, attr)| {
                        Line::diagnostic(format!(
                            "{}: {}",
                            label,
                            playable.get(attr).unwrap_or_default()
                        ))
                    },
                );
                for line in lines {
                    self.out.push(line);
                }
            }
            Step::AddObserver { movie, observer } => {
                lookup(&self.movies, movie)?;
                let handle = self.observer(observer);
                if self.config.announce_observers {
                    self.out
                        .push(Line::diagnostic(format!("adding Observer: {}", handle.name())));
                }
                self.movie_mut(movie)?.playable_mut().add_observer(handle);
            }
            Step::RemoveObserver { movie, observer } => {
                let handle = self.observers.get(observer).cloned();
                let screen = self.movie_mut(movie)?;
                match handle {
                    Some(handle) => {
                        screen.playable_mut().remove_observer(&handle);
                    }
                    None => debug!("no observer named '{}' to remove", observer),
                }
            }
            Step::Play { movie } => {
                let screen = lookup(&self.movies, movie)?;
                screen.playable().play(&mut self.out);
            }
            Step::Stop { movie } => {
                let screen = lookup(&self.movies, movie)?;
                screen.playable().stop(&mut self.out);
            }
            Step::Download { movie } => match lookup(&self.movies, movie)? {
                Screen::Downloadable(d) => d.download(&mut self.out),
                Screen::Movie(_) => return Err(PlaybillError::NotDownloadable(movie.clone())),
            },
            Step::Share { movie, friend } => {
                let screen = lookup(&self.movies, movie)?;
                screen.social().share(friend, &mut self.out);
            }
            Step::Like { movie } => {
                let screen = lookup(&self.movies, movie)?;
                screen.social().like(&mut self.out);
            }
            Step::Separator => {
                if self.config.show_separators {
                    self.out.push(Line::separator(self.config.separator.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Run `script` against fresh movies and observers.
pub fn run(script: &Script, config: &PlaybillConfig) -> Result<Transcript> {
    info!("running screening of {} step(s)", script.steps.len());
    let mut screening = Screening::new(config);
    for step in &script.steps {
        screening.apply(step)?;
    }
    info!(
        "screening finished: {} movie(s), {} observer(s), {} line(s)",
        screening.movies.len(),
        screening.observers.len(),
        screening.out.len()
    );
    Ok(screening.out)
}

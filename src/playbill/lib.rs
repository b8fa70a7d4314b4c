//! # Playbill Architecture
//!
//! Playbill models movies that tell their observers when playback starts or stops.
//! It is a library first; the `playbill` binary is one client that runs a
//! screening script and prints what happened.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, renders the transcript   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Script Layer (script.rs)                                   │
//! │  - Serializable driver steps, built-in default screening    │
//! │  - Resolves movie ids and observer names                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (attributes, observer_list, subject, observer,        │
//! │        movie, social)                                       │
//! │  - Total functions: no Result, no panics                    │
//! │  - Output goes into a Transcript, never to stdout           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Composition instead of inheritance
//!
//! A [`movie::Movie`] embeds an [`attributes::AttributeStore`] and a
//! [`subject::Subject`]. A [`movie::DownloadableMovie`] embeds a `Movie` and
//! forwards to it, adding `download`. Sharing lives in the [`social::Social`]
//! trait, whose methods only need [`attributes::Attributes::get`]; movie types opt
//! in with an empty impl.
//!
//! ## Module Overview
//!
//! - [`attributes`]: string attribute bag and the `Attributes` capability
//! - [`observer_list`]: ordered observer handles
//! - [`subject`]: observer registration and notification
//! - [`observer`]: the `Observer` role and `MovieObserver`
//! - [`movie`]: `Playable`, `Movie`, `DownloadableMovie`
//! - [`social`]: share/like capability
//! - [`transcript`]: output lines produced by a run
//! - [`script`]: screening scripts and the runner
//! - [`config`]: presentation configuration
//! - [`error`]: error types for the fallible outer surfaces

pub mod attributes;
pub mod config;
pub mod error;
pub mod movie;
pub mod observer;
pub mod observer_list;
pub mod script;
pub mod social;
pub mod subject;
pub mod transcript;

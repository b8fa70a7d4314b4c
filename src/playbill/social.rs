//! # Social capability
//!
//! Sharing and liking only need to read a title, so [`Social`] asks for nothing
//! but [`Attributes`]. It is not part of the playback hierarchy: a type gains
//! it by opting in with an empty impl, as [`crate::movie::Movie`] and
//! [`crate::movie::DownloadableMovie`] do.
//!
//! ```
//! use playbill::attributes::{AttributeStore, Attributes};
//! use playbill::social::Social;
//! use playbill::transcript::Transcript;
//!
//! struct Poster(AttributeStore);
//!
//! impl Attributes for Poster {
//!     fn get(&self, attr: &str) -> Option<&str> {
//!         self.0.get(attr)
//!     }
//! }
//!
//! impl Social for Poster {}
//!
//! let mut store = AttributeStore::new();
//! store.set("title", "Alien");
//! let mut out = Transcript::new();
//! Poster(store).like(&mut out);
//! assert_eq!(out.contents(), vec!["You just liked Alien"]);
//! ```

use crate::attributes::Attributes;
use crate::transcript::{Line, Transcript};

pub trait Social: Attributes {
    fn share(&self, friend: &str, out: &mut Transcript) {
        out.push(Line::notice(format!(
            "Sharing {} with {}",
            self.title(),
            friend
        )));
    }

    fn like(&self, out: &mut Transcript) {
        out.push(Line::notice(format!("You just liked {}", self.title())));
    }
}

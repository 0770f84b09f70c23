//! The character record served by `GET /character/{id}`.
//!
//! Every field is kept exactly as the server sent it. Unknown fields in
//! the payload are ignored.

use serde::{Deserialize, Serialize};

/// A single character from the Rick and Morty dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    /// Usually `"Alive"`, `"Dead"` or `"unknown"`, but the set is open.
    pub status: String,
    pub species: String,
    /// Free-text subspecies; frequently empty.
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Origin,
    pub location: Location,
    /// Avatar image URL.
    pub image: String,
    /// Episode URLs in server order.
    pub episode: Vec<String>,
    pub url: String,
    /// Creation timestamp, kept as the opaque string the server returned.
    pub created: String,
}

/// Where a character comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
    pub url: String,
}

/// The character's last known location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub url: String,
}

impl Character {
    /// Number of episodes the character appears in.
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

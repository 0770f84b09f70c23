//! Projection of a [`Character`] onto the screen's fields.
//!
//! The mapping is deterministic: text is copied verbatim except for
//! species and location, where every space becomes a line break so
//! multi-word values wrap inside their narrow slots.

use serde::Serialize;

use crate::character::Character;

/// Colour hint for the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusTone {
    Green,
    Red,
    Gray,
}

/// Status label with its colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: StatusTone,
}

impl StatusBadge {
    /// Classify a raw status string. Only the exact values `"Alive"` and
    /// `"Dead"` are recognised; everything else reads as unknown.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Alive" => Self {
                label: "Alive",
                tone: StatusTone::Green,
            },
            "Dead" => Self {
                label: "Dead",
                tone: StatusTone::Red,
            },
            _ => Self {
                label: "Unknown",
                tone: StatusTone::Gray,
            },
        }
    }
}

/// Everything the screen shows for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub status: StatusBadge,
    pub species: String,
    pub location: String,
    /// Episode count as display text.
    pub episodes: String,
    /// Source for the avatar slot.
    pub image_url: String,
}

impl From<&Character> for CharacterView {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            gender: character.gender.clone(),
            status: StatusBadge::from_status(&character.status),
            species: wrap_words(&character.species),
            location: wrap_words(&character.location.name),
            episodes: character.episode_count().to_string(),
            image_url: character.image.clone(),
        }
    }
}

/// Put each space-separated word on its own line.
pub fn wrap_words(text: &str) -> String {
    text.replace(' ', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Location, Origin};

    fn character(status: &str, species: &str, location: &str, episodes: usize) -> Character {
        Character {
            id: 2,
            name: "Morty Smith".into(),
            status: status.into(),
            species: species.into(),
            kind: String::new(),
            gender: "Male".into(),
            origin: Origin {
                name: "unknown".into(),
                url: String::new(),
            },
            location: Location {
                name: location.into(),
                url: "https://rickandmortyapi.com/api/location/3".into(),
            },
            image: "https://rickandmortyapi.com/api/character/avatar/2.jpeg".into(),
            episode: (1..=episodes)
                .map(|n| format!("https://rickandmortyapi.com/api/episode/{n}"))
                .collect(),
            url: "https://rickandmortyapi.com/api/character/2".into(),
            created: "2017-11-04T18:50:21.651Z".into(),
        }
    }

    #[test]
    fn text_fields_copied_verbatim() {
        let view = CharacterView::from(&character("Alive", "Human", "Earth", 51));
        assert_eq!(view.id, 2);
        assert_eq!(view.name, "Morty Smith");
        assert_eq!(view.gender, "Male");
        assert_eq!(view.species, "Human");
        assert_eq!(view.location, "Earth");
        assert_eq!(
            view.image_url,
            "https://rickandmortyapi.com/api/character/avatar/2.jpeg"
        );
    }

    #[test]
    fn multi_word_values_wrap_per_word() {
        let view = CharacterView::from(&character(
            "Alive",
            "Mythological Creature",
            "Citadel of Ricks",
            1,
        ));
        assert_eq!(view.species, "Mythological\nCreature");
        assert_eq!(view.location, "Citadel\nof\nRicks");
    }

    #[test]
    fn double_spaces_become_blank_lines() {
        assert_eq!(wrap_words("Earth  (C-137)"), "Earth\n\n(C-137)");
    }

    #[test]
    fn episode_count_is_rendered_as_text() {
        assert_eq!(CharacterView::from(&character("Alive", "Human", "Earth", 0)).episodes, "0");
        assert_eq!(CharacterView::from(&character("Alive", "Human", "Earth", 41)).episodes, "41");
    }

    #[test]
    fn status_alive_is_green() {
        let badge = StatusBadge::from_status("Alive");
        assert_eq!(badge.label, "Alive");
        assert_eq!(badge.tone, StatusTone::Green);
    }

    #[test]
    fn status_dead_is_red() {
        let badge = StatusBadge::from_status("Dead");
        assert_eq!(badge.label, "Dead");
        assert_eq!(badge.tone, StatusTone::Red);
    }

    #[test]
    fn other_statuses_are_unknown_gray() {
        for raw in ["unknown", "alive", "DEAD", "", "Schrödinger"] {
            let badge = StatusBadge::from_status(raw);
            assert_eq!(badge.label, "Unknown", "status {raw:?}");
            assert_eq!(badge.tone, StatusTone::Gray);
        }
    }
}

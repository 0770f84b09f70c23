//! HTTP client for the Rick and Morty REST API.
//!
//! Provides the character endpoint wrapper, avatar download with
//! circular cropping, and the async source traits the screen
//! controller is written against.

pub mod api;
pub mod avatar;
pub mod source;

pub use api::{CharacterApi, CharacterApiError, DEFAULT_BASE_URL};
pub use avatar::{Avatar, AvatarError, AvatarLoader};
pub use source::{AvatarSource, CharacterSource};

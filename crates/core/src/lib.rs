//! Domain types for the character viewer.
//!
//! Holds the [`character::Character`] record as returned by the REST API,
//! random id generation over the dataset's id space, the projection of a
//! character onto screen fields, and the user-facing notice taxonomy.
//! Nothing in this crate performs I/O.

pub mod character;
pub mod error;
pub mod id;
pub mod notice;
pub mod render;

pub use character::{Character, Location, Origin};
pub use error::CoreError;
pub use notice::Notice;
pub use render::{CharacterView, StatusBadge, StatusTone};

//! Async seams between the screen controller and the network.
//!
//! Every call takes the caller's [`CancellationToken`]; when it fires
//! before the response arrives the call resolves to the `Cancelled`
//! error variant and the in-flight request is dropped.

use async_trait::async_trait;
use rickview_core::Character;
use tokio_util::sync::CancellationToken;

use crate::api::{CharacterApi, CharacterApiError};
use crate::avatar::{Avatar, AvatarError, AvatarLoader};

/// Something that can fetch a character by id.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_character(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> Result<Option<Character>, CharacterApiError>;
}

/// Something that can load an avatar image.
#[async_trait]
pub trait AvatarSource: Send + Sync {
    async fn fetch_avatar(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Avatar, AvatarError>;
}

#[async_trait]
impl CharacterSource for CharacterApi {
    async fn fetch_character(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> Result<Option<Character>, CharacterApiError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CharacterApiError::Cancelled),
            result = self.get_character(id) => result,
        }
    }
}

#[async_trait]
impl AvatarSource for AvatarLoader {
    async fn fetch_avatar(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Avatar, AvatarError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AvatarError::Cancelled),
            result = self.load(url) => result,
        }
    }
}

//! Shared fakes for screen integration tests.
//!
//! [`GatedSource`] and [`GatedAvatars`] hold every request open until the
//! test releases it through a oneshot gate, so tests decide the order in
//! which responses resolve.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use rickview::screen::{Outcome, Screen};
use rickview::view::{View, ViewState};
use rickview_client::{
    Avatar, AvatarError, AvatarSource, CharacterApiError, CharacterSource,
};
use rickview_core::{Character, CharacterView, Location, Notice, Origin};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

pub type FetchResult = Result<Option<Character>, CharacterApiError>;
pub type AvatarResult = Result<Avatar, AvatarError>;

/// Build a character with predictable derived fields.
pub fn character(id: i64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: "Alive".into(),
        species: "Human".into(),
        kind: String::new(),
        gender: "Female".into(),
        origin: Origin {
            name: "Earth (Replacement Dimension)".into(),
            url: "https://rickandmortyapi.com/api/location/20".into(),
        },
        location: Location {
            name: "Earth (Replacement Dimension)".into(),
            url: "https://rickandmortyapi.com/api/location/20".into(),
        },
        image: avatar_url(id),
        episode: vec![
            "https://rickandmortyapi.com/api/episode/6".into(),
            "https://rickandmortyapi.com/api/episode/7".into(),
            "https://rickandmortyapi.com/api/episode/8".into(),
        ],
        url: format!("https://rickandmortyapi.com/api/character/{id}"),
        created: "2017-11-04T19:09:56.428Z".into(),
    }
}

pub fn avatar_url(id: i64) -> String {
    format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg")
}

pub fn avatar(url: &str) -> Avatar {
    Avatar {
        source_url: url.to_string(),
        image: RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])),
    }
}

// ---------------------------------------------------------------------------
// Character source
// ---------------------------------------------------------------------------

/// Character source whose responses are released by the test.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<HashMap<i64, oneshot::Receiver<FetchResult>>>,
    calls: Mutex<Vec<i64>>,
    cancelled: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a gate for `id`. Must happen before the fetch starts.
    pub fn gate(&self, id: i64) -> oneshot::Sender<FetchResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(id, rx);
        tx
    }

    /// Ids requested so far, in call order.
    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }

    /// Fetches that observed cancellation.
    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CharacterSource for GatedSource {
    async fn fetch_character(&self, id: i64, cancel: &CancellationToken) -> FetchResult {
        self.calls.lock().unwrap().push(id);
        let gate = self.gates.lock().unwrap().remove(&id);
        let Some(gate) = gate else {
            panic!("no gate registered for character {id}");
        };

        tokio::select! {
            _ = cancel.cancelled() => {
                self.cancelled.fetch_add(1, Ordering::SeqCst);
                Err(CharacterApiError::Cancelled)
            }
            result = gate => result.unwrap_or(Err(CharacterApiError::Cancelled)),
        }
    }
}

/// Character source that ignores cancellation and answers after a delay.
pub struct SlowSource {
    pub delay: Duration,
    pub finished: AtomicUsize,
}

#[async_trait]
impl CharacterSource for SlowSource {
    async fn fetch_character(&self, id: i64, _cancel: &CancellationToken) -> FetchResult {
        tokio::time::sleep(self.delay).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(Some(character(id, "Squanchy")))
    }
}

// ---------------------------------------------------------------------------
// Avatar source
// ---------------------------------------------------------------------------

/// Avatar source whose responses are released by the test.
#[derive(Default)]
pub struct GatedAvatars {
    gates: Mutex<HashMap<String, oneshot::Receiver<AvatarResult>>>,
}

impl GatedAvatars {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gate(&self, url: &str) -> oneshot::Sender<AvatarResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }
}

#[async_trait]
impl AvatarSource for GatedAvatars {
    async fn fetch_avatar(&self, url: &str, cancel: &CancellationToken) -> AvatarResult {
        let gate = self.gates.lock().unwrap().remove(url);
        let Some(gate) = gate else {
            return Ok(avatar(url));
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(AvatarError::Cancelled),
            result = gate => result.unwrap_or(Err(AvatarError::Cancelled)),
        }
    }
}

// ---------------------------------------------------------------------------
// Views and helpers
// ---------------------------------------------------------------------------

/// View whose state outlives the screen that owns it.
#[derive(Clone, Default)]
pub struct SharedView(pub Arc<Mutex<ViewState>>);

impl SharedView {
    pub fn snapshot(&self) -> ViewState {
        self.0.lock().unwrap().clone()
    }
}

impl View for SharedView {
    fn render(&mut self, character: &CharacterView) {
        self.0.lock().unwrap().render(character)
    }

    fn set_avatar(&mut self, avatar: &Avatar) {
        self.0.lock().unwrap().set_avatar(avatar)
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.0.lock().unwrap().show_notice(notice)
    }
}

/// Await the next outcome, failing the test if none arrives promptly.
pub async fn next<V: View>(screen: &mut Screen<V>) -> Outcome {
    tokio::time::timeout(Duration::from_secs(5), screen.next_event())
        .await
        .expect("screen event should arrive")
        .expect("screen should still be alive")
}

/// Wait until `condition` holds, polling briefly.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition should become true");
}

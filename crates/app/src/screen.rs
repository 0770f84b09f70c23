//! Fetch-and-render controller for the single character screen.
//!
//! [`Screen`] owns the [`View`] and is driven from one task. Each
//! [`trigger`](Screen::trigger) spawns an independent fetch on the
//! runtime; results come back over an mpsc channel and are applied by
//! [`next_event`](Screen::next_event) on the screen's own task, so the
//! view has exactly one writer.
//!
//! Fetches are neither queued nor deduplicated. Two triggers race and
//! whichever response arrives last is what stays on screen.
//!
//! Every fetch runs under a child of the screen's [`CancellationToken`].
//! [`destroy`](Screen::destroy) (or dropping the screen) cancels it, so
//! in-flight fetches stop and nothing reaches the view afterwards.

use std::sync::Arc;

use rickview_client::{Avatar, AvatarError, AvatarSource, CharacterApiError, CharacterSource};
use rickview_core::id::IdRange;
use rickview_core::{Character, CharacterView, Notice};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::view::View;

/// Where the screen is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing fetched yet.
    Idle,
    /// At least one fetch is in flight.
    Fetching,
    /// The most recent completed fetch was rendered.
    Rendered,
    /// The most recent completed fetch produced a notice.
    Failed,
}

/// What applying one completed event did to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered { id: i64 },
    Failed { id: i64, notice: Notice },
    /// A fetch ended without anything to show (cancelled).
    Discarded { id: i64 },
    AvatarShown { url: String },
    /// The avatar belongs to a character that is no longer on screen.
    AvatarStale { url: String },
    AvatarFailed { url: String },
}

enum ScreenEvent {
    Fetched {
        id: i64,
        result: Result<Option<Character>, CharacterApiError>,
    },
    AvatarLoaded {
        url: String,
        result: Result<Avatar, AvatarError>,
    },
}

/// The character screen.
pub struct Screen<V: View> {
    source: Arc<dyn CharacterSource>,
    avatars: Option<Arc<dyn AvatarSource>>,
    view: V,
    range: IdRange,
    /// Phase reached by the last completed fetch.
    settled: Phase,
    in_flight: usize,
    avatars_in_flight: usize,
    /// Image URL of the character currently on screen.
    current_image: Option<String>,
    /// Lifecycle scope; cancelled on destroy.
    cancel: CancellationToken,
    tx: mpsc::UnboundedSender<ScreenEvent>,
    rx: mpsc::UnboundedReceiver<ScreenEvent>,
}

impl<V: View> Screen<V> {
    /// Create a screen. Pass `None` for `avatars` to skip image loading.
    pub fn new(
        source: Arc<dyn CharacterSource>,
        avatars: Option<Arc<dyn AvatarSource>>,
        view: V,
        range: IdRange,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            avatars,
            view,
            range,
            settled: Phase::Idle,
            in_flight: 0,
            avatars_in_flight: 0,
            current_image: None,
            cancel: CancellationToken::new(),
            tx,
            rx,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight > 0 {
            Phase::Fetching
        } else {
            self.settled
        }
    }

    /// Number of character fetches not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Fetch a random character from the configured range. Returns the
    /// chosen id.
    pub fn trigger(&mut self) -> i64 {
        let id = self.range.pick(&mut rand::rng());
        self.trigger_with(id);
        id
    }

    /// Fetch a specific character.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger_with(&mut self, id: i64) {
        self.in_flight += 1;

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let cancel = self.cancel.child_token();

        tracing::info!(id, in_flight = self.in_flight, "Fetching character");

        tokio::spawn(async move {
            let result = source.fetch_character(id, &cancel).await;
            if cancel.is_cancelled() {
                tracing::debug!(id, "Screen gone, dropping fetch result");
                return;
            }
            // The receiver only disappears together with the screen.
            let _ = tx.send(ScreenEvent::Fetched { id, result });
        });
    }

    /// Wait for the next completed fetch or avatar load and apply it to
    /// the view.
    ///
    /// Returns `None` once the screen's lifecycle has been cancelled.
    /// Cancel-safe: can be used inside `tokio::select!`.
    pub async fn next_event(&mut self) -> Option<Outcome> {
        let event = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return None,
            event = self.rx.recv() => event?,
        };
        Some(self.apply(event))
    }

    /// Apply events until no fetch or avatar load is outstanding.
    pub async fn settle(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        while self.in_flight + self.avatars_in_flight > 0 {
            match self.next_event().await {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        outcomes
    }

    /// Tear the screen down. In-flight fetches are cancelled and their
    /// results are never applied.
    pub fn destroy(self) {
        tracing::info!(
            in_flight = self.in_flight,
            avatars_in_flight = self.avatars_in_flight,
            "Destroying screen",
        );
        // Drop cancels the lifecycle token.
    }

    // ---- private helpers ----

    fn apply(&mut self, event: ScreenEvent) -> Outcome {
        match event {
            ScreenEvent::Fetched { id, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match result {
                    Ok(Some(character)) => self.render(&character),
                    Ok(None) => {
                        tracing::warn!(id, "Character response had an empty body");
                        self.fail(id, Notice::RequestFailed { status: None })
                    }
                    Err(e) => {
                        tracing::warn!(id, error = %e, "Character fetch failed");
                        match e.notice() {
                            Some(notice) => self.fail(id, notice),
                            None => Outcome::Discarded { id },
                        }
                    }
                }
            }
            ScreenEvent::AvatarLoaded { url, result } => {
                self.avatars_in_flight = self.avatars_in_flight.saturating_sub(1);
                match result {
                    Ok(_) if self.current_image.as_deref() != Some(url.as_str()) => {
                        tracing::debug!(%url, "Discarding avatar for a replaced character");
                        Outcome::AvatarStale { url }
                    }
                    Ok(avatar) => {
                        self.view.set_avatar(&avatar);
                        Outcome::AvatarShown { url }
                    }
                    Err(e) => {
                        tracing::warn!(%url, error = %e, "Avatar load failed");
                        Outcome::AvatarFailed { url }
                    }
                }
            }
        }
    }

    fn render(&mut self, character: &Character) -> Outcome {
        let view = CharacterView::from(character);
        self.view.render(&view);
        self.settled = Phase::Rendered;

        tracing::info!(id = character.id, name = %character.name, "Character rendered");

        self.current_image = Some(view.image_url.clone());
        if let Some(avatars) = self.avatars.clone() {
            self.spawn_avatar_load(avatars, view.image_url);
        }

        Outcome::Rendered { id: character.id }
    }

    fn fail(&mut self, id: i64, notice: Notice) -> Outcome {
        self.view.show_notice(&notice);
        self.settled = Phase::Failed;
        Outcome::Failed { id, notice }
    }

    fn spawn_avatar_load(&mut self, avatars: Arc<dyn AvatarSource>, url: String) {
        self.avatars_in_flight += 1;
        let tx = self.tx.clone();
        let cancel = self.cancel.child_token();

        tokio::spawn(async move {
            let result = avatars.fetch_avatar(&url, &cancel).await;
            if cancel.is_cancelled() {
                return;
            }
            let _ = tx.send(ScreenEvent::AvatarLoaded { url, result });
        });
    }
}

impl<V: View> Drop for Screen<V> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

//! The screen's output surface.
//!
//! [`View`] is everything the controller may do to the screen. The
//! controller only ever calls it from its own task.

use rickview_client::Avatar;
use rickview_core::{CharacterView, Notice};

/// A fixed single-character layout.
pub trait View {
    /// Replace every text field with the given character's values.
    fn render(&mut self, character: &CharacterView);

    /// Fill the avatar slot.
    fn set_avatar(&mut self, avatar: &Avatar);

    /// Show a transient notice without touching rendered content.
    fn show_notice(&mut self, notice: &Notice);
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&mut self, character: &CharacterView) {
        (**self).render(character)
    }

    fn set_avatar(&mut self, avatar: &Avatar) {
        (**self).set_avatar(avatar)
    }

    fn show_notice(&mut self, notice: &Notice) {
        (**self).show_notice(notice)
    }
}

/// In-memory view that keeps what is currently on screen.
#[derive(Debug, Default, Clone)]
pub struct ViewState {
    /// Currently displayed character, if any.
    pub character: Option<CharacterView>,
    /// Source URL and dimensions of the displayed avatar.
    pub avatar: Option<(String, u32, u32)>,
    /// Every notice shown so far, oldest first.
    pub notices: Vec<Notice>,
    pub render_count: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl View for ViewState {
    fn render(&mut self, character: &CharacterView) {
        self.character = Some(character.clone());
        self.avatar = None;
        self.render_count += 1;
    }

    fn set_avatar(&mut self, avatar: &Avatar) {
        self.avatar = Some((avatar.source_url.clone(), avatar.width(), avatar.height()));
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

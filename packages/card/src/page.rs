//! # Create-page state
//!
//! [`CardPage`] is the state behind the create page: the card being edited,
//! the tab shown on narrow screens, and the identity email last copied into
//! the card. It holds no framework types; the UI keeps one inside a signal and
//! calls these methods from its event handlers and effects.

use crate::config::SaveMessages;
use crate::models::{CardRecord, ViewMode};

/// The two presentation layouts rendered from one [`CardPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Single column with edit/preview tabs (narrow viewports).
    Tabbed,
    /// Form and preview side by side (wide viewports).
    TwoColumn,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Tabbed, Layout::TwoColumn];
}

/// Which panels a layout shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panels {
    pub form: bool,
    pub preview: bool,
}

/// A confirmation message for the notification layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardPage {
    record: CardRecord,
    view_mode: ViewMode,
    seeded_email: Option<String>,
}

impl CardPage {
    /// Empty card, edit tab, nothing seeded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Copy the identity's email into the card.
    ///
    /// Applies only when `email` is non-empty and differs from the email last
    /// seeded, so repeating the same identity leaves a user's later edit in
    /// place. The identity is remembered even when the card already holds that
    /// email. Losing the identity never clears the field. Returns whether the
    /// page changed.
    pub fn seed_identity(&mut self, email: Option<&str>) -> bool {
        let Some(email) = email.filter(|e| !e.is_empty()) else {
            return false;
        };
        if self.seeded_email.as_deref() == Some(email) {
            return false;
        }
        tracing::debug!("Seeding card email from identity");
        self.seeded_email = Some(email.to_string());
        self.record.email = email.to_string();
        true
    }

    /// Copy of this page with the identity seeded, or `None` when seeding
    /// changes nothing.
    pub fn with_identity(&self, email: Option<&str>) -> Option<Self> {
        let mut next = self.clone();
        next.seed_identity(email).then_some(next)
    }

    /// Replace the whole record with what the form reported.
    pub fn update(&mut self, record: CardRecord) {
        self.record = record;
    }

    /// Build the save confirmation. Nothing is stored.
    pub fn save(&self, messages: &SaveMessages) -> Notice {
        Notice {
            title: messages.title.clone(),
            description: messages.description.clone(),
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    pub fn visible_panels(&self, layout: Layout) -> Panels {
        match layout {
            Layout::TwoColumn => Panels {
                form: true,
                preview: true,
            },
            Layout::Tabbed => Panels {
                form: self.view_mode == ViewMode::Edit,
                preview: self.view_mode == ViewMode::Preview,
            },
        }
    }
}

//! Per-show detail card: read mode with expandable details and a poster
//! preview, or edit mode holding a [`ShowForm`].

use watchme_core::show::{Show, RATING_MAX};
use watchme_core::types::DbId;

use super::form::ShowForm;
use super::list::ShowList;
use crate::api::ShowsGateway;

pub const SAVE_ERROR: &str = "Failed to update show. Please try again.";
pub const DELETE_ERROR: &str = "Failed to delete show. Please try again.";

/// Genre chips rendered on a collapsed card.
pub const MAX_GENRE_CHIPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Read,
    Edit(ShowForm),
}

/// UI state for one card. The show itself lives in the [`ShowList`]; the
/// card only refers to it by id.
#[derive(Debug, Clone)]
pub struct ShowCard {
    id: DbId,
    mode: CardMode,
    expanded: bool,
    preview: bool,
    busy: bool,
    error: Option<String>,
}

impl ShowCard {
    pub fn new(id: DbId) -> Self {
        Self {
            id,
            mode: CardMode::Read,
            expanded: false,
            preview: false,
            busy: false,
            error: None,
        }
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Edit(_))
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview
    }

    pub fn toggle_preview(&mut self) {
        self.preview = !self.preview;
    }

    /// Whether a save or delete is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter edit mode with a form seeded from the list's current record.
    /// Returns `false` if the show is no longer in the list.
    pub fn begin_edit(&mut self, list: &ShowList) -> bool {
        match list.get(self.id) {
            Some(show) => {
                self.mode = CardMode::Edit(ShowForm::for_edit(show));
                self.error = None;
                true
            }
            None => false,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ShowForm> {
        match &mut self.mode {
            CardMode::Edit(form) => Some(form),
            CardMode::Read => None,
        }
    }

    /// Discard edits and return to read mode.
    pub fn cancel_edit(&mut self) {
        self.mode = CardMode::Read;
        self.error = None;
    }

    /// Send the form to the server. The list is updated with the server's
    /// record only once the call succeeds; on failure the form stays open
    /// with an inline error.
    pub async fn save(&mut self, gateway: &dyn ShowsGateway, list: &mut ShowList) -> bool {
        let CardMode::Edit(form) = &self.mode else {
            return false;
        };
        let payload = form.to_payload();

        self.busy = true;
        let result = gateway.update_show(self.id, &payload).await;
        self.busy = false;

        match result {
            Ok(updated) => {
                tracing::info!(show_id = updated.id, "Show updated");
                list.apply_updated(updated);
                self.mode = CardMode::Read;
                self.error = None;
                true
            }
            Err(e) => {
                tracing::warn!(show_id = self.id, error = %e, "Failed to update show");
                self.error = Some(SAVE_ERROR.to_string());
                false
            }
        }
    }

    /// Delete the show, removing it from the list once the server confirms.
    pub async fn delete(&mut self, gateway: &dyn ShowsGateway, list: &mut ShowList) -> bool {
        self.busy = true;
        let result = gateway.delete_show(self.id).await;
        self.busy = false;

        match result {
            Ok(confirmation) => {
                tracing::info!(show_id = confirmation.id, "Show deleted");
                list.apply_deleted(self.id);
                true
            }
            Err(e) => {
                tracing::warn!(show_id = self.id, error = %e, "Failed to delete show");
                self.error = Some(DELETE_ERROR.to_string());
                false
            }
        }
    }
}

/// One star per rating point, filled up to `rating`.
pub fn rating_stars(rating: i32) -> String {
    (1..=RATING_MAX)
        .map(|i| if i <= rating { '★' } else { '☆' })
        .collect()
}

pub fn genre_chips(show: &Show) -> Vec<&str> {
    show.genres().take(MAX_GENRE_CHIPS).collect()
}

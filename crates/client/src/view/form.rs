//! Show entry forms: the editable field set and the create-screen flow.

use watchme_core::payload::{ShowPayload, WATCHED_AT_FORMAT};
use watchme_core::show::{Show, ShowStatus, ShowType, DEFAULT_POSTER_URL, RATING_MAX, RATING_MIN};

use crate::api::ShowsGateway;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_GENRE: &str = "Uncategorized";
pub const DEFAULT_RATING: i32 = 3;

/// Inline message after a failed create.
pub const CREATE_ERROR: &str = "Failed to add show. Please try again.";

/// Raw field values as typed by the user. Every field is text so that a
/// blank form is representable; conversion happens in [`Self::to_payload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub title: String,
    pub show_type: String,
    pub status: String,
    pub rating: String,
    pub notes: String,
    /// `YYYY-MM-DD`.
    pub watched_at: String,
    /// Comma-separated genre labels.
    pub genre: String,
    pub poster_url: String,
}

impl ShowForm {
    /// Empty form for the create screen.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form seeded from an existing show. Blank or out-of-range values fall
    /// back to usable defaults so that saving without edits succeeds.
    pub fn for_edit(show: &Show) -> Self {
        let or = |value: &str, fallback: &str| {
            if value.trim().is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        let rating = if (RATING_MIN..=RATING_MAX).contains(&show.rating) {
            show.rating
        } else {
            DEFAULT_RATING
        };

        Self {
            title: or(&show.title, DEFAULT_TITLE),
            show_type: show.show_type.to_string(),
            status: show.status.to_string(),
            rating: rating.to_string(),
            notes: show.notes.clone(),
            watched_at: show.watched_at.format(WATCHED_AT_FORMAT).to_string(),
            genre: or(&show.genre, DEFAULT_GENRE),
            poster_url: or(&show.poster_url, DEFAULT_POSTER_URL),
        }
    }

    /// The request body. Blank fields are sent as absent; the server
    /// decides what is required and what gets a default.
    pub fn to_payload(&self) -> ShowPayload {
        fn field(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        }

        ShowPayload {
            title: field(&self.title),
            show_type: field(&self.show_type),
            status: field(&self.status),
            rating: self.rating.trim().parse().ok(),
            notes: Some(self.notes.clone()),
            watched_at: field(&self.watched_at),
            genre: field(&self.genre),
            poster_url: field(&self.poster_url),
        }
    }

    /// Required fields that are still blank, using the server's names.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.to_payload().missing_fields()
    }

    /// URL to show in the poster preview; the placeholder while blank.
    pub fn poster_preview(&self) -> &str {
        match self.poster_url.trim() {
            "" => DEFAULT_POSTER_URL,
            url => url,
        }
    }
}

/// Choices offered by the type select.
pub fn type_choices() -> impl Iterator<Item = &'static str> {
    ShowType::ALL.into_iter().map(ShowType::as_str)
}

/// Choices offered by the status select.
pub fn status_choices() -> impl Iterator<Item = &'static str> {
    ShowStatus::ALL.into_iter().map(ShowStatus::as_str)
}

/// Choices offered by the rating select.
pub fn rating_choices() -> impl Iterator<Item = i32> {
    RATING_MIN..=RATING_MAX
}

/// The create screen.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub form: ShowForm,
    submitting: bool,
    error: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form. Returns the created show on success, after which
    /// the caller navigates back to the list. On failure the inputs are
    /// kept, an inline error is set, and submission is re-enabled.
    pub async fn submit(&mut self, gateway: &dyn ShowsGateway) -> Option<Show> {
        if self.submitting {
            return None;
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            self.error = Some(format!("Please fill in: {}", missing.join(", ")));
            return None;
        }

        self.submitting = true;
        self.error = None;

        let result = gateway.create_show(&self.form.to_payload()).await;
        self.submitting = false;

        match result {
            Ok(show) => {
                tracing::info!(show_id = show.id, "Show added");
                Some(show)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add show");
                self.error = Some(CREATE_ERROR.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use watchme_core::show::ShowStatus;

    use super::*;
    use crate::view::test_support::{show, FakeGateway};

    fn filled() -> ShowForm {
        ShowForm {
            title: "  Arrival ".into(),
            show_type: "Movie".into(),
            status: "Finished".into(),
            rating: "9".into(),
            notes: String::new(),
            watched_at: "2024-02-10".into(),
            genre: "Sci-Fi, Drama".into(),
            poster_url: String::new(),
        }
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        assert_eq!(
            ShowForm::blank().missing_fields(),
            vec!["title", "type", "status", "rating", "watched_at", "genre"]
        );
    }

    #[test]
    fn payload_trims_and_omits_blank_poster() {
        let payload = filled().to_payload();
        assert_eq!(payload.title.as_deref(), Some("Arrival"));
        assert_eq!(payload.rating, Some(9));
        assert_eq!(payload.poster_url, None);
        assert!(payload.missing_fields().is_empty());
    }

    #[test]
    fn unparsable_rating_counts_as_missing() {
        let form = ShowForm {
            rating: "ten".into(),
            ..filled()
        };
        assert_eq!(form.missing_fields(), vec!["rating"]);
    }

    #[test]
    fn poster_preview_falls_back_to_placeholder() {
        let mut form = filled();
        assert_eq!(form.poster_preview(), DEFAULT_POSTER_URL);

        form.poster_url = "https://img.example.com/arrival.jpg".into();
        assert_eq!(form.poster_preview(), "https://img.example.com/arrival.jpg");
    }

    #[test]
    fn edit_form_applies_fallbacks() {
        let mut existing = show(7, "", ShowType::Anime, ShowStatus::OnHold, 0, " ");
        existing.poster_url = String::new();

        let form = ShowForm::for_edit(&existing);
        assert_eq!(form.title, DEFAULT_TITLE);
        assert_eq!(form.show_type, "Anime");
        assert_eq!(form.status, "On Hold");
        assert_eq!(form.rating, "3");
        assert_eq!(form.genre, DEFAULT_GENRE);
        assert_eq!(form.watched_at, "2024-03-01");
        assert_eq!(form.poster_url, DEFAULT_POSTER_URL);
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn choices_cover_canonical_values() {
        assert_eq!(type_choices().count(), 8);
        assert!(status_choices().all(|s| s != "Completed"));
        assert_eq!(rating_choices().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn submit_creates_show() {
        let gateway = FakeGateway::default();
        let mut create = CreateForm::new();
        create.form = filled();

        let created = create.submit(&gateway).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Arrival");
        assert_eq!(created.poster_url, DEFAULT_POSTER_URL);
        assert!(!create.is_submitting());
        assert_eq!(create.error(), None);
    }

    #[tokio::test]
    async fn submit_with_missing_fields_skips_the_request() {
        let gateway = FakeGateway::default();
        let mut create = CreateForm::new();
        create.form = ShowForm {
            genre: String::new(),
            ..filled()
        };

        assert!(create.submit(&gateway).await.is_none());
        assert_eq!(create.error(), Some("Please fill in: genre"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn failed_submit_keeps_inputs_and_re_enables() {
        let gateway = FakeGateway::default();
        gateway.set_failing(true);
        let mut create = CreateForm::new();
        create.form = filled();

        assert!(create.submit(&gateway).await.is_none());
        assert_eq!(create.error(), Some(CREATE_ERROR));
        assert!(!create.is_submitting());
        assert_eq!(create.form, filled());

        gateway.set_failing(false);
        assert!(create.submit(&gateway).await.is_some());
        assert_eq!(create.error(), None);
    }
}

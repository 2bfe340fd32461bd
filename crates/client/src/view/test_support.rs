//! Fixtures and an in-process gateway for view tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use watchme_core::payload::ShowPayload;
use watchme_core::show::{Show, ShowStatus, ShowType, DEFAULT_POSTER_URL};
use watchme_core::types::DbId;

use crate::api::{DeleteConfirmation, ShowsApiError, ShowsGateway};

pub fn show(
    id: DbId,
    title: &str,
    show_type: ShowType,
    status: ShowStatus,
    rating: i32,
    genre: &str,
) -> Show {
    Show {
        id,
        title: title.to_string(),
        show_type,
        status,
        rating,
        notes: String::new(),
        watched_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        genre: genre.to_string(),
        poster_url: DEFAULT_POSTER_URL.to_string(),
    }
}

/// Gateway backed by a plain vector. `set_failing(true)` makes every call
/// return a 500 [`ShowsApiError::Api`].
#[derive(Default)]
pub struct FakeGateway {
    shows: Mutex<Vec<Show>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_shows(shows: Vec<Show>) -> Self {
        Self {
            shows: Mutex::new(shows),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Show> {
        self.shows.lock().unwrap().clone()
    }

    fn begin(&self) -> Result<(), ShowsApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ShowsApiError::Api {
                status: 500,
                body: r#"{"error":"Internal server error","code":"INTERNAL_ERROR"}"#.into(),
            });
        }
        Ok(())
    }

    fn not_found() -> ShowsApiError {
        ShowsApiError::Api {
            status: 404,
            body: r#"{"error":"Show not found","code":"NOT_FOUND"}"#.into(),
        }
    }

    fn invalid(message: String) -> ShowsApiError {
        ShowsApiError::Api {
            status: 400,
            body: message,
        }
    }
}

#[async_trait]
impl ShowsGateway for FakeGateway {
    async fn list_shows(&self) -> Result<Vec<Show>, ShowsApiError> {
        self.begin()?;
        Ok(self.stored())
    }

    async fn create_show(&self, payload: &ShowPayload) -> Result<Show, ShowsApiError> {
        self.begin()?;
        let new = payload
            .clone()
            .into_new_show(DEFAULT_POSTER_URL)
            .map_err(|e| Self::invalid(e.to_string()))?;

        let mut shows = self.shows.lock().unwrap();
        let id = shows.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let created = Show {
            id,
            title: new.title,
            show_type: new.show_type,
            status: new.status,
            rating: new.rating,
            notes: new.notes,
            watched_at: new.watched_at,
            genre: new.genre,
            poster_url: new.poster_url,
        };
        shows.insert(0, created.clone());
        Ok(created)
    }

    async fn update_show(&self, id: DbId, payload: &ShowPayload) -> Result<Show, ShowsApiError> {
        self.begin()?;
        let new = payload
            .clone()
            .into_new_show(DEFAULT_POSTER_URL)
            .map_err(|e| Self::invalid(e.to_string()))?;

        let mut shows = self.shows.lock().unwrap();
        let slot = shows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(Self::not_found)?;
        *slot = Show {
            id,
            title: new.title,
            show_type: new.show_type,
            status: new.status,
            rating: new.rating,
            notes: new.notes,
            watched_at: new.watched_at,
            genre: new.genre,
            poster_url: new.poster_url,
        };
        Ok(slot.clone())
    }

    async fn delete_show(&self, id: DbId) -> Result<DeleteConfirmation, ShowsApiError> {
        self.begin()?;
        let mut shows = self.shows.lock().unwrap();
        let before = shows.len();
        shows.retain(|s| s.id != id);
        if shows.len() == before {
            return Err(Self::not_found());
        }
        Ok(DeleteConfirmation {
            message: "Show deleted successfully".into(),
            id,
        })
    }
}

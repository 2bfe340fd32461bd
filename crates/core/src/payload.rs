//! Request body for creating or replacing a show, and its validation.
//!
//! Every field is optional at the JSON level so that a missing field is
//! reported as a validation error naming the field, not as a body
//! deserialization failure.

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::show::{Show, ShowStatus, ShowType};
use crate::types::WatchDate;

/// Date format accepted for `watched_at`.
pub const WATCHED_AT_FORMAT: &str = "%Y-%m-%d";

/// Incoming show fields for POST and PUT. `id` is never part of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub show_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// A fully validated show, ready to be inserted or written over an existing row.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewShow {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    pub show_type: ShowType,
    pub status: ShowStatus,
    // Bounds mirror RATING_MIN / RATING_MAX and the table's CHECK constraint.
    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: i32,
    pub notes: String,
    pub watched_at: WatchDate,
    #[validate(length(min = 1, max = 100, message = "genre must be 1-100 characters"))]
    pub genre: String,
    #[validate(length(min = 1, message = "poster_url must not be empty"))]
    pub poster_url: String,
}

impl ShowPayload {
    /// Check required fields, parse enumerated values and the date, and
    /// apply defaults for `notes` and `poster_url`.
    pub fn into_new_show(self, default_poster_url: &str) -> Result<NewShow, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Required fields are missing: {}",
                missing.join(", ")
            )));
        }

        // Presence was checked above; the fallbacks below are unreachable.
        let title = self.title.unwrap_or_default().trim().to_string();
        let show_type: ShowType = self.show_type.unwrap_or_default().trim().parse()?;
        let status: ShowStatus = self.status.unwrap_or_default().trim().parse()?;
        let rating = self.rating.unwrap_or_default();
        let watched_at = parse_watched_at(self.watched_at.as_deref().unwrap_or_default())?;
        let genre = self.genre.unwrap_or_default().trim().to_string();

        let notes = self.notes.unwrap_or_default();
        let poster_url = self
            .poster_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_poster_url.to_string());

        let show = NewShow {
            title,
            show_type,
            status,
            rating,
            notes,
            watched_at,
            genre,
            poster_url,
        };

        show.validate()
            .map_err(|errors| CoreError::Validation(errors.to_string()))?;

        Ok(show)
    }

    /// Names of required fields that are absent or blank, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());

        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.show_type) {
            missing.push("type");
        }
        if blank(&self.status) {
            missing.push("status");
        }
        if self.rating.is_none() {
            missing.push("rating");
        }
        if blank(&self.watched_at) {
            missing.push("watched_at");
        }
        if blank(&self.genre) {
            missing.push("genre");
        }
        missing
    }
}

impl From<&Show> for ShowPayload {
    fn from(show: &Show) -> Self {
        Self {
            title: Some(show.title.clone()),
            show_type: Some(show.show_type.as_str().to_string()),
            status: Some(show.status.as_str().to_string()),
            rating: Some(show.rating),
            notes: Some(show.notes.clone()),
            watched_at: Some(show.watched_at.format(WATCHED_AT_FORMAT).to_string()),
            genre: Some(show.genre.clone()),
            poster_url: Some(show.poster_url.clone()),
        }
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_watched_at(raw: &str) -> Result<WatchDate, CoreError> {
    WatchDate::parse_from_str(raw.trim(), WATCHED_AT_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "watched_at must be a date in YYYY-MM-DD format, got '{raw}'"
        ))
    })
}

/// Accept a rating as either a JSON number or a numeric string.
///
/// Floats are accepted only when they have no fractional part.
/// HTML `<select>` values arrive as strings, so `"7"` is treated like `7`.
/// An empty string counts as absent.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged, expecting = "rating as a whole number or a numeric string")]
    enum RatingInput {
        Number(i64),
        Float(f64),
        Text(String),
    }

    match Option::<RatingInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RatingInput::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("rating out of range: {n}"))),
        // `7.0` is a whole number; `7.5` is not.
        Some(RatingInput::Float(f))
            if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) =>
        {
            Ok(Some(f as i32))
        }
        Some(RatingInput::Float(f)) => Err(de::Error::custom(format!(
            "rating must be a whole number, got {f}"
        ))),
        Some(RatingInput::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RatingInput::Text(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("rating must be an integer, got '{s}'"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::show::{DEFAULT_POSTER_URL, RATING_MAX, RATING_MIN};

    fn complete() -> ShowPayload {
        ShowPayload {
            title: Some("Arrival".into()),
            show_type: Some("Movie".into()),
            status: Some("Finished".into()),
            rating: Some(9),
            notes: Some("Rewatch soon".into()),
            watched_at: Some("2024-05-04".into()),
            genre: Some("Sci-Fi, Drama".into()),
            poster_url: Some("https://example.com/arrival.jpg".into()),
        }
    }

    #[test]
    fn complete_payload_is_accepted() {
        let show = complete().into_new_show(DEFAULT_POSTER_URL).unwrap();
        assert_eq!(show.title, "Arrival");
        assert_eq!(show.show_type, ShowType::Movie);
        assert_eq!(show.status, ShowStatus::Finished);
        assert_eq!(show.rating, 9);
        assert_eq!(show.watched_at, WatchDate::from_ymd_opt(2024, 5, 4).unwrap());
        assert_eq!(show.poster_url, "https://example.com/arrival.jpg");
    }

    #[test]
    fn each_required_field_is_enforced() {
        let strip: [fn(&mut ShowPayload); 6] = [
            |p| p.title = None,
            |p| p.show_type = None,
            |p| p.status = None,
            |p| p.rating = None,
            |p| p.watched_at = None,
            |p| p.genre = Some("   ".into()),
        ];
        for f in strip {
            let mut payload = complete();
            f(&mut payload);
            assert_matches!(
                payload.into_new_show(DEFAULT_POSTER_URL),
                Err(CoreError::Validation(msg)) if msg.starts_with("Required fields are missing")
            );
        }
    }

    #[test]
    fn missing_fields_are_listed_in_order() {
        let payload = ShowPayload {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            payload.missing_fields(),
            vec!["title", "type", "status", "rating", "watched_at", "genre"]
        );
    }

    #[test]
    fn optional_fields_get_defaults() {
        let mut payload = complete();
        payload.notes = None;
        payload.poster_url = None;

        let show = payload.into_new_show("https://img.test/none.png").unwrap();
        assert_eq!(show.notes, "");
        assert_eq!(show.poster_url, "https://img.test/none.png");
    }

    #[test]
    fn blank_poster_url_falls_back_to_default() {
        let mut payload = complete();
        payload.poster_url = Some("  ".into());

        let show = payload.into_new_show(DEFAULT_POSTER_URL).unwrap();
        assert_eq!(show.poster_url, DEFAULT_POSTER_URL);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [RATING_MIN, RATING_MAX] {
            let mut payload = complete();
            payload.rating = Some(rating);
            assert!(payload.into_new_show(DEFAULT_POSTER_URL).is_ok());
        }
        for rating in [RATING_MIN - 1, RATING_MAX + 1, -5] {
            let mut payload = complete();
            payload.rating = Some(rating);
            assert_matches!(
                payload.into_new_show(DEFAULT_POSTER_URL),
                Err(CoreError::Validation(_))
            );
        }
    }

    #[test]
    fn legacy_completed_is_normalized() {
        let mut payload = complete();
        payload.status = Some("Completed".into());
        let show = payload.into_new_show(DEFAULT_POSTER_URL).unwrap();
        assert_eq!(show.status, ShowStatus::Finished);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut payload = complete();
        payload.show_type = Some("Podcast".into());
        assert_matches!(
            payload.into_new_show(DEFAULT_POSTER_URL),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut payload = complete();
        payload.watched_at = Some("04/05/2024".into());
        assert_matches!(
            payload.into_new_show(DEFAULT_POSTER_URL),
            Err(CoreError::Validation(msg)) if msg.contains("watched_at")
        );
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut payload = complete();
        payload.title = Some("x".repeat(256));
        assert_matches!(
            payload.into_new_show(DEFAULT_POSTER_URL),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rating_accepts_numeric_strings() {
        let payload: ShowPayload = serde_json::from_value(serde_json::json!({
            "title": "Dark",
            "type": "Series",
            "status": "Watching",
            "rating": "8",
            "watched_at": "2023-10-01",
            "genre": "Mystery",
        }))
        .unwrap();
        assert_eq!(payload.rating, Some(8));
    }

    #[test]
    fn empty_rating_string_counts_as_missing() {
        let payload: ShowPayload =
            serde_json::from_value(serde_json::json!({ "rating": "" })).unwrap();
        assert_eq!(payload.rating, None);
    }

    #[test]
    fn non_numeric_rating_fails_to_deserialize() {
        let result: Result<ShowPayload, _> =
            serde_json::from_value(serde_json::json!({ "rating": "great" }));
        assert!(result.is_err());
    }

    #[test]
    fn whole_float_rating_is_accepted() {
        let payload: ShowPayload =
            serde_json::from_value(serde_json::json!({ "rating": 7.0 })).unwrap();
        assert_eq!(payload.rating, Some(7));
    }

    #[test]
    fn fractional_rating_names_the_problem() {
        let err = serde_json::from_value::<ShowPayload>(serde_json::json!({ "rating": 7.5 }))
            .unwrap_err();
        assert!(err.to_string().contains("whole number"), "{err}");

        let err = serde_json::from_value::<ShowPayload>(serde_json::json!({ "rating": true }))
            .unwrap_err();
        assert!(err.to_string().contains("rating as a whole number"), "{err}");
    }

    #[test]
    fn payload_from_show_round_trips_into_same_fields() {
        let show = Show {
            id: 3,
            title: "Planet Earth".into(),
            show_type: ShowType::Documentary,
            status: ShowStatus::OnHold,
            rating: 10,
            notes: "Episode 4 next".into(),
            watched_at: WatchDate::from_ymd_opt(2022, 12, 31).unwrap(),
            genre: "Nature".into(),
            poster_url: "https://example.com/pe.jpg".into(),
        };

        let new_show = ShowPayload::from(&show)
            .into_new_show(DEFAULT_POSTER_URL)
            .unwrap();
        assert_eq!(new_show.title, show.title);
        assert_eq!(new_show.show_type, show.show_type);
        assert_eq!(new_show.status, show.status);
        assert_eq!(new_show.watched_at, show.watched_at);
        assert_eq!(new_show.notes, show.notes);
    }
}

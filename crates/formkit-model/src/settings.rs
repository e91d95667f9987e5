//! Per-form settings consumed by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the field list is split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaginationMode {
    /// One page holding every field.
    #[default]
    SinglePage,
    /// Fixed-size pages of consecutive fields.
    MultiPage,
}

/// Form settings record.
///
/// Only `multi_page` and `progress_bar` drive engine behavior. The
/// remaining flags are carried for the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub multi_page: bool,
    pub progress_bar: bool,
    pub allow_anonymous: bool,
    pub confirmation_email: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl FormSettings {
    pub fn pagination_mode(&self) -> PaginationMode {
        if self.multi_page {
            PaginationMode::MultiPage
        } else {
            PaginationMode::SinglePage
        }
    }

    /// Progress is only meaningful when the form has pages.
    pub fn shows_progress(&self) -> bool {
        self.multi_page && self.progress_bar
    }

    /// Returns true if `now` falls inside the optional submission window.
    ///
    /// The window is inclusive at both ends. Enforcing it is up to the host.
    pub fn accepts_submissions_at(&self, now: DateTime<Utc>) -> bool {
        let after_start = self.start_date.is_none_or(|start| now >= start);
        let before_end = self.end_date.is_none_or(|end| now <= end);
        after_start && before_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn submission_window_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let settings = FormSettings {
            start_date: Some(start),
            end_date: Some(end),
            ..FormSettings::default()
        };
        assert!(settings.accepts_submissions_at(start));
        assert!(settings.accepts_submissions_at(end));
        assert!(!settings.accepts_submissions_at(end + chrono::Duration::seconds(1)));
        assert!(FormSettings::default().accepts_submissions_at(start));
    }

    #[test]
    fn progress_requires_multi_page() {
        let settings = FormSettings {
            progress_bar: true,
            ..FormSettings::default()
        };
        assert!(!settings.shows_progress());
        assert_eq!(settings.pagination_mode(), PaginationMode::SinglePage);
    }
}

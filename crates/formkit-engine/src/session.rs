//! Respondent filling session.
//!
//! Drives one respondent through the pages of a form to a terminal
//! submitted state:
//!
//! ```text
//! ViewingPage(i) --next, gate open, i < last--> ViewingPage(i + 1)
//! ViewingPage(last) --next, gate open--> Submitting
//! Submitting --persist ok--> Submitted
//! Submitting --persist failed--> ViewingPage(last)
//! ViewingPage(i) --previous, i > 0--> ViewingPage(i - 1)
//! ```
//!
//! A session is owned by one filling context; nothing here is shared.

use serde_json::Value;
use tracing::{debug, info, warn};

use formkit_model::{Field, FieldId, FieldType, FormDefinition, ValueMap};

use crate::error::{EngineError, Result};
use crate::gate;
use crate::host::{SubmissionId, SubmissionStore};
use crate::pagination::{Page, PaginationPlan};
use crate::visibility;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the page with this index; values may be edited.
    ViewingPage(usize),
    /// Waiting for the host to persist the payload.
    Submitting,
    /// Terminal. Redirects or thank-you views key off entering this state.
    Submitted(SubmissionId),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::ViewingPage(_) => "viewing_page",
            SessionState::Submitting => "submitting",
            SessionState::Submitted(_) => "submitted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Submitted(_))
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Moved between pages.
    Moved { from: usize, to: usize },
    /// Next was rejected; these required, visible fields are empty.
    Blocked { unmet: Vec<FieldId> },
    /// Next on the last page opened the gate; the payload is ready.
    Submitting,
    /// No-op, e.g. Previous on the first page.
    Unchanged,
}

/// Progress indicator values for the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current_page: usize,
    pub total_pages: usize,
    pub fraction: f64,
    /// Whether the form's settings ask for a progress bar.
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct SubmissionSession<'a> {
    form: &'a FormDefinition,
    values: ValueMap,
    state: SessionState,
}

impl<'a> SubmissionSession<'a> {
    /// Open a session on the first page.
    ///
    /// Hidden fields are seeded from their `defaultValue` property.
    pub fn start(form: &'a FormDefinition) -> Self {
        let mut values = ValueMap::new();
        for field in &form.fields {
            if field.field_type != FieldType::Hidden {
                continue;
            }
            match field.properties.get("defaultValue") {
                None | Some(Value::Null) => {}
                Some(Value::String(text)) if text.is_empty() => {}
                Some(value) => {
                    values.insert(field.id.to_string(), value.clone());
                }
            }
        }
        debug!(form_id = %form.id, seeded = values.len(), "started session");
        Self {
            form,
            values,
            state: SessionState::ViewingPage(0),
        }
    }

    pub fn form(&self) -> &'a FormDefinition {
        self.form
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    /// Pages for the form's current settings; rebuilt on every call.
    pub fn plan(&self) -> PaginationPlan<'a> {
        PaginationPlan::build(&self.form.fields, self.form.settings.pagination_mode())
    }

    /// Page index being shown, or the last page once submission started.
    pub fn current_page_index(&self) -> usize {
        match self.state {
            SessionState::ViewingPage(index) => index,
            SessionState::Submitting | SessionState::Submitted(_) => {
                self.plan().total_pages().saturating_sub(1)
            }
        }
    }

    pub fn current_page(&self) -> Option<Page<'a>> {
        self.plan().page(self.current_page_index()).cloned()
    }

    /// Fields on the current page that are shown for the current values.
    pub fn visible_fields(&self) -> Vec<&'a Field> {
        match self.current_page() {
            Some(page) => visibility::visible_fields(page.fields, &self.values),
            None => Vec::new(),
        }
    }

    /// Record a respondent entry (field id or composite sub-key).
    ///
    /// Layout fields carry no value; entries keyed by their id are rejected.
    pub fn set_value(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        self.ensure_editable()?;
        let key = key.into();
        if let Some(field) = self.form.field(&key)
            && !field.field_type.carries_value()
        {
            return Err(EngineError::NoValue {
                id: key,
                field_type: field.field_type.to_string(),
            });
        }
        self.values.insert(key, value);
        Ok(())
    }

    pub fn clear_value(&mut self, key: &str) -> Result<Option<Value>> {
        self.ensure_editable()?;
        Ok(self.values.remove(key))
    }

    /// Required, visible fields on the current page that are still empty.
    pub fn unmet_required(&self) -> Vec<&'a Field> {
        match self.current_page() {
            Some(page) => gate::unmet_required(&page.fields, &self.values),
            None => Vec::new(),
        }
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.state, SessionState::ViewingPage(_)) && self.unmet_required().is_empty()
    }

    /// Advance one page, or enter `Submitting` from the last page.
    ///
    /// A closed gate leaves the state untouched and reports the blockers.
    pub fn next(&mut self) -> Result<Navigation> {
        let SessionState::ViewingPage(index) = self.state else {
            return Err(self.closed());
        };
        let unmet = self.unmet_required();
        if !unmet.is_empty() {
            let unmet: Vec<FieldId> = unmet.into_iter().map(|field| field.id.clone()).collect();
            debug!(form_id = %self.form.id, page = index, blocked_by = unmet.len(), "next blocked");
            return Ok(Navigation::Blocked { unmet });
        }
        let plan = self.plan();
        if index + 1 >= plan.total_pages() {
            self.state = SessionState::Submitting;
            debug!(form_id = %self.form.id, page = index, "entering submission");
            return Ok(Navigation::Submitting);
        }
        self.state = SessionState::ViewingPage(index + 1);
        debug!(form_id = %self.form.id, from = index, to = index + 1, "advanced page");
        Ok(Navigation::Moved {
            from: index,
            to: index + 1,
        })
    }

    /// Go back one page. Never gated; a no-op on the first page.
    pub fn previous(&mut self) -> Result<Navigation> {
        let SessionState::ViewingPage(index) = self.state else {
            return Err(self.closed());
        };
        if index == 0 {
            return Ok(Navigation::Unchanged);
        }
        self.state = SessionState::ViewingPage(index - 1);
        debug!(form_id = %self.form.id, from = index, to = index - 1, "went back");
        Ok(Navigation::Moved {
            from: index,
            to: index - 1,
        })
    }

    /// The `{fieldId -> value}` map handed to the persistence collaborator.
    pub fn payload(&self) -> &ValueMap {
        &self.values
    }

    pub fn into_payload(self) -> ValueMap {
        self.values
    }

    /// Host reports that persisting succeeded.
    pub fn complete_submission(&mut self, submission_id: SubmissionId) -> Result<()> {
        self.ensure_submitting()?;
        info!(form_id = %self.form.id, submission_id = %submission_id, "submission persisted");
        self.state = SessionState::Submitted(submission_id);
        Ok(())
    }

    /// Host reports that persisting failed; the respondent is returned to
    /// the last page with values intact.
    pub fn fail_submission(&mut self) -> Result<()> {
        self.ensure_submitting()?;
        let last = self.plan().total_pages().saturating_sub(1);
        self.state = SessionState::ViewingPage(last);
        Ok(())
    }

    /// Persist through `store` and move to the outcome state.
    pub fn submit_with<S>(&mut self, store: &mut S) -> Result<SubmissionId>
    where
        S: SubmissionStore + ?Sized,
    {
        self.ensure_submitting()?;
        match store.persist(&self.form.id, &self.values) {
            Ok(submission_id) => {
                self.complete_submission(submission_id.clone())?;
                Ok(submission_id)
            }
            Err(error) => {
                warn!(form_id = %self.form.id, error = %error, "submission failed");
                self.fail_submission()?;
                Err(EngineError::Persist {
                    form_id: self.form.id.clone(),
                    source: error,
                })
            }
        }
    }

    pub fn progress(&self) -> Progress {
        let plan = self.plan();
        let current_page = self.current_page_index();
        Progress {
            current_page,
            total_pages: plan.total_pages(),
            fraction: plan.progress_fraction(current_page),
            visible: self.form.settings.shows_progress(),
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        match self.state {
            SessionState::ViewingPage(_) => Ok(()),
            _ => Err(self.closed()),
        }
    }

    fn ensure_submitting(&self) -> Result<()> {
        match self.state {
            SessionState::Submitting => Ok(()),
            _ => Err(EngineError::NotSubmitting {
                state: self.state.name(),
            }),
        }
    }

    fn closed(&self) -> EngineError {
        EngineError::SessionClosed {
            state: self.state.name(),
        }
    }
}

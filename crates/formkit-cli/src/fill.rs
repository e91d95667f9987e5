//! Non-interactive filling: apply a value file and press Next until the
//! session submits or a page blocks.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use tracing::{debug, info_span, trace};

use formkit_engine::{Navigation, SubmissionId, SubmissionSession, SubmissionStore};
use formkit_model::{FieldId, FormDefinition, ValueMap};

use crate::logging::redact_value;

/// One page the session passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVisit {
    pub index: usize,
    pub visible: Vec<FieldId>,
    pub hidden: Vec<FieldId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    Submitted(SubmissionId),
    /// Next was refused on `page` because these fields are empty.
    Blocked { page: usize, unmet: Vec<FieldId> },
    /// The form's submission window does not include `now`.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    pub form_id: String,
    pub total_pages: usize,
    pub visits: Vec<PageVisit>,
    pub outcome: FillOutcome,
}

impl FillReport {
    pub fn is_submitted(&self) -> bool {
        matches!(self.outcome, FillOutcome::Submitted(_))
    }
}

/// Drive a session over `form` with every entry of `values` pre-filled.
pub fn fill_form<S>(
    form: &FormDefinition,
    values: &ValueMap,
    store: &mut S,
    now: DateTime<Utc>,
) -> Result<FillReport>
where
    S: SubmissionStore + ?Sized,
{
    let span = info_span!("fill", form_id = %form.id);
    let _guard = span.enter();

    let mut session = SubmissionSession::start(form);
    let total_pages = session.plan().total_pages();
    let mut report = FillReport {
        form_id: form.id.clone(),
        total_pages,
        visits: Vec::new(),
        outcome: FillOutcome::Closed,
    };
    if !form.settings.accepts_submissions_at(now) {
        debug!(%now, "outside submission window");
        return Ok(report);
    }

    for (key, value) in values {
        trace!(key = %key, value = redact_value(&value.to_string()), "set value");
        session
            .set_value(key.clone(), value.clone())
            .with_context(|| format!("set value for '{key}'"))?;
    }

    loop {
        report.visits.push(visit(&session));
        let page = session.current_page_index();
        match session.next()? {
            Navigation::Moved { .. } => {}
            Navigation::Unchanged => bail!("session did not leave page {page}"),
            Navigation::Blocked { unmet } => {
                report.outcome = FillOutcome::Blocked { page, unmet };
                return Ok(report);
            }
            Navigation::Submitting => break,
        }
    }

    let submission_id = session
        .submit_with(store)
        .with_context(|| format!("submit form {}", form.id))?;
    report.outcome = FillOutcome::Submitted(submission_id);
    Ok(report)
}

fn visit(session: &SubmissionSession<'_>) -> PageVisit {
    let visible = session.visible_fields();
    let hidden = session
        .current_page()
        .map(|page| {
            page.fields
                .iter()
                .filter(|field| !visible.iter().any(|shown| shown.id == field.id))
                .map(|field| field.id.clone())
                .collect()
        })
        .unwrap_or_default();
    PageVisit {
        index: session.current_page_index(),
        visible: visible.iter().map(|field| field.id.clone()).collect(),
        hidden,
    }
}

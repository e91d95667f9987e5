//! Dynamic form engine.
//!
//! A declarative field list drives runtime decisions: which fields are
//! shown, how they are grouped into pages, and whether the respondent may
//! move forward. Everything here is synchronous, in-memory computation;
//! persistence and loading go through the [`host`] traits.
//!
//! Data flows leaves-first:
//!
//! 1. [`builder::FormBuilder`] maintains the ordered field list.
//! 2. [`pagination::PaginationPlan`] groups it into pages.
//! 3. [`visibility`] decides which fields on a page are shown.
//! 4. [`gate`] decides whether the page may be left forward.
//! 5. [`session::SubmissionSession`] drives navigation to submission.
//!
//! [`theme`] is independent and feeds the renderer.

pub mod builder;
pub mod error;
pub mod gate;
pub mod host;
pub mod lint;
pub mod options;
pub mod pagination;
pub mod session;
pub mod theme;
pub mod visibility;

pub use builder::{FormBuilder, reorder};
pub use error::{CollaboratorError, EngineError, Result};
pub use gate::{can_advance, is_filled, unmet_required};
pub use host::{DefinitionSource, SubmissionId, SubmissionStore, load_definition};
pub use lint::lint;
pub use options::{LintOptions, RangePolicy};
pub use pagination::{FIELDS_PER_PAGE, Page, PaginationPlan};
pub use session::{Navigation, Progress, SessionState, SubmissionSession};
pub use theme::{ButtonStyleParams, ResolvedTheme, resolve_button_style, resolve_theme};
pub use visibility::{VisibilityMap, is_visible, visibility_map, visible_fields};

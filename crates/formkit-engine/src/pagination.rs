//! Grouping of the ordered field list into pages.
//!
//! Chunking runs over every field, visible or not. A page may therefore
//! hold no currently visible field, and a required field hidden by its
//! rule still occupies a slot. Pages are derived views, rebuilt on demand.

use formkit_model::{Field, PaginationMode};

/// Number of fields per page in multi-page mode.
pub const FIELDS_PER_PAGE: usize = 4;

/// Page a field lands on, given its rank in display order.
pub fn page_index(rank: usize) -> usize {
    rank / FIELDS_PER_PAGE
}

/// A contiguous slice of the ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub index: usize,
    pub fields: Vec<&'a Field>,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Pages computed for one field list.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationPlan<'a> {
    pages: Vec<Page<'a>>,
}

impl<'a> PaginationPlan<'a> {
    /// Sort `fields` by order and split them per `mode`.
    ///
    /// Always yields at least one page, so an empty form can still be
    /// submitted.
    pub fn build<I>(fields: I, mode: PaginationMode) -> Self
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let mut ordered: Vec<&'a Field> = fields.into_iter().collect();
        ordered.sort_by_key(|field| field.order);

        let pages = match mode {
            PaginationMode::SinglePage => vec![Page {
                index: 0,
                fields: ordered,
            }],
            PaginationMode::MultiPage if ordered.is_empty() => vec![Page {
                index: 0,
                fields: Vec::new(),
            }],
            PaginationMode::MultiPage => ordered
                .chunks(FIELDS_PER_PAGE)
                .enumerate()
                .map(|(index, chunk)| Page {
                    index,
                    fields: chunk.to_vec(),
                })
                .collect(),
        };
        Self { pages }
    }

    pub fn pages(&self) -> &[Page<'a>] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page<'a>> {
        self.pages.get(index)
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.pages.len()
    }

    /// `(current + 1) / total`, clamped to `1.0`.
    pub fn progress_fraction(&self, current: usize) -> f64 {
        let total = self.pages.len().max(1);
        ((current + 1) as f64 / total as f64).min(1.0)
    }

    /// Page holding the field with the given id.
    pub fn page_of(&self, field_id: &str) -> Option<usize> {
        self.pages.iter().position(|page| {
            page.fields
                .iter()
                .any(|field| field.id.as_str() == field_id)
        })
    }
}

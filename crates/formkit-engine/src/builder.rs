//! Ordered field collection edited by a form author.
//!
//! Display order is the `order` attribute, not vector position. Every
//! mutation here leaves the orders dense (`0..n-1`) as long as the
//! collection started dense; [`FormBuilder::repack`] restores density for
//! collections loaded with gaps.

use std::collections::HashSet;

use tracing::debug;

use formkit_model::{Field, FieldId, FieldOption, FieldType};

use crate::error::{EngineError, Result};

/// Suffix appended to the label of a duplicated field.
pub const DUPLICATE_LABEL_SUFFIX: &str = " (Copy)";

/// Move the element at `from` to `to`, shifting the elements in between.
///
/// Pure splice used for both field and option reordering: remove at the
/// source, insert at the destination.
pub fn reorder<T>(mut items: Vec<T>, from: usize, to: usize) -> Result<Vec<T>> {
    let len = items.len();
    if from >= len {
        return Err(EngineError::IndexOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(EngineError::IndexOutOfRange { index: to, len });
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(items)
}

/// Returns true if the orders of `fields` are exactly `{0, ..., n-1}`.
pub fn orders_dense(fields: &[Field]) -> bool {
    let mut orders: Vec<usize> = fields.iter().map(|field| field.order).collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(index, order)| index == *order)
}

/// Fail with [`EngineError::DuplicateFieldId`] on the first repeated id.
pub fn ensure_unique_ids(fields: &[Field]) -> Result<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.id.as_str()) {
            return Err(EngineError::DuplicateFieldId {
                id: field.id.to_string(),
            });
        }
    }
    Ok(())
}

/// Caller-owned builder session holding the field list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBuilder {
    fields: Vec<Field>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an externally loaded field list.
    ///
    /// Orders are kept as loaded (gaps included); duplicate ids are rejected.
    pub fn from_fields(fields: Vec<Field>) -> Result<Self> {
        ensure_unique_ids(&fields)?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id.as_str() == id)
    }

    /// Mutable access for editing label, properties or the conditional rule.
    ///
    /// `id` and `order` are owned by the collection; change order through
    /// [`FormBuilder::reorder`].
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.id.as_str() == id)
    }

    /// Fields in display order. Equal orders keep their stored position.
    pub fn sorted(&self) -> Vec<&Field> {
        let mut ordered: Vec<&Field> = self.fields.iter().collect();
        ordered.sort_by_key(|field| field.order);
        ordered
    }

    /// Returns true if the orders are exactly `{0, ..., n-1}`.
    pub fn is_dense(&self) -> bool {
        orders_dense(&self.fields)
    }

    /// Append a new field seeded from the registry defaults.
    pub fn add(&mut self, field_type: FieldType) -> FieldId {
        let id = self.fresh_id();
        let field = Field::from_type_defaults(id.clone(), field_type, self.next_order());
        debug!(field_id = %id, field_type = %field_type, order = field.order, "added field");
        self.fields.push(field);
        id
    }

    /// Append a caller-built field, placing it last.
    pub fn insert(&mut self, mut field: Field) -> Result<FieldId> {
        if self.get(field.id.as_str()).is_some() {
            return Err(EngineError::DuplicateFieldId {
                id: field.id.to_string(),
            });
        }
        field.order = self.next_order();
        let id = field.id.clone();
        debug!(field_id = %id, order = field.order, "inserted field");
        self.fields.push(field);
        Ok(id)
    }

    /// Clone a field under a new id and append it at the end.
    pub fn duplicate(&mut self, id: &str) -> Result<FieldId> {
        let source = self.get(id).ok_or_else(|| EngineError::field_not_found(id))?;
        let mut copy = source.clone();
        copy.id = self.fresh_id();
        copy.label.push_str(DUPLICATE_LABEL_SUFFIX);
        copy.order = self.next_order();
        let new_id = copy.id.clone();
        debug!(source = id, field_id = %new_id, order = copy.order, "duplicated field");
        self.fields.push(copy);
        Ok(new_id)
    }

    /// Delete a field and re-pack the survivors' orders.
    ///
    /// Rules on other fields that targeted the removed field are left in
    /// place; they evaluate as hidden until edited.
    pub fn remove(&mut self, id: &str) -> Result<Field> {
        let position = self
            .fields
            .iter()
            .position(|field| field.id.as_str() == id)
            .ok_or_else(|| EngineError::field_not_found(id))?;
        let removed = self.fields.remove(position);
        self.repack();
        debug!(field_id = id, remaining = self.fields.len(), "removed field");
        Ok(removed)
    }

    /// Move a field to `to_index` in display order and reassign `0..n-1`.
    pub fn reorder(&mut self, id: &str, to_index: usize) -> Result<()> {
        let mut ordered = std::mem::take(&mut self.fields);
        ordered.sort_by_key(|field| field.order);
        let Some(from) = ordered.iter().position(|field| field.id.as_str() == id) else {
            self.fields = ordered;
            return Err(EngineError::field_not_found(id));
        };
        if to_index >= ordered.len() {
            let len = ordered.len();
            self.fields = ordered;
            return Err(EngineError::IndexOutOfRange {
                index: to_index,
                len,
            });
        }
        self.fields = reorder(ordered, from, to_index)?;
        self.assign_dense_orders();
        debug!(field_id = id, from, to = to_index, "reordered field");
        Ok(())
    }

    /// Reassign `0..n-1` following the current display order.
    pub fn repack(&mut self) {
        self.fields.sort_by_key(|field| field.order);
        self.assign_dense_orders();
    }

    pub fn add_option(&mut self, id: &str, option: FieldOption) -> Result<()> {
        self.options_mut(id)?.push(option);
        Ok(())
    }

    pub fn remove_option(&mut self, id: &str, index: usize) -> Result<FieldOption> {
        let options = self.options_mut(id)?;
        if index >= options.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: options.len(),
            });
        }
        Ok(options.remove(index))
    }

    /// Reorder one field's options; array position is the option order.
    pub fn move_option(&mut self, id: &str, from: usize, to: usize) -> Result<()> {
        let options = self.options_mut(id)?;
        let len = options.len();
        if let Some(index) = [from, to].into_iter().find(|index| *index >= len) {
            return Err(EngineError::IndexOutOfRange { index, len });
        }
        *options = reorder(std::mem::take(options), from, to)?;
        Ok(())
    }

    fn options_mut(&mut self, id: &str) -> Result<&mut Vec<FieldOption>> {
        let field = self
            .get_mut(id)
            .ok_or_else(|| EngineError::field_not_found(id))?;
        if !field.field_type.has_options() {
            return Err(EngineError::OptionsNotSupported {
                id: id.to_string(),
                field_type: field.field_type.to_string(),
            });
        }
        Ok(field.options.get_or_insert_with(Vec::new))
    }

    /// Next order value: the current length for a dense collection.
    ///
    /// Saturates at `usize::MAX`; ties then fall back to stored position.
    fn next_order(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.order.saturating_add(1))
            .max()
            .unwrap_or(0)
            .max(self.fields.len())
    }

    fn assign_dense_orders(&mut self) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.order = index;
        }
    }

    fn fresh_id(&self) -> FieldId {
        loop {
            let id = FieldId::generate();
            if self.get(id.as_str()).is_none() {
                return id;
            }
        }
    }
}

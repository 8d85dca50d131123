//! Modifier document assembly.
//!
//! [`ModifierDocumentBuilder`] collects [`ModifierOp`]s for a single update call and
//! produces one [`ModifierDocument`], rejecting combinations the server would refuse.
//!
//! # Merge rules
//!
//! A field may only be targeted by one operator kind per update. Repeating the same kind
//! on the same field is resolved per kind:
//!
//! | Kind                  | Repeated on the same field            |
//! |-----------------------|---------------------------------------|
//! | `Increment`           | deltas are summed; Int64 overflow is [`DocwireError::InvalidDocument`] |
//! | `Set`                 | last value wins                       |
//! | `PushAll`, `PullAll`  | elements are appended in call order   |
//! | `PopFirst`, `PopLast` | no change                             |
//! | `Push`, `AddToSet`, `Pull` | [`DocwireError::ConflictingModifier`] |
//!
//! Dotted paths that overlap, such as `Author` and `Author.Name`, conflict regardless of
//! kind.

use std::collections::HashMap;

use bson::{Bson, Document};
use serde::Serialize;

use crate::{
    error::{DocwireError, DocwireResult},
    modifier::{Modifier, ModifierKind, ModifierOp},
};

/// The finished update document, keyed by operator token.
///
/// Serializes as the bare BSON document, e.g. `{ "$inc": { "Score": 2 } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModifierDocument(Document);

impl ModifierDocument {
    /// Builds a document from anonymous `(field, modifier)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DocwireError::ConflictingModifier`] if two pairs cannot share one update.
    pub fn from_pairs<I, F>(pairs: I) -> DocwireResult<Self>
    where
        I: IntoIterator<Item = (F, Modifier)>,
        F: Into<String>,
    {
        let mut builder = ModifierDocumentBuilder::new();
        for (field, modifier) in pairs {
            builder.add(modifier.on(field))?;
        }
        builder.build()
    }

    /// Returns `true` if the document carries no operators.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the `field -> operand` mapping for `kind`'s operator, if present.
    pub fn get(&self, kind: ModifierKind) -> Option<&Document> {
        self.0.get_document(kind.operator()).ok()
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

impl From<ModifierDocument> for Document {
    fn from(document: ModifierDocument) -> Self {
        document.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    Empty,
    Accumulating,
    Built,
}

/// Accumulates modifier operations for exactly one update call.
#[derive(Debug)]
pub struct ModifierDocumentBuilder {
    state: BuilderState,
    entries: Vec<(String, Modifier)>,
    index: HashMap<String, usize>,
}

impl Default for ModifierDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModifierDocumentBuilder {
    pub fn new() -> Self {
        Self {
            state: BuilderState::Empty,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns `true` once [`build`](Self::build) has been called.
    pub fn is_built(&self) -> bool {
        self.state == BuilderState::Built
    }

    /// Adds one operation to the pending update.
    ///
    /// # Errors
    ///
    /// - [`DocwireError::BuilderFinalized`] if the builder has already been built.
    /// - [`DocwireError::ConflictingModifier`] if the field, or an overlapping dotted path,
    ///   already carries an incompatible operator.
    /// - [`DocwireError::InvalidDocument`] if an increment carries a non-numeric delta.
    pub fn add(&mut self, op: ModifierOp) -> DocwireResult<()> {
        if self.state == BuilderState::Built {
            return Err(DocwireError::BuilderFinalized);
        }

        let (field, modifier) = op.into_parts();

        if let Modifier::Inc(delta) = &modifier {
            if !is_numeric(delta) {
                return Err(DocwireError::InvalidDocument(format!(
                    "$inc on {field} requires a numeric delta"
                )));
            }
        }

        match self.index.get(&field) {
            Some(&position) => {
                let existing = &mut self.entries[position].1;
                merge(&field, existing, modifier)?;
            }
            None => {
                self.check_overlap(&field, modifier.kind())?;
                tracing::trace!(field = %field, operator = %modifier.kind(), "Accepted modifier");
                self.index.insert(field.clone(), self.entries.len());
                self.entries.push((field, modifier));
            }
        }

        self.state = BuilderState::Accumulating;

        Ok(())
    }

    /// Finalizes the builder and returns the update document.
    ///
    /// An empty builder yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`DocwireError::BuilderFinalized`] if called a second time.
    pub fn build(&mut self) -> DocwireResult<ModifierDocument> {
        if self.state == BuilderState::Built {
            return Err(DocwireError::BuilderFinalized);
        }
        self.state = BuilderState::Built;
        self.index.clear();

        let mut document = Document::new();
        for (field, modifier) in self.entries.drain(..) {
            let operator = modifier.kind().operator();
            let operand = modifier.operand();

            if let Some(Bson::Document(fields)) = document.get_mut(operator) {
                fields.insert(field, operand);
            } else {
                let mut fields = Document::new();
                fields.insert(field, operand);
                document.insert(operator, fields);
            }
        }

        tracing::debug!(operators = document.len(), "Built modifier document");

        Ok(ModifierDocument(document))
    }

    fn check_overlap(&self, field: &str, attempted: ModifierKind) -> DocwireResult<()> {
        match self
            .entries
            .iter()
            .find(|(existing, _)| is_path_prefix(existing, field) || is_path_prefix(field, existing))
        {
            Some((existing, modifier)) => Err(DocwireError::ConflictingModifier {
                field: format!("{existing} / {field}"),
                existing: modifier.kind().label(),
                attempted: attempted.label(),
            }),
            None => Ok(()),
        }
    }
}

fn merge(field: &str, existing: &mut Modifier, incoming: Modifier) -> DocwireResult<()> {
    let conflict = |existing: &Modifier, incoming: &Modifier| DocwireError::ConflictingModifier {
        field: field.to_string(),
        existing: existing.kind().label(),
        attempted: incoming.kind().label(),
    };

    match (&mut *existing, incoming) {
        (Modifier::Inc(total), Modifier::Inc(delta)) => *total = add_numeric(field, total, &delta)?,
        (Modifier::Set(value), Modifier::Set(next)) => *value = next,
        (Modifier::PushAll(values), Modifier::PushAll(more))
        | (Modifier::PullAll(values), Modifier::PullAll(more)) => values.extend(more),
        (Modifier::PopFirst, Modifier::PopFirst) | (Modifier::PopLast, Modifier::PopLast) => {}
        (existing, incoming) => return Err(conflict(existing, &incoming)),
    }

    tracing::trace!(field = %field, operator = %existing.kind(), "Merged repeated modifier");

    Ok(())
}

/// Returns `true` if `prefix` is a strict dotted ancestor of `path`.
fn is_path_prefix(prefix: &str, path: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('.'))
}

fn is_numeric(value: &Bson) -> bool {
    matches!(value, Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_))
}

/// Sums two increment deltas.
///
/// Int32 overflow widens to Int64. Int64 overflow is rejected rather than rounded to a
/// Double, since that would change the delta sent to the server.
fn add_numeric(field: &str, lhs: &Bson, rhs: &Bson) -> DocwireResult<Bson> {
    match (lhs, rhs) {
        (Bson::Int32(a), Bson::Int32(b)) => Ok(a
            .checked_add(*b)
            .map(Bson::Int32)
            .unwrap_or_else(|| Bson::Int64(i64::from(*a) + i64::from(*b)))),
        (Bson::Int32(_) | Bson::Int64(_), Bson::Int32(_) | Bson::Int64(_)) => as_i64(lhs)
            .checked_add(as_i64(rhs))
            .map(Bson::Int64)
            .ok_or_else(|| {
                DocwireError::InvalidDocument(format!("summed $inc delta on {field} overflows Int64"))
            }),
        _ => Ok(Bson::Double(as_f64(lhs) + as_f64(rhs))),
    }
}

fn as_i64(value: &Bson) -> i64 {
    match value {
        Bson::Int32(v) => i64::from(*v),
        Bson::Int64(v) => *v,
        _ => 0,
    }
}

fn as_f64(value: &Bson) -> f64 {
    match value {
        Bson::Int32(v) => f64::from(*v),
        Bson::Int64(v) => *v as f64,
        Bson::Double(v) => *v,
        _ => 0.0,
    }
}

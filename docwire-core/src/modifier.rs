//! Update modifier operations.
//!
//! A [`Modifier`] is one update operator together with its operand, detached from any
//! field. Pairing it with a field name yields a [`ModifierOp`], the unit consumed by
//! [`ModifierDocumentBuilder`](crate::update::ModifierDocumentBuilder).
//!
//! Modifiers are usually built through the [`M`] factory functions:
//!
//! ```ignore
//! use docwire::modifier::M;
//!
//! let update = ModifierDocument::from_pairs([
//!     ("Score", M::inc(2)),
//!     ("Title", M::set("ss")),
//! ])?;
//! ```

use std::fmt;

use bson::Bson;

/// The kind of an update operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// Adds a numeric delta to a field.
    Increment,
    /// Replaces a field's value.
    Set,
    /// Appends one element to an array field.
    Push,
    /// Appends several elements to an array field.
    PushAll,
    /// Appends one element to an array field unless already present.
    AddToSet,
    /// Removes every occurrence of one element from an array field.
    Pull,
    /// Removes every occurrence of several elements from an array field.
    PullAll,
    /// Removes the first element of an array field.
    PopFirst,
    /// Removes the last element of an array field.
    PopLast,
}

impl ModifierKind {
    /// Returns the wire operator token for this kind.
    ///
    /// `PopFirst` and `PopLast` share `$pop` and are told apart by operand.
    pub fn operator(self) -> &'static str {
        match self {
            ModifierKind::Increment => "$inc",
            ModifierKind::Set => "$set",
            ModifierKind::Push => "$push",
            ModifierKind::PushAll => "$pushAll",
            ModifierKind::AddToSet => "$addToSet",
            ModifierKind::Pull => "$pull",
            ModifierKind::PullAll => "$pullAll",
            ModifierKind::PopFirst | ModifierKind::PopLast => "$pop",
        }
    }

    /// Returns a human-readable label, distinguishing the two `$pop` forms.
    pub(crate) fn label(self) -> &'static str {
        match self {
            ModifierKind::PopFirst => "$pop (first)",
            ModifierKind::PopLast => "$pop (last)",
            kind => kind.operator(),
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric types accepted as increment deltas.
pub trait Numeric: Into<Bson> + Copy {}

impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for f64 {}

/// An update operator carrying its operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// `$inc` by a numeric delta.
    Inc(Bson),
    /// `$set` to a value.
    Set(Bson),
    /// `$push` one element.
    Push(Bson),
    /// `$pushAll` a sequence of elements.
    PushAll(Vec<Bson>),
    /// `$addToSet` one element.
    AddToSet(Bson),
    /// `$pull` one element.
    Pull(Bson),
    /// `$pullAll` a sequence of elements.
    PullAll(Vec<Bson>),
    /// `$pop` the first element.
    PopFirst,
    /// `$pop` the last element.
    PopLast,
}

impl Modifier {
    /// Returns the kind of this modifier.
    pub fn kind(&self) -> ModifierKind {
        match self {
            Modifier::Inc(_) => ModifierKind::Increment,
            Modifier::Set(_) => ModifierKind::Set,
            Modifier::Push(_) => ModifierKind::Push,
            Modifier::PushAll(_) => ModifierKind::PushAll,
            Modifier::AddToSet(_) => ModifierKind::AddToSet,
            Modifier::Pull(_) => ModifierKind::Pull,
            Modifier::PullAll(_) => ModifierKind::PullAll,
            Modifier::PopFirst => ModifierKind::PopFirst,
            Modifier::PopLast => ModifierKind::PopLast,
        }
    }

    /// Returns the operand as it appears on the wire.
    pub fn operand(&self) -> Bson {
        match self {
            Modifier::Inc(value)
            | Modifier::Set(value)
            | Modifier::Push(value)
            | Modifier::AddToSet(value)
            | Modifier::Pull(value) => value.clone(),
            Modifier::PushAll(values) | Modifier::PullAll(values) => Bson::Array(values.clone()),
            Modifier::PopFirst => Bson::Int32(-1),
            Modifier::PopLast => Bson::Int32(1),
        }
    }

    /// Applies this modifier to `field`.
    pub fn on(self, field: impl Into<String>) -> ModifierOp {
        ModifierOp::new(field, self)
    }
}

/// One update operator applied to one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierOp {
    field: String,
    modifier: Modifier,
}

impl ModifierOp {
    pub fn new(field: impl Into<String>, modifier: Modifier) -> Self {
        Self { field: field.into(), modifier }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    pub fn kind(&self) -> ModifierKind {
        self.modifier.kind()
    }

    pub fn into_parts(self) -> (String, Modifier) {
        (self.field, self.modifier)
    }
}

/// Factory functions for [`Modifier`] values.
pub struct M;

impl M {
    /// Increments a field by `delta`.
    pub fn inc<N: Numeric>(delta: N) -> Modifier {
        Modifier::Inc(delta.into())
    }

    /// Sets a field to `value`.
    pub fn set(value: impl Into<Bson>) -> Modifier {
        Modifier::Set(value.into())
    }

    /// Pushes `value` onto an array field.
    pub fn push(value: impl Into<Bson>) -> Modifier {
        Modifier::Push(value.into())
    }

    /// Pushes every element of `values` onto an array field, in order.
    pub fn push_all<I>(values: I) -> Modifier
    where
        I: IntoIterator,
        I::Item: Into<Bson>,
    {
        Modifier::PushAll(values.into_iter().map(Into::into).collect())
    }

    /// Adds `value` to an array field unless it is already present.
    pub fn add_to_set(value: impl Into<Bson>) -> Modifier {
        Modifier::AddToSet(value.into())
    }

    /// Removes every occurrence of `value` from an array field.
    pub fn pull(value: impl Into<Bson>) -> Modifier {
        Modifier::Pull(value.into())
    }

    /// Removes every occurrence of each element of `values` from an array field.
    pub fn pull_all<I>(values: I) -> Modifier
    where
        I: IntoIterator,
        I::Item: Into<Bson>,
    {
        Modifier::PullAll(values.into_iter().map(Into::into).collect())
    }

    /// Removes the first element of an array field.
    pub fn pop_first() -> Modifier {
        Modifier::PopFirst
    }

    /// Removes the last element of an array field.
    pub fn pop_last() -> Modifier {
        Modifier::PopLast
    }
}

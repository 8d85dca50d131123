//! Fluent, type-checked update construction.
//!
//! [`TypedUpdate`] accepts field selectors produced by an [`Entity`]'s accessors and
//! checks operand types at compile time: `inc` needs a numeric field, array operators
//! need an [`ArrayField`] and take values of its element type.
//!
//! ```ignore
//! use docwire::prelude::*;
//!
//! let mut update = TypedUpdate::<Post>::new();
//! update
//!     .inc(|p| p.score(), 2)?
//!     .set(|p| p.title(), "About the name")?
//!     .pull_all(|p| p.tags(), ["NoSql", "ABC"])?;
//! let document = update.build()?;
//! ```

use std::{fmt, marker::PhantomData};

use bson::{Bson, ser::serialize_to_bson};
use serde::Serialize;

use crate::{
    error::DocwireResult,
    field::{ArrayField, Entity, Selector},
    modifier::{Modifier, Numeric},
    update::{ModifierDocument, ModifierDocumentBuilder},
};

/// Builds one update document for entity `E` from typed field selectors.
pub struct TypedUpdate<E: Entity> {
    builder: ModifierDocumentBuilder,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> fmt::Debug for TypedUpdate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedUpdate")
            .field("entity", &std::any::type_name::<E>())
            .field("builder", &self.builder)
            .finish()
    }
}

impl<E: Entity> Default for TypedUpdate<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> TypedUpdate<E> {
    pub fn new() -> Self {
        Self {
            builder: ModifierDocumentBuilder::new(),
            _entity: PhantomData,
        }
    }

    /// Runs `configure` against a fresh update and builds the result.
    pub fn build_with<F>(configure: F) -> DocwireResult<ModifierDocument>
    where
        F: FnOnce(&mut Self) -> DocwireResult<()>,
    {
        let mut update = Self::new();
        configure(&mut update)?;
        update.build()
    }

    fn apply<T>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, T>,
        modifier: Modifier,
    ) -> DocwireResult<&mut Self> {
        let field = select(&E::fields()).resolve()?;
        self.builder.add(modifier.on(field))?;
        Ok(self)
    }

    /// Increments a numeric field by `delta`.
    pub fn inc<N: Numeric>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, N>,
        delta: N,
    ) -> DocwireResult<&mut Self> {
        self.apply(select, Modifier::Inc(delta.into()))
    }

    /// Sets a field to `value`.
    pub fn set<T: Serialize>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, T>,
        value: impl Into<T>,
    ) -> DocwireResult<&mut Self> {
        let value = to_bson(&value.into())?;
        self.apply(select, Modifier::Set(value))
    }

    /// Pushes one element onto an array field.
    pub fn push<C>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
        value: impl Into<C::Element>,
    ) -> DocwireResult<&mut Self>
    where
        C: ArrayField,
        C::Element: Serialize,
    {
        let value = to_bson(&value.into())?;
        self.apply(select, Modifier::Push(value))
    }

    /// Pushes every element of `values` onto an array field, in order.
    pub fn push_all<C, I>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
        values: I,
    ) -> DocwireResult<&mut Self>
    where
        C: ArrayField,
        C::Element: Serialize,
        I: IntoIterator,
        I::Item: Into<C::Element>,
    {
        let values = to_bson_all::<C::Element, _>(values)?;
        self.apply(select, Modifier::PushAll(values))
    }

    /// Adds one element to an array field unless already present.
    pub fn add_to_set<C>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
        value: impl Into<C::Element>,
    ) -> DocwireResult<&mut Self>
    where
        C: ArrayField,
        C::Element: Serialize,
    {
        let value = to_bson(&value.into())?;
        self.apply(select, Modifier::AddToSet(value))
    }

    /// Removes every occurrence of one element from an array field.
    pub fn pull<C>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
        value: impl Into<C::Element>,
    ) -> DocwireResult<&mut Self>
    where
        C: ArrayField,
        C::Element: Serialize,
    {
        let value = to_bson(&value.into())?;
        self.apply(select, Modifier::Pull(value))
    }

    /// Removes every occurrence of each element of `values` from an array field.
    pub fn pull_all<C, I>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
        values: I,
    ) -> DocwireResult<&mut Self>
    where
        C: ArrayField,
        C::Element: Serialize,
        I: IntoIterator,
        I::Item: Into<C::Element>,
    {
        let values = to_bson_all::<C::Element, _>(values)?;
        self.apply(select, Modifier::PullAll(values))
    }

    /// Removes the first element of an array field.
    pub fn pop_first<C: ArrayField>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
    ) -> DocwireResult<&mut Self> {
        self.apply(select, Modifier::PopFirst)
    }

    /// Removes the last element of an array field.
    pub fn pop_last<C: ArrayField>(
        &mut self,
        select: impl FnOnce(&E::Fields) -> Selector<E, C>,
    ) -> DocwireResult<&mut Self> {
        self.apply(select, Modifier::PopLast)
    }

    /// Finalizes the update. See [`ModifierDocumentBuilder::build`].
    pub fn build(&mut self) -> DocwireResult<ModifierDocument> {
        self.builder.build()
    }
}

fn to_bson<T: Serialize>(value: &T) -> DocwireResult<Bson> {
    Ok(serialize_to_bson(value)?)
}

fn to_bson_all<T, I>(values: I) -> DocwireResult<Vec<Bson>>
where
    T: Serialize,
    I: IntoIterator,
    I::Item: Into<T>,
{
    values
        .into_iter()
        .map(|value| to_bson(&value.into()))
        .collect()
}

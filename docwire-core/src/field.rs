//! Property-selecting expressions and field name resolution.
//!
//! Typed updates name their target field with a [`Selector`], a small expression tree
//! tagged with the entity type and the selected field's type. Selectors are normally
//! produced by the accessors that `#[derive(Entity)]` generates:
//!
//! ```ignore
//! use docwire::prelude::*;
//!
//! #[derive(Serialize, Entity)]
//! #[serde(rename_all = "PascalCase")]
//! struct Post {
//!     title: String,
//!     tags: Vec<String>,
//! }
//!
//! let selector = Post::fields().tags();
//! assert_eq!(selector.resolve()?, "Tags");
//! ```
//!
//! Only a direct member access on the entity resolves to a field name. Method calls,
//! arithmetic, constants and multi-hop member chains are rejected with
//! [`DocwireError::UnsupportedExpression`].

use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    fmt,
    marker::PhantomData,
};

use bson::Bson;

use crate::error::{DocwireError, DocwireResult};

/// Binary operators that may appear in a field expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        })
    }
}

/// An expression over an entity parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldExpr {
    /// The entity itself.
    Parameter,
    /// Access of a serialized member on `target`.
    Member {
        /// The expression the member is read from.
        target: Box<FieldExpr>,
        /// The member's serialized name.
        name: String,
    },
    /// A method call on `target`.
    Call {
        /// The receiver of the call.
        target: Box<FieldExpr>,
        /// The method name.
        method: String,
    },
    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<FieldExpr>,
        rhs: Box<FieldExpr>,
    },
    /// A constant value.
    Constant(Bson),
}

impl FieldExpr {
    /// Creates a member access on `target`.
    pub fn member(target: FieldExpr, name: impl Into<String>) -> Self {
        FieldExpr::Member { target: Box::new(target), name: name.into() }
    }
}

impl fmt::Display for FieldExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldExpr::Parameter => f.write_str("x"),
            FieldExpr::Member { target, name } => write!(f, "{target}.{name}"),
            FieldExpr::Call { target, method } => write!(f, "{target}.{method}()"),
            FieldExpr::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            FieldExpr::Constant(value) => write!(f, "{value}"),
        }
    }
}

/// Visitor over [`FieldExpr`] trees.
pub trait ExprVisitor {
    type Output;
    type Error: Into<DocwireError>;

    fn visit_parameter(&mut self) -> Result<Self::Output, Self::Error>;
    fn visit_member(&mut self, target: &FieldExpr, name: &str) -> Result<Self::Output, Self::Error>;
    fn visit_call(&mut self, target: &FieldExpr, method: &str) -> Result<Self::Output, Self::Error>;
    fn visit_binary(
        &mut self,
        op: BinaryOp,
        lhs: &FieldExpr,
        rhs: &FieldExpr,
    ) -> Result<Self::Output, Self::Error>;
    fn visit_constant(&mut self, value: &Bson) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &FieldExpr) -> Result<Self::Output, Self::Error> {
        match expr {
            FieldExpr::Parameter => self.visit_parameter(),
            FieldExpr::Member { target, name } => self.visit_member(target, name),
            FieldExpr::Call { target, method } => self.visit_call(target, method),
            FieldExpr::Binary { op, lhs, rhs } => self.visit_binary(*op, lhs, rhs),
            FieldExpr::Constant(value) => self.visit_constant(value),
        }
    }
}

/// Resolves a direct member access on the entity parameter to its field name.
pub struct FieldNameResolver;

impl ExprVisitor for FieldNameResolver {
    type Output = String;
    type Error = DocwireError;

    fn visit_parameter(&mut self) -> Result<Self::Output, Self::Error> {
        Err(DocwireError::UnsupportedExpression(
            "the entity itself is not a field".to_string(),
        ))
    }

    fn visit_member(&mut self, target: &FieldExpr, name: &str) -> Result<Self::Output, Self::Error> {
        match target {
            FieldExpr::Parameter => Ok(name.to_string()),
            _ => Err(DocwireError::UnsupportedExpression(format!(
                "{target}.{name} is not a direct member access"
            ))),
        }
    }

    fn visit_call(&mut self, target: &FieldExpr, method: &str) -> Result<Self::Output, Self::Error> {
        Err(DocwireError::UnsupportedExpression(format!(
            "method call {target}.{method}() cannot select a field"
        )))
    }

    fn visit_binary(
        &mut self,
        op: BinaryOp,
        lhs: &FieldExpr,
        rhs: &FieldExpr,
    ) -> Result<Self::Output, Self::Error> {
        Err(DocwireError::UnsupportedExpression(format!(
            "arithmetic ({lhs} {op} {rhs}) cannot select a field"
        )))
    }

    fn visit_constant(&mut self, value: &Bson) -> Result<Self::Output, Self::Error> {
        Err(DocwireError::UnsupportedExpression(format!(
            "constant {value} cannot select a field"
        )))
    }
}

/// A typed expression selecting a field of type `T` on entity `E`.
pub struct Selector<E, T> {
    expr: FieldExpr,
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Selector<E, T> {
    /// Selects the serialized member `name` of the entity.
    pub fn member(name: impl Into<String>) -> Self {
        Self::from_expr(FieldExpr::member(FieldExpr::Parameter, name))
    }

    /// Wraps an arbitrary expression. Resolution decides whether it is usable.
    pub fn from_expr(expr: FieldExpr) -> Self {
        Self { expr, _marker: PhantomData }
    }

    /// Chains a member access onto this selector.
    pub fn then<U>(self, name: impl Into<String>) -> Selector<E, U> {
        Selector::from_expr(FieldExpr::member(self.expr, name))
    }

    /// Chains a method call onto this selector.
    pub fn call<U>(self, method: impl Into<String>) -> Selector<E, U> {
        Selector::from_expr(FieldExpr::Call {
            target: Box::new(self.expr),
            method: method.into(),
        })
    }

    /// Combines this selector with a constant.
    pub fn binary(self, op: BinaryOp, rhs: impl Into<Bson>) -> Selector<E, T> {
        Selector::from_expr(FieldExpr::Binary {
            op,
            lhs: Box::new(self.expr),
            rhs: Box::new(FieldExpr::Constant(rhs.into())),
        })
    }

    pub fn expr(&self) -> &FieldExpr {
        &self.expr
    }

    /// Resolves this selector to the entity's serialized field name.
    ///
    /// # Errors
    ///
    /// Returns [`DocwireError::UnsupportedExpression`] unless the expression is a single
    /// member access on the entity.
    pub fn resolve(&self) -> DocwireResult<String> {
        FieldNameResolver.visit_expr(&self.expr)
    }
}

impl<E, T> Clone for Selector<E, T> {
    fn clone(&self) -> Self {
        Self::from_expr(self.expr.clone())
    }
}

impl<E, T> fmt::Debug for Selector<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.expr).finish()
    }
}

/// A type whose serialized fields can be selected with typed expressions.
///
/// Implement with `#[derive(Entity)]`.
pub trait Entity: Sized {
    /// Accessor type exposing one selector per serialized field.
    type Fields;

    fn fields() -> Self::Fields;
}

/// Collection types stored as BSON arrays.
pub trait ArrayField {
    type Element;
}

impl<T> ArrayField for Vec<T> {
    type Element = T;
}

impl<T> ArrayField for VecDeque<T> {
    type Element = T;
}

impl<T> ArrayField for BTreeSet<T> {
    type Element = T;
}

impl<T, S> ArrayField for HashSet<T, S> {
    type Element = T;
}

impl<T: ArrayField> ArrayField for Option<T> {
    type Element = T::Element;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Post;

    fn tags() -> Selector<Post, Vec<String>> {
        Selector::member("Tags")
    }

    #[test]
    fn test_direct_member_resolves() {
        assert_eq!(tags().resolve().unwrap(), "Tags");
    }

    #[test]
    fn test_multi_hop_chain_is_rejected() {
        let chained = Selector::<Post, ()>::member("Author").then::<String>("Name");
        assert_eq!(chained.expr().to_string(), "x.Author.Name");
        assert!(matches!(chained.resolve(), Err(DocwireError::UnsupportedExpression(_))));
    }

    #[test]
    fn test_method_call_is_rejected() {
        let count = tags().call::<usize>("len");
        assert!(matches!(count.resolve(), Err(DocwireError::UnsupportedExpression(_))));
    }

    #[test]
    fn test_arithmetic_is_rejected() {
        let score = Selector::<Post, i32>::member("Score").binary(BinaryOp::Add, 1);
        let err = score.resolve().unwrap_err();
        assert_eq!(
            err,
            DocwireError::UnsupportedExpression("arithmetic (x.Score + 1) cannot select a field".into())
        );
    }

    #[test]
    fn test_parameter_and_constant_are_rejected() {
        for expr in [FieldExpr::Parameter, FieldExpr::Constant(Bson::Int32(1))] {
            let selector = Selector::<Post, i32>::from_expr(expr);
            assert!(matches!(selector.resolve(), Err(DocwireError::UnsupportedExpression(_))));
        }
    }

    #[test]
    fn test_member_on_call_is_rejected() {
        let expr = FieldExpr::member(
            FieldExpr::Call { target: Box::new(FieldExpr::Parameter), method: "first".into() },
            "Text",
        );
        assert!(FieldNameResolver.visit_expr(&expr).is_err());
    }
}

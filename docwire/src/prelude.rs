//! Convenient re-exports of commonly used types from docwire.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docwire::prelude::*;
//! ```
//!
//! This provides access to:
//! - Connection configuration and option containers
//! - Modifiers, modifier documents and their builder
//! - Typed field selection and typed updates
//! - Error types

pub use docwire_core::{
    connection::{ConnectionConfig, ConnectionStrings, Credentials, Server},
    options::{OptionsContainer, apply_options},
    modifier::{M, Modifier, ModifierKind, ModifierOp, Numeric},
    update::{ModifierDocument, ModifierDocumentBuilder},
    field::{ArrayField, Entity, ExprVisitor, FieldExpr, Selector},
    typed::TypedUpdate,
    error::{DocwireError, DocwireResult},
};
pub use docwire_macros::Entity;

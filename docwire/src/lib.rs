//! Main docwire crate: typed update modifiers and connection configuration for
//! MongoDB-style document databases.
//!
//! This crate is the primary entry point for users of docwire. It re-exports the core
//! types from the sub-crates and, behind the `mongodb` feature, the driver adapter.
//!
//! # Features
//!
//! - **Connection strings** - Resolve `mongodb://` strings into immutable, validated configuration
//! - **Update modifiers** - Build `$inc`/`$set`/`$push`/... documents with conflict checking
//! - **Typed fields** - Select fields through `#[derive(Entity)]` accessors instead of strings
//! - **Driver adapter** - Hand the results to the official MongoDB driver (`mongodb` feature)
//!
//! # Quick Start
//!
//! ```ignore
//! use docwire::prelude::*;
//! use serde::Serialize;
//!
//! #[derive(Serialize, Entity)]
//! #[serde(rename_all = "PascalCase")]
//! pub struct Post {
//!     pub title: String,
//!     pub score: i32,
//!     pub tags: Vec<String>,
//! }
//!
//! fn main() -> DocwireResult<()> {
//!     let config = ConnectionConfig::resolve("mongodb://localhost/blog?strict=false")?;
//!     assert_eq!(config.database(), "blog");
//!
//!     // Typed: field names come from the entity's serde names
//!     let typed = TypedUpdate::<Post>::build_with(|op| {
//!         op.inc(|p| p.score(), 2)?.set(|p| p.title(), "About the name")?;
//!         Ok(())
//!     })?;
//!
//!     // Anonymous: field names are given directly
//!     let anonymous = ModifierDocument::from_pairs([
//!         ("Score", M::inc(2)),
//!         ("Title", M::set("About the name")),
//!     ])?;
//!
//!     assert_eq!(typed, anonymous);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docwire;

pub mod prelude;

pub use docwire_core::{connection, error, field, modifier, options, typed, update};
pub use docwire_macros::Entity;

// Re-export BSON types for convenience
pub use bson;

/// MongoDB driver adapter.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use docwire_mongodb::{ModifierExecutor, client_options, connect};
}

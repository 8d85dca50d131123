//! Core of the docwire project: the pieces of a MongoDB-style client that turn typed
//! application intent into protocol-level artifacts, without performing any I/O.
//!
//! This crate provides:
//!
//! - **Connection resolution** ([`connection`]) - Parses `mongodb://` connection strings
//!   into an immutable [`ConnectionConfig`](connection::ConnectionConfig)
//! - **Connection options** ([`options`]) - The whitelisted option table applied while resolving
//! - **Modifiers** ([`modifier`]) - Update operators and the [`M`](modifier::M) factories
//! - **Modifier documents** ([`update`]) - Conflict-checked assembly of `$inc`/`$set`/... documents
//! - **Field selection** ([`field`]) - Typed property-selecting expressions and their resolution
//! - **Typed updates** ([`typed`]) - A fluent update builder driven by field selectors
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docwire_core::{connection::ConnectionConfig, modifier::M, update::ModifierDocument};
//!
//! let config = ConnectionConfig::resolve("mongodb://localhost/blog?pooling=false")?;
//!
//! let update = ModifierDocument::from_pairs([
//!     ("Score", M::inc(2)),
//!     ("Title", M::set("About the name")),
//! ])?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as docwire_core;

pub mod connection;
pub mod error;
pub mod field;
pub mod modifier;
pub mod options;
pub mod typed;
pub mod update;

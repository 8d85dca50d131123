//! MongoDB transport adapter for docwire.
//!
//! This crate hands docwire's protocol artifacts to the official MongoDB driver, which
//! owns sockets, pooling and wire framing:
//!
//! - [`client_options`] / [`connect`] turn a resolved
//!   [`ConnectionConfig`](docwire_core::connection::ConnectionConfig) into a driver client
//! - [`ModifierExecutor`] sends a selector plus a
//!   [`ModifierDocument`](docwire_core::update::ModifierDocument) as an update command,
//!   or targets a single document by `_id` with `update_by_id`
//!
//! To use this adapter, include the `mongodb` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! docwire = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docwire::{prelude::*, mongodb::{connect, ModifierExecutor}};
//! use bson::{Bson, Document};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectionConfig::resolve("mongodb://localhost/blog?poolsize=10")?;
//!     let client = connect(&config)?;
//!     let posts = client.database(config.database()).collection::<Document>("posts");
//!
//!     let update = ModifierDocument::from_pairs([("Score", M::inc(2))])?;
//!     posts.update_by_id(Bson::Int32(1), update).await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docwire_mongodb;

pub mod client;
pub mod executor;

pub use client::{client_options, connect};
pub use executor::ModifierExecutor;

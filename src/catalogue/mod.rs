//! Catalogue module: the persisted fingerprint-to-locations mapping.
//!
//! # Architecture
//!
//! * [`data`]: the [`Catalogue`] and [`FileLocation`] entities and their
//!   in-memory operations (lookup, record, duplicate accounting).
//! * [`io`]: versioned JSON persistence with a structural round-trip
//!   guarantee.

pub mod data;
pub mod io;

pub use data::{Catalogue, FileLocation, CATALOGUE_VERSION};
pub use io::CatalogueError;

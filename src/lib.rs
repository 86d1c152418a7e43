//! Bayer designation lookup for stars by Henry Draper catalog number.
//!
//! A star's traditional Bayer name is a Greek letter within a constellation
//! ("Alpha Centauri", rendered α Cen). This crate embeds a small compressed
//! dataset of 1564 such designations, distilled offline from the BSC5P
//! bright star catalog, and resolves them against static Greek-letter and
//! IAU constellation tables. It is read-only: the catalog is parsed once on
//! first use and then shared, lock-free, for the life of the process.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`BayerCatalog`] loader, point lookup, positional iteration |
//! | [`tables`] | Static Greek-letter and constellation tables, [`resolve`](tables::resolve) |
//! | [`error`] | [`BayerError`] corruption variants |
//!
//! # Quick Start
//!
//! ```
//! use celestial_bayer::BayerCatalog;
//!
//! let catalog = BayerCatalog::embedded().expect("embedded dataset is valid");
//!
//! // Sirius, HD 48915, is Alpha Canis Majoris.
//! let name = catalog.lookup(48915).unwrap();
//! assert_eq!(name.constellation, "CMa");
//! assert_eq!(name.bayer_index, 1);
//!
//! // Most stars have no Bayer designation; that is not an error.
//! assert!(catalog.lookup(1).is_none());
//! ```
//!
//! # Dataset
//!
//! The compiled-in container is a 4-byte little-endian size prefix followed
//! by a zlib stream of fixed 8-byte records. It is produced by an external
//! generator tool and consumed here as an opaque resource; a container that
//! fails validation in any way is rejected wholesale rather than served
//! partially.

pub mod catalog;
pub mod error;
pub mod tables;

pub use catalog::{BayerCatalog, BayerEntry, BayerName, BayerRecord, Entries};
pub use error::{BayerError, Result};
pub use tables::{Designation, GreekLetter};

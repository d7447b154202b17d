//! Cone selection and inspection of phoSim instance catalogs.
//!
//! An instance catalog is a plain text file of header commands followed by
//! `object` records, each giving an identifier, right ascension and
//! declination in degrees, then source properties. This crate filters such
//! files down to the objects inside a cone on the sky, streaming the input
//! once and copying every kept line unchanged.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`CatalogLine`](catalog::CatalogLine) classification, header commands, [`summarize`](catalog::summarize) |
//! | [`select`] | [`sky_cone_select`](select::sky_cone_select), [`ConeSelector`](select::ConeSelector), [`SelectionStats`](select::SelectionStats) |
//! | [`split`] | [`split_catalog`](split::split_catalog): header file plus fixed-size object chunks |
//! | [`error`] | [`InstcatError`] |
//!
//! # Quick Start
//!
//! ```no_run
//! use instcat_tools::select::{ConeQuery, ConeSelector, MalformedLinePolicy};
//! use instcat_core::SeparationMethod;
//!
//! let stats = ConeSelector::new(ConeQuery::new(53.0449009, -27.3220807, 0.1))
//!     .with_metric(SeparationMethod::Haversine)
//!     .with_policy(MalformedLinePolicy::Skip)
//!     .select_file("instcat.txt", "instcat_cone.txt")?;
//!
//! println!("{}", stats);
//! # Ok::<(), instcat_tools::InstcatError>(())
//! ```
//!
//! # Features
//!
//! - **`cli`** (default): builds the `instcat` binary.

pub mod catalog;
pub mod error;
pub mod select;
pub mod split;

pub use error::{InstcatError, Result};
pub use select::{sky_cone_select, SelectionStats};

//! Cone selection over instance catalogs.
//!
//! - [`cone`]: [`ConeQuery`], [`ConeSelector`], [`sky_cone_select`]
//! - [`stats`]: [`SelectionStats`] reported by every pass

pub mod cone;
pub(crate) mod output;
pub mod stats;

pub use cone::{sky_cone_select, ConeQuery, ConeSelector, MalformedLinePolicy};
pub use stats::SelectionStats;

//! Angles, sky positions and great-circle separation.
//!
//! This crate holds the geometry behind instance catalog filtering. It has no
//! I/O: catalog reading and cone selection live in `instcat-tools`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] value type, normalization, parsing of decimal / HMS / DMS text |
//! | [`math`] | Raw spherical trigonometry kernels (Vincenty, haversine) |
//! | [`separation`] | [`SkyPosition`], the [`SeparationMetric`] trait and [`angular_separation`] |
//! | [`constants`] | Unit conversion constants |
//! | [`errors`] | [`CoreError`] |
//!
//! # Quick Start
//!
//! ```
//! use instcat_core::angular_separation;
//!
//! let sep = angular_separation(10.0, 20.0, 10.0, 21.0);
//! assert!((sep - 1.0).abs() < 1e-12);
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod separation;

pub use angle::Angle;
pub use errors::{CoreError, CoreResult};
pub use separation::{
    angular_separation, FlatSky, Haversine, SeparationMethod, SeparationMetric, SkyPosition,
    Vincenty,
};

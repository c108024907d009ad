//! Concrete output media.

#[cfg(feature = "embedded-graphics")]
pub mod raster;
pub mod svg;

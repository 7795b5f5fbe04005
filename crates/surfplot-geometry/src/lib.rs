//! surfplot geometry: parametric surfaces and the square/disk domain adapters.

pub mod surface;

pub use surface::Surface;

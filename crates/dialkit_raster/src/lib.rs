//! Pixel-level building blocks for dialkit icon composition
//!
//! This crate owns the dense buffer types (`Canvas`, `Mask`), radial
//! gradient synthesis, alpha-stencil compositing, and the geometric
//! drawing primitives (lines, circles, arcs) the icon composer layers
//! together. Everything here is CPU-side, deterministic, and square:
//! icons are always N x N.

mod canvas;
mod color;
mod draw;
mod error;
mod gradient;

pub use canvas::{Canvas, Mask};
pub use color::Color;
pub use draw::radial_point;
pub use error::RasterError;
pub use gradient::radial_gradient;

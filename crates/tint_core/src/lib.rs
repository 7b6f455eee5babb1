//! Tint Core Primitives
//!
//! Foundational types shared by every Tint crate. Today that is the
//! [`Color`] type that palettes and themes hand out to UI code.

pub mod color;

pub use color::Color;

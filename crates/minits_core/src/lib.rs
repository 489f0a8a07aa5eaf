//! minits_core: shared primitives for the minits compiler.
//!
//! Currently this is just source-position tracking; every other crate in
//! the workspace reports locations in terms of [`text::Position`].

pub mod text;

pub use text::Position;

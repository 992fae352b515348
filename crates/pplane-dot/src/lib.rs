//! DOT-style rendering of a projective plane incidence structure.
//!
//! Each point becomes a vertex statement and each line becomes one
//! hyphen-chained path over its incident point ids, optionally annotated
//! with a display color cycled from a fixed palette.

mod palette;
mod render;

pub use palette::{color_for, PALETTE};
pub use render::{render_dot, DotConfig};

//! Noise displacement: moves each vertex along its normal by two drifting
//! OpenSimplex layers plus a breathing term, pushes vertices away from the
//! pointer, and derives the vertex color.

mod function;
mod shading;
mod types;

pub use function::*;
pub use shading::{mix, smoothstep};
pub use types::*;

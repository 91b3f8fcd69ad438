//! Render surface management and the wgpu backend behind it.

mod backend;
mod manager;
mod pipeline;
pub mod readback;
mod wgpu_backend;

pub use backend::*;
pub use manager::*;
pub use pipeline::FieldPipeline;
pub use wgpu_backend::*;

#[cfg(test)]
mod tests;

use crate::gpu::RendererError;

/// Errors surfaced by mounting and driving a visual.
#[derive(Debug, thiserror::Error)]
pub enum VisualError {
    #[error("render surface initialization failed: {0}")]
    Initialization(#[source] RendererError),

    #[error("visual is already attached")]
    AlreadyAttached,

    #[error("container has no area ({width}x{height})")]
    EmptyContainer { width: u32, height: u32 },

    #[error("render error: {0}")]
    Renderer(#[from] RendererError),
}

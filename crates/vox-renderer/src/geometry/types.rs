//! Geometry field types and the per-frame GPU vertex record.

/// How the field is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// One screen-facing sprite per vertex.
    Points,
    /// Indexed triangle list.
    Triangles,
}

/// How to build a field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometrySpec {
    /// Fibonacci-distributed points on a sphere shell.
    PointCloud {
        count: u32,
        radius: f32,
        /// Each point picks one of the two colors at random.
        palette: [[f32; 3]; 2],
        /// Sprite size range in pixels, `[min, max)`.
        size_range: (f32, f32),
    },
    /// UV-parameterized sphere mesh.
    UvSphere { segments: u32, radius: f32 },
}

/// Immutable base geometry plus per-vertex attributes.
///
/// All attribute arrays are indexed identically: vertex `i` owns
/// `positions[3i..3i+3]`, `normals[3i..3i+3]`, `uvs[2i..2i+2]`,
/// `colors[3i..3i+3]`, `sizes[i]` and `randoms[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryField {
    pub topology: Topology,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub colors: Vec<f32>,
    pub sizes: Vec<f32>,
    pub randoms: Vec<f32>,
    /// Triangle indices; empty for point clouds.
    pub indices: Vec<u32>,
}

/// Everything the displacement function needs about one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInput {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub size: f32,
    pub random_phase: f32,
}

impl GeometryField {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Gather the attributes of vertex `i`.
    ///
    /// Panics if `i >= self.len()`.
    pub fn vertex(&self, i: usize) -> VertexInput {
        VertexInput {
            position: [
                self.positions[i * 3],
                self.positions[i * 3 + 1],
                self.positions[i * 3 + 2],
            ],
            normal: [
                self.normals[i * 3],
                self.normals[i * 3 + 1],
                self.normals[i * 3 + 2],
            ],
            color: [
                self.colors[i * 3],
                self.colors[i * 3 + 1],
                self.colors[i * 3 + 2],
            ],
            size: self.sizes[i],
            random_phase: self.randoms[i],
        }
    }

    /// Iterate over every vertex in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexInput> + '_ {
        (0..self.len()).map(move |i| self.vertex(i))
    }

    /// True when every attribute array matches the vertex count.
    pub fn attributes_aligned(&self) -> bool {
        let n = self.len();
        self.positions.len() == n * 3
            && self.normals.len() == n * 3
            && self.uvs.len() == n * 2
            && self.colors.len() == n * 3
            && self.randoms.len() == n
            && self.indices.iter().all(|&i| (i as usize) < n)
    }
}

/// Per-frame vertex record uploaded to the GPU.
///
/// Layout: position(vec3) + size(f32) + color(vec3) + alpha(f32) = 32 bytes.
/// Drawn per-instance for point sprites and per-vertex for meshes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub alpha: f32,
}

impl FieldVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
        // position: vec3<f32> at offset 0
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        // size: f32 at offset 12
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32,
            offset: 12,
            shader_location: 1,
        },
        // color: vec3<f32> at offset 16
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 16,
            shader_location: 2,
        },
        // alpha: f32 at offset 28
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32,
            offset: 28,
            shader_location: 3,
        },
    ];

    /// Buffer layout when each record is one point sprite.
    pub const INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<FieldVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &Self::ATTRIBUTES,
    };

    /// Buffer layout when each record is one mesh vertex.
    pub const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<FieldVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &Self::ATTRIBUTES,
    };
}

// =============================================================================
// Tests
// =============================================================================

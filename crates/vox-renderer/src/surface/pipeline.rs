//! wgpu render pipeline for the displaced field.
//!
//! Point clouds draw one instanced six-vertex quad per [`FieldVertex`];
//! meshes draw an indexed, depth-tested triangle list. Both read
//! [`ViewUniforms`] from bind group 0.

use wgpu::util::DeviceExt;

use crate::geometry::{FieldVertex, Topology};
use crate::gpu::{PhysicalSize, ViewUniforms};

/// Vertices per point sprite (two triangles).
const QUAD_VERTICES: u32 = 6;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth buffer format for `topology`. Point sprites blend without one.
pub fn depth_format(topology: Topology) -> Option<wgpu::TextureFormat> {
    match topology {
        Topology::Points => None,
        Topology::Triangles => Some(DEPTH_FORMAT),
    }
}

struct DepthTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTarget {
    fn new(device: &wgpu::Device, size: PhysicalSize) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("mesh depth"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Manages the wgpu pipeline and buffers for one geometry field.
pub struct FieldPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub topology: Topology,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub vertex_buffer: wgpu::Buffer,
    /// Capacity of `vertex_buffer` in records.
    vertex_capacity: usize,
    vertex_count: u32,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
    depth: Option<DepthTarget>,
}

impl FieldPipeline {
    /// Create the pipeline for `topology`, targeting `format`.
    ///
    /// `indices` is uploaded once for meshes and ignored for point clouds.
    /// Meshes also get a depth buffer of `size`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        topology: Topology,
        indices: &[u32],
        size: PhysicalSize,
    ) -> Self {
        let (label, source, buffer_layout) = match topology {
            Topology::Points => (
                "points",
                include_str!("../shaders/points.wgsl"),
                FieldVertex::INSTANCE_LAYOUT,
            ),
            Topology::Triangles => (
                "mesh",
                include_str!("../shaders/mesh.wgsl"),
                FieldVertex::VERTEX_LAYOUT,
            ),
        };

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("view uniforms"),
            size: std::mem::size_of::<ViewUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("view bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<ViewUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("view bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let cull_mode = match topology {
            Topology::Points => None,
            Topology::Triangles => Some(wgpu::Face::Back),
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[buffer_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                ..Default::default()
            },
            depth_stencil: depth_format(topology).map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = create_vertex_buffer(device, 1);

        let (index_buffer, index_count) = match topology {
            Topology::Triangles if !indices.is_empty() => {
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh index buffer"),
                    contents: bytemuck::cast_slice(indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                (Some(buffer), indices.len() as u32)
            }
            _ => (None, 0),
        };

        Self {
            pipeline,
            topology,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: 1,
            vertex_count: 0,
            index_buffer,
            index_count,
            depth: depth_format(topology).map(|_| DepthTarget::new(device, size)),
        }
    }

    /// Recreate the depth buffer to match a resized color target.
    pub fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize) {
        if let Some(depth) = self.depth.as_mut() {
            depth.texture.destroy();
            *depth = DepthTarget::new(device, size);
        }
    }

    /// Upload this frame's uniforms and vertex records, growing the vertex
    /// buffer when needed.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        uniforms: &ViewUniforms,
        vertices: &[FieldVertex],
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        if vertices.len() > self.vertex_capacity {
            self.vertex_buffer.destroy();
            self.vertex_buffer = create_vertex_buffer(device, vertices.len());
            self.vertex_capacity = vertices.len();
            tracing::debug!(capacity = vertices.len(), "Grew field vertex buffer");
        }
        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.vertex_count = vertices.len() as u32;
    }

    /// Record a render pass that clears `view` and draws the field.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("field pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: self.depth.as_ref().map(|depth| {
                wgpu::RenderPassDepthStencilAttachment {
                    view: &depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.vertex_count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        match (&self.topology, &self.index_buffer) {
            (Topology::Points, _) => pass.draw(0..QUAD_VERTICES, 0..self.vertex_count),
            (Topology::Triangles, Some(indices)) => {
                pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
            (Topology::Triangles, None) => pass.draw(0..self.vertex_count, 0..1),
        }
    }

    /// Free GPU buffers ahead of drop.
    pub fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.uniform_buffer.destroy();
        if let Some(indices) = &self.index_buffer {
            indices.destroy();
        }
        if let Some(depth) = &self.depth {
            depth.texture.destroy();
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, records: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("field vertex buffer"),
        size: (records.max(1) * std::mem::size_of::<FieldVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

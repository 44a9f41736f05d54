use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::device::DepthBuffer;
use crate::math;
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{Program, ProgramModules, ShaderError, UniformBinding};

/// The square's corners in triangle-strip order, in model space.
pub const SQUARE_VERTICES: [[f32; 3]; 4] = [
    [50.0, 50.0, -250.0],
    [-50.0, 50.0, -250.0],
    [50.0, -50.0, -250.0],
    [-50.0, -50.0, -250.0],
];

/// Vertex input the program must declare for the square's positions.
pub const POSITION_ATTRIBUTE: &str = "vertexPosition";

/// Uniform the program must declare for the transform.
pub const TRANSFORM_UNIFORM: &str = "transform";

/// Required type of [`TRANSFORM_UNIFORM`].
pub const TRANSFORM_TYPE: &str = "mat4x4<f32>";

const TRANSFORM_SIZE: u64 = std::mem::size_of::<[f32; 16]>() as u64;

/// Draws one static square with a caller-supplied transform.
///
/// GPU objects are created on first draw and rebuilt if the surface format
/// changes. The vertex buffer is written once and never updated.
pub struct SquareRenderer {
    program: Program,
    position_location: u32,
    transform_binding: UniformBinding,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    /// Bind groups for every slot up to the transform's group; lower slots
    /// are empty.
    bind_groups: Vec<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
}

impl SquareRenderer {
    /// Prepares a renderer for `program`.
    ///
    /// Fails if the program lacks the position attribute or a
    /// `mat4x4<f32>` transform uniform, or if it uses any other resource.
    pub fn new(program: Program) -> Result<Self, ShaderError> {
        let position_location =
            program
                .attrib_location(POSITION_ATTRIBUTE)
                .ok_or_else(|| ShaderError::MissingAttribute {
                    name: POSITION_ATTRIBUTE.to_string(),
                })?;

        let transform_binding =
            program
                .uniform_binding(TRANSFORM_UNIFORM)
                .ok_or_else(|| ShaderError::MissingUniform {
                    name: TRANSFORM_UNIFORM.to_string(),
                })?;

        let found = program.uniform_type(TRANSFORM_UNIFORM).unwrap_or_default();
        if found != TRANSFORM_TYPE {
            return Err(ShaderError::UniformType {
                name: TRANSFORM_UNIFORM.to_string(),
                expected: TRANSFORM_TYPE.to_string(),
                found: found.to_string(),
            });
        }

        // The pipeline layout only holds the transform.
        if let Some(extra) = program.resources().find(|r| {
            !(r.uniform
                && r.binding == transform_binding
                && r.name.as_deref() == Some(TRANSFORM_UNIFORM))
        }) {
            return Err(ShaderError::UnsupportedBinding {
                name: extra.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
                group: extra.binding.group,
                binding: extra.binding.binding,
            });
        }

        Ok(Self {
            program,
            position_location,
            transform_binding,
            pipeline_format: None,
            pipeline: None,
            bind_groups: Vec::new(),
            transform_ubo: None,
            vertex_buffer: None,
        })
    }

    pub fn position_location(&self) -> u32 {
        self.position_location
    }

    pub fn transform_binding(&self) -> UniformBinding {
        self.transform_binding
    }

    /// Uploads `transform` and draws the square into `target`.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, transform: Mat4) {
        self.ensure_vertex_buffer(ctx);
        self.ensure_pipeline(ctx);

        let Some(ubo) = self.transform_ubo.as_ref() else { return };
        ctx.queue
            .write_buffer(ubo, 0, bytemuck::cast_slice(&math::to_uniform(transform)));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vbo) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera square pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        for (index, group) in self.bind_groups.iter().enumerate() {
            rpass.set_bind_group(index as u32, group, &[]);
        }
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..SQUARE_VERTICES.len() as u32, 0..1);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_some() {
            return;
        }

        self.vertex_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessera square vbo"),
            contents: bytemuck::cast_slice(&SQUARE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let ProgramModules {
            vertex,
            vertex_entry,
            fragment,
            fragment_entry,
        } = self.program.create_modules(ctx.device);

        let transform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera transform ubo"),
            size: TRANSFORM_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let empty_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessera empty bgl"),
                entries: &[],
            });

        let transform_bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessera transform bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: self.transform_binding.binding,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(TRANSFORM_SIZE),
                    },
                    count: None,
                }],
            });

        let group = self.transform_binding.group as usize;
        let layouts: Vec<&wgpu::BindGroupLayout> = (0..=group)
            .map(|i| if i == group { &transform_bgl } else { &empty_bgl })
            .collect();

        let bind_groups: Vec<wgpu::BindGroup> = (0..=group)
            .map(|i| {
                if i == group {
                    ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                        label: Some("tessera transform bind group"),
                        layout: &transform_bgl,
                        entries: &[wgpu::BindGroupEntry {
                            binding: self.transform_binding.binding,
                            resource: transform_ubo.as_entire_binding(),
                        }],
                    })
                } else {
                    ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                        label: Some("tessera empty bind group"),
                        layout: &empty_bgl,
                        entries: &[],
                    })
                }
            })
            .collect();

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tessera square pipeline layout"),
                bind_group_layouts: &layouts,
                immediate_size: 0,
            });

        let attributes = [wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: self.position_location,
        }];

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessera square pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(vertex_entry.as_str()),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &attributes,
                }],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(fragment_entry.as_str()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(DepthBuffer::stencil_state(true)),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "square pipeline built for {:?} (position @location({}), transform @group({}) @binding({}))",
            ctx.surface_format,
            self.position_location,
            self.transform_binding.group,
            self.transform_binding.binding,
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_groups = bind_groups;
        self.transform_ubo = Some(transform_ubo);
    }
}

// Sprite rendering system

use super::{CameraUniform, TextureHandle, TextureManager, Vertex};
use anyhow::Result;
use glam::{Mat4, Vec2};
use log::debug;
use wgpu::util::DeviceExt;

/// Sprites the vertex buffer holds before it has to grow
const INITIAL_SPRITE_CAPACITY: usize = 64;

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// A textured quad in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Top-left corner in window pixels (y down)
    pub position: Vec2,
    /// Size in pixels (width, height)
    pub size: Vec2,
    /// Mirror the image horizontally
    pub flip_horizontal: bool,
    pub texture: TextureHandle,
}

impl Sprite {
    pub fn new(position: Vec2, size: Vec2, texture: TextureHandle) -> Self {
        Self {
            position,
            size,
            flip_horizontal: false,
            texture,
        }
    }

    pub fn flipped(mut self, flip_horizontal: bool) -> Self {
        self.flip_horizontal = flip_horizontal;
        self
    }

    /// Quad corners: top-left, top-right, bottom-right, bottom-left
    ///
    /// Mirroring swaps the horizontal texture coordinates and leaves the quad
    /// where it is.
    pub fn vertices(&self) -> [Vertex; 4] {
        let (u_left, u_right) = if self.flip_horizontal {
            (1.0, 0.0)
        } else {
            (0.0, 1.0)
        };

        let min = self.position;
        let max = self.position + self.size;

        [
            Vertex::new(Vec2::new(min.x, min.y), Vec2::new(u_left, 0.0)),
            Vertex::new(Vec2::new(max.x, min.y), Vec2::new(u_right, 0.0)),
            Vertex::new(Vec2::new(max.x, max.y), Vec2::new(u_right, 1.0)),
            Vertex::new(Vec2::new(min.x, max.y), Vec2::new(u_left, 1.0)),
        ]
    }
}

/// Draws queued sprites, one indexed quad per sprite
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    sprites: Vec<Sprite>,
}

impl SpriteRenderer {
    /// Create a new sprite renderer
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The y-down projection flips winding; quads are never back-facing anyway
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_capacity = INITIAL_SPRITE_CAPACITY;
        let vertex_buffer = Self::create_vertex_buffer(device, vertex_capacity);

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            vertex_capacity,
            index_buffer,
            camera_buffer,
            camera_bind_group,
            texture_bind_group_layout,
            sprites: Vec::new(),
        })
    }

    fn create_vertex_buffer(device: &wgpu::Device, sprite_capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Vertex Buffer"),
            size: (sprite_capacity * 4 * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Add a sprite to render
    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Clear all sprites
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Upload queued quads and the camera before the render pass starts
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, camera: CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera]));

        if self.sprites.is_empty() {
            return;
        }

        if self.sprites.len() > self.vertex_capacity {
            self.vertex_capacity = self.sprites.len().next_power_of_two();
            self.vertex_buffer = Self::create_vertex_buffer(device, self.vertex_capacity);
            debug!("Sprite vertex buffer grown to {} quads", self.vertex_capacity);
        }

        let vertices: Vec<Vertex> = self.sprites.iter().flat_map(Sprite::vertices).collect();
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
    }

    /// Record draw calls for every queued sprite, in queue order
    ///
    /// Sprites whose texture handle is unknown are skipped.
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        textures: &'a TextureManager,
    ) {
        if self.sprites.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for (i, sprite) in self.sprites.iter().enumerate() {
            let Some(texture) = textures.get(sprite.texture) else {
                continue;
            };
            render_pass.set_bind_group(1, &texture.bind_group, &[]);
            render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, (i * 4) as i32, 0..1);
        }
    }

    /// Layout every sprite texture's bind group must follow
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bind_group_layout
    }
}

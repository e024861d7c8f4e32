//! wgpu backend for render lists: textured quads in the 640x480 overlay space

use std::collections::HashMap;
use std::ops::Range;

use glam::Mat4;
use image::RgbaImage;
use wgpu::util::DeviceExt;
use wgpu::*;

use crate::core::context::Color;
use crate::error::UiError;
use crate::render::{Font, Primitive, RenderList, Texture, TextureId, TextureUpload, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Vertex for 2D rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBS: [VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,  // position
        1 => Float32x4,  // color
        2 => Float32x2,  // uv
    ];

    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Consecutive quads sharing a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub texture: TextureId,
    pub indices: Range<u32>,
}

/// CPU side of a frame: vertices, indices and the draw calls over them.
#[derive(Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub batches: Vec<Batch>,
}

impl Geometry {
    /// Expands a render list into textured quads. Text is broken into one
    /// quad per glyph using `font`.
    pub fn build(list: &RenderList, font: &Font) -> Self {
        let mut geometry = Geometry::default();
        for primitive in &list.primitives {
            match primitive {
                Primitive::Rect { x, y, width, height, color } => {
                    geometry.quad(&Texture::blank(1, 1), *x, *y, *width, *height, *color);
                }
                Primitive::Image { x, y, width, height, texture, color } => {
                    geometry.quad(texture, *x, *y, *width, *height, *color);
                }
                Primitive::Text { x, y, text, scale, color } => {
                    let mut x = *x;
                    for c in text.chars() {
                        let glyph = font.glyph(c);
                        let w = glyph.width as f32 * scale;
                        geometry.quad(glyph, x, *y, w, glyph.height as f32 * scale, *color);
                        x += w;
                    }
                }
            }
        }
        geometry
    }

    fn quad(&mut self, texture: &Texture, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let base = self.vertices.len() as u32;
        let c = color.to_array();
        // y grows upwards, so the top edge samples v1
        self.vertices.extend_from_slice(&[
            Vertex { position: [x, y + height], color: c, uv: [texture.u1, texture.v1] },
            Vertex { position: [x + width, y + height], color: c, uv: [texture.u2, texture.v1] },
            Vertex { position: [x + width, y], color: c, uv: [texture.u2, texture.v2] },
            Vertex { position: [x, y], color: c, uv: [texture.u1, texture.v2] },
        ]);

        let start = self.indices.len() as u32;
        self.indices.extend_from_slice(&[
            base, base + 1, base + 2,
            base, base + 2, base + 3,
        ]);
        let end = self.indices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture.id => batch.indices.end = end,
            _ => self.batches.push(Batch { texture: texture.id, indices: start..end }),
        }
    }
}

struct GpuTexture {
    _texture: wgpu::Texture,
    bind_group: BindGroup,
}

/// GPU state and resources
pub struct GpuRenderer {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub pipeline: RenderPipeline,
    pub size: (u32, u32),
    pub clear_color: Color,
    texture_layout: BindGroupLayout,
    sampler: Sampler,
    projection: BindGroup,
    textures: HashMap<TextureId, GpuTexture>,
    next_texture: u32,
}

impl GpuRenderer {
    pub async fn new(window: std::sync::Arc<winit::window::Window>) -> Result<Self, UiError> {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = Instance::new(InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(UiError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("DreamChess UI Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("DreamChess UI Shader"),
            source: ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let projection_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Projection Layout"),
            entries: &[BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::VERTEX,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Texture Layout"),
            entries: &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Texture {
                        sample_type: TextureSampleType::Float { filterable: true },
                        view_dimension: TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Sampler(SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Fixed 640x480 screen, origin bottom-left
        let ortho = Mat4::orthographic_rh(0.0, SCREEN_WIDTH as f32, 0.0, SCREEN_HEIGHT as f32, -1.0, 1.0);
        let projection_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Projection Buffer"),
            contents: bytemuck::cast_slice(&ortho.to_cols_array()),
            usage: BufferUsages::UNIFORM,
        });
        let projection = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Projection Bind Group"),
            layout: &projection_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("DreamChess UI Pipeline Layout"),
            bind_group_layouts: &[&projection_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("DreamChess UI Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: config.format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&SamplerDescriptor {
            label: Some("DreamChess UI Sampler"),
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            ..Default::default()
        });

        let mut renderer = Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            size: (size.width, size.height),
            clear_color: Color::BLACK,
            texture_layout,
            sampler,
            projection,
            textures: HashMap::new(),
            next_texture: TextureId::WHITE.0,
        };

        let white = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        let id = renderer.upload(&white);
        debug_assert_eq!(id, TextureId::WHITE);

        Ok(renderer)
    }

    pub fn resize(&mut self, new_size: (u32, u32)) {
        if new_size.0 > 0 && new_size.1 > 0 {
            self.size = new_size;
            self.config.width = new_size.0;
            self.config.height = new_size.1;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, render_list: &RenderList, font: &Font) -> Result<(), SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&TextureViewDescriptor::default());

        let geometry = Geometry::build(render_list, font);

        let mut encoder = self.device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        let buffers = if geometry.indices.is_empty() {
            None
        } else {
            let vertices = self.device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: BufferUsages::VERTEX,
            });
            let indices = self.device.create_buffer_init(&util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: BufferUsages::INDEX,
            });
            Some((vertices, indices))
        };

        {
            let mut render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(wgpu::Color {
                            r: self.clear_color.r as f64,
                            g: self.clear_color.g as f64,
                            b: self.clear_color.b as f64,
                            a: self.clear_color.a as f64,
                        }),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some((vertices, indices)) = &buffers {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.projection, &[]);
                render_pass.set_vertex_buffer(0, vertices.slice(..));
                render_pass.set_index_buffer(indices.slice(..), IndexFormat::Uint32);
                for batch in &geometry.batches {
                    let texture = self
                        .textures
                        .get(&batch.texture)
                        .or_else(|| self.textures.get(&TextureId::WHITE));
                    if let Some(texture) = texture {
                        render_pass.set_bind_group(1, &texture.bind_group, &[]);
                        render_pass.draw_indexed(batch.indices.clone(), 0, 0..1);
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl TextureUpload for GpuRenderer {
    fn upload(&mut self, image: &RgbaImage) -> TextureId {
        let (width, height) = image.dimensions();
        let extent = Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = self.device.create_texture(&TextureDescriptor {
            label: Some("DreamChess UI Texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            image.as_raw(),
            ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            extent,
        );

        let view = texture.create_view(&TextureViewDescriptor::default());
        let bind_group = self.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Texture Bind Group"),
            layout: &self.texture_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(id, GpuTexture { _texture: texture, bind_group });
        id
    }

    fn release(&mut self, id: TextureId) {
        if id != TextureId::WHITE {
            self.textures.remove(&id);
        }
    }
}

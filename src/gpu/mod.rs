//! GPU presentation of a [`DrawList`].
//!
//! All simulation happens on the CPU; this module only uploads the frame's
//! primitives and draws them in one render pass:
//!
//! 1. clear to black
//! 2. particle discs and glows in recording order, one draw call per
//!    [`DiscRun`]: solid discs alpha blended, glows additive
//! 3. connection lines (`LineList`, alpha blend)
//! 4. the particle-count overlay

#[cfg(feature = "egui")]
mod overlay;
mod shaders;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::draw::{Disc, DiscKind, DiscRun, DrawList, LineVertex};
use crate::error::GpuError;
#[cfg(feature = "egui")]
pub use overlay::Overlay;
use shaders::{DISC_SHADER, LINE_SHADER};

const QUAD_VERTICES: u32 = 6;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct CanvasUniforms {
    size: [f32; 2],
    _padding: [f32; 2],
}

/// How a batch is composited onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Standard alpha blending.
    Alpha,
    /// Source colour, weighted by its alpha, is added to the destination.
    Additive,
}

fn blend_mode_to_state(mode: BlendMode) -> wgpu::BlendState {
    match mode {
        BlendMode::Alpha => wgpu::BlendState::ALPHA_BLENDING,
        BlendMode::Additive => wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        },
    }
}

/// Pick the surface format to render into.
///
/// 8-bit colours are written as-is, so a non-sRGB format is preferred; the
/// overlay renderer also blends in gamma space.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first())
        .copied()
}

/// A vertex buffer that grows to fit whatever is written to it.
struct DynamicBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    len: u32,
}

impl DynamicBuffer {
    const INITIAL_SIZE: u64 = 4096;

    fn new(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            label,
            buffer: Self::allocate(device, label, Self::INITIAL_SIZE),
            len: 0,
        }
    }

    fn allocate(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Upload `items`, reallocating if they do not fit.
    fn write<T: Pod>(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, items: &[T]) {
        self.len = items.len() as u32;
        if items.is_empty() {
            return;
        }

        let bytes: &[u8] = bytemuck::cast_slice(items);
        let needed = bytes.len() as u64;
        if needed > self.buffer.size() {
            let size = needed.next_power_of_two();
            log::debug!("growing {} to {} bytes", self.label, size);
            self.buffer = Self::allocate(device, self.label, size);
        }
        queue.write_buffer(&self.buffer, 0, bytes);
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    disc_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_bind_group: wgpu::BindGroup,
    discs: DynamicBuffer,
    lines: DynamicBuffer,
    #[cfg(feature = "egui")]
    overlay: Overlay,
}

impl GpuState {
    /// Set up the surface, device and pipelines for `window`.
    ///
    /// `canvas` is the size of the drawing area in canvas pixels; it covers
    /// the whole surface regardless of the window's scale factor.
    pub async fn new(window: Arc<Window>, canvas: Vec2) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format =
            pick_surface_format(&surface_caps.formats).ok_or(GpuError::NoSurfaceFormat)?;
        log::info!("surface format {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniforms = CanvasUniforms {
            size: canvas.to_array(),
            _padding: [0.0; 2],
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Canvas Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Canvas Bind Group Layout"),
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

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Canvas Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Canvas Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let disc_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Disc Shader"),
            source: wgpu::ShaderSource::Wgsl(DISC_SHADER.into()),
        });
        let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(LINE_SHADER.into()),
        });

        let disc_pipeline = create_disc_pipeline(
            &device,
            &pipeline_layout,
            &disc_shader,
            surface_format,
            BlendMode::Alpha,
            "Disc Pipeline",
        );
        let glow_pipeline = create_disc_pipeline(
            &device,
            &pipeline_layout,
            &disc_shader,
            surface_format,
            BlendMode::Additive,
            "Glow Pipeline",
        );
        let line_pipeline =
            create_line_pipeline(&device, &pipeline_layout, &line_shader, surface_format);

        #[cfg(feature = "egui")]
        let overlay = Overlay::new(&device, surface_format, &window);

        Ok(Self {
            discs: DynamicBuffer::new(&device, "Disc Instance Buffer"),
            lines: DynamicBuffer::new(&device, "Line Vertex Buffer"),
            surface,
            device,
            queue,
            config,
            disc_pipeline,
            glow_pipeline,
            line_pipeline,
            uniform_bind_group,
            #[cfg(feature = "egui")]
            overlay,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn disc_pipeline_for(&self, run: &DiscRun) -> &wgpu::RenderPipeline {
        match run.kind {
            DiscKind::Solid => &self.disc_pipeline,
            DiscKind::Glow => &self.glow_pipeline,
        }
    }

    /// Forward a window event to the overlay.
    #[allow(unused_variables)]
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        #[cfg(feature = "egui")]
        self.overlay.on_window_event(window, event);
    }

    /// Draw `list` and the `hud` text, then present.
    #[allow(unused_variables)]
    pub fn render(
        &mut self,
        window: &Window,
        list: &DrawList,
        hud: &str,
    ) -> Result<(), wgpu::SurfaceError> {
        self.discs.write(&self.device, &self.queue, list.discs());
        self.lines.write(&self.device, &self.queue, list.line_vertices());

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        #[cfg(feature = "egui")]
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        #[cfg(feature = "egui")]
        let overlay_frame = self.overlay.prepare(
            &self.device,
            &self.queue,
            &mut encoder,
            window,
            hud,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            if !self.discs.is_empty() {
                render_pass.set_vertex_buffer(0, self.discs.buffer.slice(..));
                for run in list.runs() {
                    render_pass.set_pipeline(self.disc_pipeline_for(run));
                    render_pass.draw(0..QUAD_VERTICES, run.range.clone());
                }
            }

            if !self.lines.is_empty() {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, self.lines.buffer.slice(..));
                render_pass.draw(0..self.lines.len, 0..1);
            }

            #[cfg(feature = "egui")]
            self.overlay
                .paint(&mut render_pass, &overlay_frame, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        #[cfg(feature = "egui")]
        self.overlay.cleanup(&overlay_frame);

        Ok(())
    }
}

fn create_disc_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    blend_mode: BlendMode,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Disc>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    // center
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x2,
                    },
                    // radius
                    wgpu::VertexAttribute {
                        offset: 8,
                        shader_location: 1,
                        format: wgpu::VertexFormat::Float32,
                    },
                    // color
                    wgpu::VertexAttribute {
                        offset: 16,
                        shader_location: 2,
                        format: wgpu::VertexFormat::Float32x4,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend_mode_to_state(blend_mode)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_line_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Line Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x2,
                    },
                    wgpu::VertexAttribute {
                        offset: 8,
                        shader_location: 1,
                        format: wgpu::VertexFormat::Float32x4,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend_mode_to_state(BlendMode::Alpha)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

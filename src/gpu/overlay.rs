//! Particle-count text drawn with egui.

use std::sync::Arc;
use winit::window::Window;

const TEXT_POS: egui::Pos2 = egui::pos2(10.0, 10.0);
const TEXT_SIZE: f32 = 24.0;

/// egui context, winit glue and wgpu renderer for the HUD text.
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Tessellated HUD for one frame.
pub struct OverlayFrame {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
}

impl Overlay {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::dark());

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self { ctx, state, renderer }
    }

    /// Keep egui's view of the window (size, scale factor) current.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    /// Lay out `text`, upload what it needs and return the paint jobs.
    ///
    /// Call before the render pass is opened.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        text: &str,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            egui::Area::new(egui::Id::new("particle_count"))
                .fixed_pos(TEXT_POS)
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(text)
                                .color(egui::Color32::WHITE)
                                .size(TEXT_SIZE),
                        )
                        .wrap_mode(egui::TextWrapMode::Extend),
                    );
                });
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, screen_descriptor);

        OverlayFrame {
            paint_jobs,
            textures_delta: full_output.textures_delta,
        }
    }

    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        frame: &OverlayFrame,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.renderer
            .render(render_pass, &frame.paint_jobs, screen_descriptor);
    }

    /// Free textures egui no longer needs. Call after submitting.
    pub fn cleanup(&mut self, frame: &OverlayFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

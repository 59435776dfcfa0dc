//! Native host window for the chat widget.
//!
//! Owns a winit window with its own egui context and wgpu renderer, and the
//! `ChatController` that holds the conversation.

use crate::controller::ChatController;
use crate::ui_constants::CHAT_SCREEN_MARGIN;
use anyhow::{Context, Result};
use chefbot_config::Config;
use std::sync::Arc;
use std::time::Duration;
use wgpu::SurfaceError;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Result of processing a chat window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatWindowAction {
    /// No action needed
    None,
    /// The window was closed; exit the event loop
    Close,
}

/// Background cleared behind the widget.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.93,
    g: 0.92,
    b: 0.90,
    a: 1.0,
};

/// Hosts the chat widget in its own window with an egui-wgpu renderer
pub struct ChatWindow {
    /// The winit window
    window: Arc<Window>,
    /// Window ID for event routing
    window_id: WindowId,
    /// wgpu surface
    surface: wgpu::Surface<'static>,
    /// wgpu device
    device: Arc<wgpu::Device>,
    /// wgpu queue
    queue: Arc<wgpu::Queue>,
    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,
    /// egui context
    egui_ctx: egui::Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    egui_renderer: egui_wgpu::Renderer,
    /// Session, widget and dispatcher
    controller: ChatController,
    /// Flag to indicate window should close
    should_close: bool,
}

impl ChatWindow {
    /// Create the chat window
    pub async fn new(
        event_loop: &ActiveEventLoop,
        config: &Config,
        runtime: tokio::runtime::Handle,
    ) -> Result<Self> {
        let window_attrs = Window::default_attributes()
            .with_title(config.window_title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_min_inner_size(min_inner_size(config))
            .with_resizable(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create chat window")?,
        );
        let window_id = window.id();
        let size = window.inner_size();

        // Platform-specific backend selection for better VM compatibility
        #[cfg(target_os = "windows")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            ..Default::default()
        });
        #[cfg(target_os = "macos")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::VULKAN | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .context("Failed to create GPU device")?;

        let device = Arc::new(device);
        let queue = Arc::new(queue);

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("Surface reports no supported formats")?;
        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::Opaque)
        {
            wgpu::CompositeAlphaMode::Opaque
        } else {
            surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let scale_factor = window.scale_factor() as f32;
        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(egui::Visuals::light());
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        log::info!(
            "Chat window created ({}x{}, format {:?})",
            surface_config.width,
            surface_config.height,
            surface_format
        );

        Ok(Self {
            window,
            window_id,
            surface,
            device,
            queue,
            surface_config,
            egui_ctx,
            egui_state,
            egui_renderer,
            controller: ChatController::new(config, runtime),
            should_close: false,
        })
    }

    /// Get the window ID
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Whether a reply is outstanding (the host should keep waking up).
    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    /// Apply finished replies and redraw if the conversation changed.
    ///
    /// While a reply is pending the window is also redrawn so the spinner
    /// keeps turning.
    pub fn poll(&mut self) {
        if self.controller.poll() || self.controller.is_loading() {
            self.window.request_redraw();
        }
    }

    pub fn handle_window_event(&mut self, event: WindowEvent) -> ChatWindowAction {
        let event_response = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                self.should_close = true;
                return ChatWindowAction::Close;
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.surface_config.width = new_size.width;
                    self.surface_config.height = new_size.height;
                    self.surface.configure(&self.device, &self.surface_config);
                    self.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
                return ChatWindowAction::None;
            }

            _ => {}
        }

        if event_response.repaint {
            self.window.request_redraw();
        }

        ChatWindowAction::None
    }

    fn render(&mut self) {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return;
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Chat window surface timeout");
                return;
            }
            Err(e) => {
                log::error!("Chat window surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let controller = &mut self.controller;
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            controller.show(ctx);
        });

        // In egui 0.33 copy commands arrive as OutputCommand::CopyText
        for cmd in &egui_output.platform_output.commands {
            if let egui::OutputCommand::CopyText(text) = cmd
                && let Ok(mut clipboard) = arboard::Clipboard::new()
                && let Err(e) = clipboard.set_text(text)
            {
                log::warn!("Chat window: failed to copy to clipboard: {}", e);
            }
        }
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output.clone());

        let paint_jobs = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        for (id, delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Chat Window Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Chat Window Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui_renderer.render() needs a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        // egui asks for an immediate repaint while animating (spinner, scroll)
        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay == Duration::ZERO);
        if repaint_now {
            self.window.request_redraw();
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Smallest window that still fits the panel plus its margin on each side.
pub fn min_inner_size(config: &Config) -> winit::dpi::LogicalSize<f64> {
    let margin = 2.0 * CHAT_SCREEN_MARGIN as f64;
    winit::dpi::LogicalSize::new(
        config.panel_width as f64 + margin,
        config.panel_height as f64 + margin,
    )
}

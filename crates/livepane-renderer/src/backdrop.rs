use std::sync::Arc;

use livepane_common::Color;
use winit::window::Window;

use crate::gpu::{GpuContext, RendererError};

/// Fills the window with a single color behind the child webviews.
pub struct Backdrop {
    gpu: GpuContext,
    color: Color,
    clear: wgpu::Color,
}

impl Backdrop {
    pub async fn new(window: Arc<Window>, color: Color) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let clear = clear_color_for(color, gpu.format().is_srgb());
        Ok(Self { gpu, color, clear })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the fill color. Takes effect on the next `render`.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.clear = clear_color_for(color, self.gpu.format().is_srgb());
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn render(&mut self) -> Result<(), RendererError> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and skip this frame.
                let size = self.gpu.size;
                self.gpu.resize(size.width, size.height);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("livepane backdrop encoder"),
            });

        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("livepane backdrop pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

/// Convert an 8-bit sRGB color to a clear color for a surface.
///
/// sRGB surfaces expect linear values and encode on write.
pub fn clear_color_for(color: Color, srgb_surface: bool) -> wgpu::Color {
    let channel = |c: u8| {
        let v = c as f64 / 255.0;
        if srgb_surface {
            srgb_to_linear(v)
        } else {
            v
        }
    };
    wgpu::Color {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
        a: color.a as f64 / 255.0,
    }
}

pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
        assert!((srgb_to_linear(0.5) - 0.214).abs() < 0.001);
    }

    #[test]
    fn clear_color_linear_surface_is_passthrough() {
        let c = clear_color_for(Color::from_rgba(255, 0, 128, 255), false);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn clear_color_srgb_surface_is_linearized() {
        let c = clear_color_for(Color::from_rgba(128, 128, 128, 255), true);
        assert!(c.r < 128.0 / 255.0);
        assert_eq!(c.r, c.g);
        assert_eq!(c.a, 1.0);
    }
}

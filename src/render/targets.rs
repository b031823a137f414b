use super::helpers;
use crate::constants::MSAA_SAMPLES;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Per-size attachments for the scene pass: a multisampled colour target
/// resolved into the swapchain, and a matching depth buffer.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_attachment(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            MSAA_SAMPLES,
        );
        let (depth_tex, depth_view) =
            helpers::create_attachment(device, "depth", width, height, DEPTH_FORMAT, MSAA_SAMPLES);
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        self.msaa_tex.destroy();
        self.depth_tex.destroy();
        *self = Self::new(device, color_format, width, height);
    }
}

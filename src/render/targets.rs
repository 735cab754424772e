use super::helpers;

/// Depth attachments used by the renderer.
///
/// - `depth_*` is the main pass depth buffer at swapchain resolution.
/// - `shadow_*` is the spot light's depth map, sized by the render profile
///   (1x1 while shadows are off so the bind group stays valid).
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) shadow_tex: wgpu::Texture,
    pub(crate) shadow_view: wgpu::TextureView,
    pub(crate) shadow_size: u32,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32, shadow_size: u32) -> Self {
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, "depth_tex", width, height);
        let shadow_size = shadow_size.max(1);
        let (shadow_tex, shadow_view) =
            helpers::create_depth_texture(device, "shadow_map", shadow_size, shadow_size);
        Self {
            depth_tex,
            depth_view,
            shadow_tex,
            shadow_view,
            shadow_size,
        }
    }

    pub(crate) fn recreate_depth(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height);
    }

    /// Returns `true` when the shadow map was replaced.
    pub(crate) fn resize_shadow(&mut self, device: &wgpu::Device, size: u32) -> bool {
        let size = size.max(1);
        if size == self.shadow_size {
            return false;
        }
        (self.shadow_tex, self.shadow_view) =
            helpers::create_depth_texture(device, "shadow_map", size, size);
        self.shadow_size = size;
        true
    }
}

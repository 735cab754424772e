use gallery_core::SceneObject;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) flags: [f32; 4], // unlit, receives shadow
}

/// One drawable: geometry, per-object uniforms and its texture binding.
pub(crate) struct GpuObject {
    pub(crate) label: &'static str,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    uniforms: ObjectUniforms,
    pub(crate) casts_shadow: bool,
    // keeps the painting texture alive for the bind group
    _texture: Option<wgpu::Texture>,
}

impl GpuObject {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        object: &SceneObject,
        texture: (&wgpu::TextureView, Option<wgpu::Texture>),
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(object.label),
            contents: bytemuck::cast_slice(&object.mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        // index buffers must be a multiple of 4 bytes
        let mut indices = object.mesh.indices.clone();
        if indices.len() % 2 == 1 {
            indices.push(0);
        }
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(object.label),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let m = &object.material;
        let uniforms = ObjectUniforms {
            model: object.transform.to_cols_array_2d(),
            color: [m.color[0], m.color[1], m.color[2], 1.0],
            flags: [
                if m.unlit { 1.0 } else { 0.0 },
                if m.receives_shadow { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        };
        let uniform_buffer = super::helpers::create_uniform_buffer(device, object.label, &uniforms);
        let (view, owned_texture) = texture;
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(object.label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            label: object.label,
            vertex_buffer,
            index_buffer,
            index_count: object.mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
            uniforms,
            casts_shadow: m.casts_shadow,
            _texture: owned_texture,
        }
    }

    /// Update the base colour; writes the uniform only when it changed.
    pub(crate) fn set_color(&mut self, queue: &wgpu::Queue, rgb: [f32; 3]) {
        let color = [rgb[0], rgb[1], rgb[2], 1.0];
        if self.uniforms.color == color {
            return;
        }
        self.uniforms.color = color;
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

use gallery_core::{
    srgb_hex_to_linear, Camera, DecodedImage, Lighting, PaintingInstance, Placement,
    RenderProfile, SceneObject,
};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;

use mesh::GpuObject;
use targets::RenderTargets;

static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

const SHADOW_DEPTH_BIAS: f32 = 0.0005;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_pos: [f32; 4],
    light_dir: [f32; 4],
    light_params: [f32; 4],
    shadow_params: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globals: Globals,
    globals_buffer: wgpu::Buffer,
    globals_bgl: wgpu::BindGroupLayout,
    globals_bg: wgpu::BindGroup,
    shadow_globals_bg: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    shadow_sampler: wgpu::Sampler,
    linear_sampler: wgpu::Sampler,
    white_view: wgpu::TextureView,
    _white_tex: wgpu::Texture,

    scene_pipeline: wgpu::RenderPipeline,
    shadow_pipeline: wgpu::RenderPipeline,

    objects: Vec<GpuObject>,
    /// Index into `objects` of each loaded painting's frame.
    frames: Vec<usize>,
    lighting: Lighting,
    shadows_enabled: bool,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, lighting: Lighting) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let defaults = RenderProfile::default();
        let targets = RenderTargets::new(&device, width, height, defaults.shadow_map_size);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("shadow_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        let (white_tex, white_view) =
            helpers::create_rgba_texture(&device, &queue, "white_tex", 1, 1, &[255, 255, 255, 255]);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Depth,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });
        // the shadow pass renders into the shadow map, so it cannot also bind it
        let shadow_globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shadow_globals_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[
                helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let globals = Globals {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            light_view_proj: lighting.spot.view_projection().to_cols_array_2d(),
            camera_pos: [0.0; 4],
            light_pos: lighting.spot.position.extend(lighting.spot.intensity).to_array(),
            light_dir: lighting
                .spot
                .direction()
                .extend(lighting.spot.angle.cos())
                .to_array(),
            light_params: [
                (lighting.spot.angle * (1.0 - lighting.spot.penumbra)).cos(),
                lighting.spot.range,
                lighting.spot.decay,
                lighting.ambient.intensity,
            ],
            shadow_params: [
                if defaults.shadows { 1.0 } else { 0.0 },
                1.0 / targets.shadow_size as f32,
                SHADOW_DEPTH_BIAS,
                0.0,
            ],
        };
        let globals_buffer = helpers::create_uniform_buffer(&device, "globals", &globals);
        let globals_bg =
            create_globals_bind_group(&device, &globals_bgl, &globals_buffer, &targets, &shadow_sampler);
        let shadow_globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shadow_globals_bg"),
            layout: &shadow_globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let shadow_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shadow_pl"),
            bind_group_layouts: &[&shadow_globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let scene_pipeline = helpers::make_scene_pipeline(&device, &scene_layout, &shader, format);
        let shadow_pipeline = helpers::make_shadow_pipeline(&device, &shadow_layout, &shader);

        let [r, g, b] = srgb_hex_to_linear(gallery_core::constants::BACKGROUND_COLOR);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals,
            globals_buffer,
            globals_bgl,
            globals_bg,
            shadow_globals_bg,
            object_bgl,
            shadow_sampler,
            linear_sampler,
            white_view,
            _white_tex: white_tex,
            scene_pipeline,
            shadow_pipeline,
            objects: Vec::new(),
            frames: Vec::new(),
            shadows_enabled: defaults.shadows && lighting.spot.casts_shadow,
            lighting,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    /// Upload an untextured scene object; returns its index.
    pub fn add_object(&mut self, object: &SceneObject) -> usize {
        let gpu = GpuObject::new(
            &self.device,
            &self.object_bgl,
            &self.linear_sampler,
            object,
            (&self.white_view, None),
        );
        log::debug!("[gpu] uploaded {}", gpu.label);
        self.objects.push(gpu);
        self.objects.len() - 1
    }

    /// Upload a painting's frame and textured picture. Returns the painting's
    /// index, which matches its position in the loaded sequence.
    pub fn add_painting(&mut self, placement: &Placement, image: &DecodedImage) -> usize {
        let frame = self.add_object(&placement.frame_object());
        let (tex, view) = helpers::create_rgba_texture(
            &self.device,
            &self.queue,
            "painting_tex",
            image.width,
            image.height,
            &image.rgba,
        );
        let picture = GpuObject::new(
            &self.device,
            &self.object_bgl,
            &self.linear_sampler,
            &placement.picture_object(),
            (&view, Some(tex)),
        );
        self.objects.push(picture);
        self.frames.push(frame);
        self.frames.len() - 1
    }

    /// Push frame colours from the gallery state to the GPU.
    pub fn sync_frame_colors(&mut self, paintings: &[PaintingInstance]) {
        for (&frame, instance) in self.frames.iter().zip(paintings) {
            self.objects[frame].set_color(&self.queue, instance.frame_color);
        }
    }

    /// Switch shadow quality to match a device profile.
    pub fn apply_profile(&mut self, profile: &RenderProfile) {
        self.shadows_enabled = profile.shadows && self.lighting.spot.casts_shadow;
        let size = if self.shadows_enabled {
            profile.shadow_map_size
        } else {
            1
        };
        if self.targets.resize_shadow(&self.device, size) {
            self.globals_bg = create_globals_bind_group(
                &self.device,
                &self.globals_bgl,
                &self.globals_buffer,
                &self.targets,
                &self.shadow_sampler,
            );
        }
        self.globals.shadow_params[0] = if self.shadows_enabled { 1.0 } else { 0.0 };
        self.globals.shadow_params[1] = 1.0 / self.targets.shadow_size as f32;
        log::info!(
            "[gpu] shadows={} shadow_map={}",
            self.shadows_enabled,
            self.targets.shadow_size
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate_depth(&self.device, width, height);
        }
    }

    pub fn render(&mut self, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.globals.view_proj = camera.view_projection().to_cols_array_2d();
        self.globals.camera_pos = camera.eye.extend(1.0).to_array();
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&self.globals));

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        if self.shadows_enabled {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.shadow_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.shadow_pipeline);
            pass.set_bind_group(0, &self.shadow_globals_bg, &[]);
            for obj in self.objects.iter().filter(|o| o.casts_shadow) {
                obj.draw(&mut pass);
            }
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.scene_pipeline);
            pass.set_bind_group(0, &self.globals_bg, &[]);
            for obj in &self.objects {
                obj.draw(&mut pass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_globals_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    globals_buffer: &wgpu::Buffer,
    targets: &RenderTargets,
    shadow_sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("globals_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&targets.shadow_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(shadow_sampler),
            },
        ],
    })
}

use web_sys as web;

mod helpers;
mod points;
mod post;
mod targets;

use points::{CloudBuffers, PointInstance, PointsResources};
use targets::RenderTargets;

use crate::camera;
use crate::core::scene::Scene;

// World-space quad radius per point-size unit; chosen so a size-6 point at
// the camera's resting distance covers roughly the same screen area as the
// original point-sprite rendering.
const POINT_RADIUS_PER_SIZE: f32 = 0.38;
const STAR_OPACITY: f32 = 0.8;
const HEART_OPACITY: f32 = 1.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    ambient: f32,
    blur_dir: [f32; 2],
    bloom_strength: f32,
    threshold: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    points: PointsResources,
    star_buffers: CloudBuffers,
    heart_buffers: CloudBuffers,
    star_instances: Vec<PointInstance>,
    heart_instances: Vec<PointInstance>,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        star_count: u32,
        heart_count: u32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::preferred_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hdr_format = wgpu::TextureFormat::Rgba16Float;
        let targets = RenderTargets::new(&device, width, height);

        let points = points::create_points_resources(&device, hdr_format);
        let star_buffers = points.create_cloud(&device, "stars", star_count);
        let heart_buffers = points.create_cloud(&device, "heart", heart_count);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, hdr_format, format);
        let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only, _bg_bloom_b_only) =
            post::build_bind_groups(
                &device,
                &post,
                &linear_sampler,
                &targets.hdr_view,
                &targets.bloom_a_view,
                &targets.bloom_b_view,
            );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            star_buffers,
            heart_buffers,
            star_instances: Vec::with_capacity(star_count as usize),
            heart_instances: Vec::with_capacity(heart_count as usize),
            targets,
            linear_sampler,
            post,
            bg_hdr,
            bg_from_bloom_a,
            bg_from_bloom_b,
            bg_bloom_a_only,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.015,
                g: 0.0,
                b: 0.03,
                a: 1.0,
            },
            time_accum: 0.0,
        })
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
            self.targets.recreate(&self.device, width, height);
            self.rebuild_post_bind_groups();
        }
    }

    fn rebuild_post_bind_groups(&mut self) {
        let (bg_hdr, bg_from_a, bg_from_b, bg_a_only, _bg_b_only) = post::build_bind_groups(
            &self.device,
            &self.post,
            &self.linear_sampler,
            &self.targets.hdr_view,
            &self.targets.bloom_a_view,
            &self.targets.bloom_b_view,
        );
        self.bg_hdr = bg_hdr;
        self.bg_from_bloom_a = bg_from_a;
        self.bg_from_bloom_b = bg_from_b;
        self.bg_bloom_a_only = bg_a_only;
    }

    fn write_cloud(
        queue: &wgpu::Queue,
        buffers: &CloudBuffers,
        instances: &[PointInstance],
        uniforms: &points::PointUniforms,
    ) {
        queue.write_buffer(&buffers.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        queue.write_buffer(&buffers.instance_buffer, 0, bytemuck::cast_slice(instances));
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        time_ms: f32,
        scene: &Scene,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view = camera::view(time_ms).to_cols_array_2d();
        let proj = camera::projection(aspect).to_cols_array_2d();

        self.star_instances.clear();
        for (i, pos) in scene.stars.cloud.positions.iter().enumerate() {
            let c = scene.stars.cloud.base_colors[i];
            self.star_instances.push(PointInstance {
                pos_size: [pos.x, pos.y, pos.z, scene.stars.sizes[i]],
                color: [c[0], c[1], c[2], 1.0],
            });
        }
        self.heart_instances.clear();
        for (i, pos) in scene.heart.cloud.positions.iter().enumerate() {
            let c = scene.heart.colors[i];
            self.heart_instances.push(PointInstance {
                pos_size: [pos.x, pos.y, pos.z, scene.heart.sizes[i]],
                color: [c[0], c[1], c[2], 1.0],
            });
        }

        let star_uniforms = points::PointUniforms {
            view,
            proj,
            model: scene.star_model().to_cols_array_2d(),
            params: [POINT_RADIUS_PER_SIZE, STAR_OPACITY, self.time_accum, 0.0],
        };
        let heart_uniforms = points::PointUniforms {
            view,
            proj,
            model: scene.heart_model().to_cols_array_2d(),
            params: [POINT_RADIUS_PER_SIZE, HEART_OPACITY, self.time_accum, 0.0],
        };
        Self::write_cloud(&self.queue, &self.star_buffers, &self.star_instances, &star_uniforms);
        Self::write_cloud(&self.queue, &self.heart_buffers, &self.heart_instances, &heart_uniforms);

        let frame = self.surface.get_current_texture()?;
        let swap_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.star_buffers.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.star_buffers.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.star_buffers.count);
            rpass.set_bind_group(0, &self.heart_buffers.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.heart_buffers.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.heart_buffers.count);
        }

        // Composite tint breathes with the heart pulse.
        let ambient = (time_ms * scene.heart.pulse_speed()).sin() * 0.5 + 0.5;
        let res = [self.width as f32 / 2.0, self.height as f32 / 2.0];
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            res,
            self.time_accum,
            ambient,
            [0.0, 0.0],
        );
        post::write_post_uniforms(
            &self.queue,
            &self.post.blur_h_buffer,
            res,
            self.time_accum,
            ambient,
            [1.0, 0.0],
        );
        post::write_post_uniforms(
            &self.queue,
            &self.post.blur_v_buffer,
            res,
            self.time_accum,
            ambient,
            [0.0, 1.0],
        );

        // Bright pass -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bg_hdr,
            None,
        );

        // Blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_a,
            None,
        );

        // Blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_b,
            None,
        );

        // Composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &swap_view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

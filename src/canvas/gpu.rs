use super::{ParticleFrame, MIN_POINT_RADIUS_PX};
use eframe::egui;
use rayon::prelude::*;

const INITIAL_POINT_CAPACITY: u64 = 16_384;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPoint {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// Clip-space half extent of a sprite at unit depth.
    pub half_extent: [f32; 2],
    /// Smallest half extent allowed after the perspective divide (NDC).
    pub min_half_extent: [f32; 2],
    pub opacity: f32,
    pub _padding: [f32; 3], // 36 floats + 4 = 40 floats (160 bytes)
}

/// Per-frame paint callback. Owns a snapshot of the points, so the live
/// buffers are never read while the GPU is drawing.
pub struct ParticleCallback {
    pub points: Vec<GpuPoint>,
    pub uniforms: ParticleUniforms,
}

impl ParticleCallback {
    pub fn new(frame: &ParticleFrame<'_>, rect: egui::Rect) -> Self {
        let points = frame
            .positions
            .par_chunks_exact(3)
            .enumerate()
            .map(|(i, p)| {
                let [r, g, b] = frame.color(i);
                GpuPoint {
                    position: [p[0], p[1], p[2], 1.0],
                    color: [r, g, b, 1.0],
                }
            })
            .collect();

        let half = frame.clip_scale() * (frame.point_size * 0.5);
        Self {
            points,
            uniforms: ParticleUniforms {
                view_proj: frame.view_proj.to_cols_array_2d(),
                model: frame.model.to_cols_array_2d(),
                half_extent: half.to_array(),
                min_half_extent: [
                    MIN_POINT_RADIUS_PX * 2.0 / rect.width().max(1.0),
                    MIN_POINT_RADIUS_PX * 2.0 / rect.height().max(1.0),
                ],
                opacity: frame.opacity.clamp(0.0, 1.0),
                _padding: [0.0; 3],
            },
        }
    }
}

impl egui_wgpu::CallbackTrait for ParticleCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        let Some(resources) = callback_resources.get_mut::<ParticleGpuResources>() else {
            return Vec::new();
        };

        let point_data: &[u8] = bytemuck::cast_slice(&self.points);
        if point_data.len() as u64 > resources.point_buffer.size() {
            resources.point_buffer = create_point_buffer(device, point_data.len() as u64 * 2);
            resources.bind_group = create_bind_group(device, resources);
            tracing::debug!(points = self.points.len(), "grew particle storage buffer");
        }

        if !self.points.is_empty() {
            queue.write_buffer(&resources.point_buffer, 0, point_data);
        }
        queue.write_buffer(
            &resources.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );

        Vec::new()
    }

    fn paint<'a>(
        &'a self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'a>,
        callback_resources: &'a egui_wgpu::CallbackResources,
    ) {
        let Some(resources) = callback_resources.get::<ParticleGpuResources>() else {
            return;
        };
        render_pass.set_pipeline(&resources.pipeline);
        render_pass.set_bind_group(0, &resources.bind_group, &[]);
        render_pass.draw(0..6, 0..self.points.len() as u32);
    }
}

pub struct ParticleGpuResources {
    pub pipeline: wgpu::RenderPipeline,
    pub point_buffer: wgpu::Buffer,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl ParticleGpuResources {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(include_str!(
                "points.wgsl"
            ))),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particle_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // egui hands us premultiplied targets; src + dst gives the glow
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::Zero,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        let point_buffer = create_point_buffer(
            device,
            INITIAL_POINT_CAPACITY * std::mem::size_of::<GpuPoint>() as u64,
        );

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_uniforms"),
            size: std::mem::size_of::<ParticleUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: point_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            pipeline,
            point_buffer,
            uniform_buffer,
            bind_group,
            bind_group_layout,
        }
    }
}

fn create_point_buffer(device: &wgpu::Device, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particle_points"),
        size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_bind_group(device: &wgpu::Device, resources: &ParticleGpuResources) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particle_bind_group"),
        layout: &resources.bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: resources.point_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: resources.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

/// Build the pipeline and park it in the renderer's callback resources.
/// Returns `false` when eframe is not running on wgpu.
pub fn install(cc: &eframe::CreationContext<'_>) -> bool {
    let Some(render_state) = cc.wgpu_render_state.as_ref() else {
        return false;
    };
    let resources = ParticleGpuResources::new(&render_state.device, render_state.target_format);
    render_state
        .renderer
        .write()
        .callback_resources
        .insert(resources);
    tracing::info!(
        adapter = %render_state.adapter.get_info().name,
        "particle pipeline ready"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn uniform_layout_matches_the_shader() {
        assert_eq!(std::mem::size_of::<ParticleUniforms>(), 160);
        assert_eq!(std::mem::size_of::<GpuPoint>(), 32);
    }

    #[test]
    fn callback_snapshots_points_and_colours() {
        let positions = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let colors = [0.1, 0.2, 0.3];
        let frame = ParticleFrame {
            positions: &positions,
            colors: Some(&colors),
            tint: [0.0, 1.0, 1.0],
            model: Mat4::IDENTITY,
            view_proj: Mat4::perspective_rh(1.0, 1.0, 0.1, 100.0),
            opacity: 0.6,
            point_size: 0.04,
        };
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 200.0));
        let cb = ParticleCallback::new(&frame, rect);
        assert_eq!(cb.points.len(), 2);
        assert_eq!(cb.points[1].position, [4.0, 5.0, 6.0, 1.0]);
        assert_eq!(cb.points[0].color, [0.1, 0.2, 0.3, 1.0]);
        // colour buffer too short for the second point: falls back to the tint
        assert_eq!(cb.points[1].color, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(cb.uniforms.opacity, 0.6);
        assert!((cb.uniforms.min_half_extent[0] - MIN_POINT_RADIUS_PX / 200.0).abs() < 1e-7);
    }
}

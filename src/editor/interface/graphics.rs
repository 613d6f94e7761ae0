//! Fully handles drawing of custom graphics to the editor window.
//!
//! Rendering is achieved with `wgpu`. Every element of the interface is the same unit rectangle,
//! placed by its own transform and colored flat by the fragment shader, which can also clip it to
//! a disk. The numeric readout is drawn as seven-segment digits from the same rectangles, which
//! keeps the editor free of any image or font assets.

use std::fmt;

use cgmath::{Matrix4, Vector3};
use log::debug;
use wgpu::util::DeviceExt;
use zerocopy::AsBytes;

use super::{
    layout::{BAR_HEIGHT, BAR_Y, BORDER, KNOB_RADIUS, KNOB_X, KNOB_Y},
    state::InterfaceState,
    SIZE_X, SIZE_Y,
};
use crate::parameter::GainParameter;

const MSAA_SAMPLES: u32 = 4;

const BACKGROUND_COLOR: wgpu::Color = wgpu::Color {
    r: 0.09,
    g: 0.09,
    b: 0.1,
    a: 1.,
};
const KNOB_COLOR: [f32; 4] = [0.22, 0.22, 0.25, 1.];
const ACCENT_COLOR: [f32; 4] = [1.0, 0.51, 0.0, 1.0];
const TRACK_COLOR: [f32; 4] = [0.16, 0.16, 0.18, 1.];
/// Segments of the readout that are switched off.
const UNLIT_COLOR: [f32; 4] = [0.27, 0.27, 0.3, 1.];

/// Pointer size relative to the knob radius.
const POINTER_LENGTH: f32 = 0.45;
const POINTER_WIDTH: f32 = 0.06;

/// Knob limits are 150 degrees in both directions from the top.
const KNOB_SWEEP_DEGREES: f32 = 300.;

/// The readout shows `d.dd`, centered on the knob.
const READOUT_DIGITS: usize = 3;
/// Horizontal offset of each digit's center from the knob center, in pixels.
const READOUT_DIGIT_OFFSETS: [f32; READOUT_DIGITS] = [-28., 0., 28.];
/// Offset of the decimal point, which sits between the first two digits.
const READOUT_POINT_OFFSET: f32 = -14.;
const DIGIT_WIDTH: f32 = 18.;
const DIGIT_HEIGHT: f32 = 32.;
const SEGMENT_THICKNESS: f32 = 4.;

/// Lit segments of `0..=9`, with bit 0 as segment `a` through bit 6 as segment `g`.
const DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Reasons the GPU could not be prepared for the editor.
#[derive(Debug)]
pub enum RendererError {
    NoAdapter,
    RequestDevice(wgpu::RequestDeviceError),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::NoAdapter => write!(f, "no graphics adapter can draw to the window"),
            RendererError::RequestDevice(err) => {
                write!(f, "graphics device unavailable: {:?}", err)
            }
        }
    }
}

impl std::error::Error for RendererError {}

/// Contains all handles to GPU resources required for rendering the editor interface.
pub(super) struct Renderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    multisampled_framebuffer: wgpu::TextureView,
    swap_chain: wgpu::SwapChain,

    pipeline: wgpu::RenderPipeline,
    rectangle_index_buffer: wgpu::Buffer,
    rectangle_vertex_buffer: wgpu::Buffer,

    knob: Shape,
    pointer: Shape,
    level_track: Shape,
    level: Shape,
    /// Seven segments per readout digit, in `a..=g` order.
    readout_segments: Vec<[Shape; 7]>,
    readout_point: Shape,
}

/// Low-level representation of a point in 3D space. This representation is designed to be shared
/// directly with GPU memory for use in shaders.
#[repr(C)]
#[derive(Clone, Copy, AsBytes)]
struct Vertex {
    /// `[x, y, z, w]` position. For a 2D interface, only `x` and `y` are important.
    _pos: [f32; 4],
    /// `[u, v]` coordinate within the rectangle, used to clip it to a disk.
    _quad_coord: [f32; 2],
}

impl Vertex {
    pub fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Vertex {
            _pos: [x, y, 0., 0.],
            _quad_coord: [u, v],
        }
    }
}

/// Per-shape uniform block, matching `Shape` in the shaders.
#[repr(C)]
#[derive(Clone, Copy, AsBytes)]
struct ShapeUniform {
    transform: [[f32; 4]; 4],
    color: [f32; 4],
    /// `x` is 1 for a disk and 0 for a filled rectangle.
    params: [f32; 4],
}

/// One element of the interface, with the uniform buffer that positions and colors it.
struct Shape {
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    color: [f32; 4],
    disk: bool,
}

impl Shape {
    fn new(
        device: &wgpu::Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        transform: Matrix4<f32>,
        color: [f32; 4],
        disk: bool,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: None,
            contents: Self::uniform(transform, color, disk).as_bytes(),
            usage: wgpu::BufferUsage::UNIFORM | wgpu::BufferUsage::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: None,
        });

        Self {
            bind_group,
            uniform_buffer,
            color,
            disk,
        }
    }

    fn uniform(transform: Matrix4<f32>, color: [f32; 4], disk: bool) -> ShapeUniform {
        ShapeUniform {
            transform: transform.into(),
            color,
            params: [if disk { 1. } else { 0. }, 0., 0., 0.],
        }
    }

    /// Moves the shape by uploading a new transform.
    fn place(&self, queue: &wgpu::Queue, transform: Matrix4<f32>) {
        self.paint(queue, transform, self.color);
    }

    fn paint(&self, queue: &wgpu::Queue, transform: Matrix4<f32>, color: [f32; 4]) {
        queue.write_buffer(
            &self.uniform_buffer,
            0 as wgpu::BufferAddress,
            Self::uniform(transform, color, self.disk).as_bytes(),
        );
    }

    fn draw<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw_indexed(0..6, 0, 0..1);
    }
}

/// Maps the unit rectangle onto an axis-aligned rectangle given in window pixels.
fn pixel_rect(center_x: f32, center_y: f32, half_width: f32, half_height: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(
        2. * center_x / SIZE_X as f32 - 1.,
        1. - 2. * center_y / SIZE_Y as f32,
        0.,
    )) * Matrix4::from_nonuniform_scale(
        2. * half_width / SIZE_X as f32,
        2. * half_height / SIZE_Y as f32,
        1.,
    )
}

fn knob_transform() -> Matrix4<f32> {
    let radius = KNOB_RADIUS as f32;
    pixel_rect(KNOB_X as f32, KNOB_Y as f32, radius, radius)
}

/// The pointer is rotated in pixel space before being mapped to the window, so the non-square
/// window does not skew it.
fn pointer_transform(knob_value: f32) -> Matrix4<f32> {
    let radius = KNOB_RADIUS as f32;
    let angle = cgmath::Deg(KNOB_SWEEP_DEGREES / 2. - knob_value * KNOB_SWEEP_DEGREES);

    pixel_rect(KNOB_X as f32, KNOB_Y as f32, 1., 1.)
        * Matrix4::from_angle_z(angle)
        * Matrix4::from_translation(Vector3::new(0., radius * (1. - POINTER_LENGTH / 2.), 0.))
        * Matrix4::from_nonuniform_scale(radius * POINTER_WIDTH, radius * POINTER_LENGTH / 2., 1.)
}

/// The level bar fills from the left border in proportion to the knob position.
fn level_transform(fill: f32) -> Matrix4<f32> {
    let half_width = (SIZE_X - 2 * BORDER) as f32 * fill / 2.;
    let half_height = BAR_HEIGHT as f32 / 2.;
    pixel_rect(
        BORDER as f32 + half_width,
        BAR_Y as f32 + half_height,
        half_width,
        half_height,
    )
}

/// Places segment `segment` (0 for `a` through 6 for `g`) of the readout digit at `position`.
fn segment_transform(position: usize, segment: usize) -> Matrix4<f32> {
    let center_x = KNOB_X as f32 + READOUT_DIGIT_OFFSETS[position];
    let center_y = KNOB_Y as f32;
    let half_thickness = SEGMENT_THICKNESS / 2.;
    let (half_w, half_h) = (DIGIT_WIDTH / 2., DIGIT_HEIGHT / 2.);

    let (dx, dy, horizontal) = match segment {
        0 => (0., -half_h, true),
        1 => (half_w, -half_h / 2., false),
        2 => (half_w, half_h / 2., false),
        3 => (0., half_h, true),
        4 => (-half_w, half_h / 2., false),
        5 => (-half_w, -half_h / 2., false),
        _ => (0., 0., true),
    };
    if horizontal {
        pixel_rect(center_x + dx, center_y + dy, half_w, half_thickness)
    } else {
        pixel_rect(center_x + dx, center_y + dy, half_thickness, half_h / 2.)
    }
}

fn readout_point_transform() -> Matrix4<f32> {
    let half_thickness = SEGMENT_THICKNESS / 2.;
    pixel_rect(
        KNOB_X as f32 + READOUT_POINT_OFFSET,
        KNOB_Y as f32 + DIGIT_HEIGHT / 2.,
        half_thickness,
        half_thickness,
    )
}

/// The digits of the gain as the host displays it, e.g. `[1, 0, 0]` for `1.00`.
fn readout_digits(gain: f32) -> [usize; READOUT_DIGITS] {
    let mut digits = [0; READOUT_DIGITS];
    let text = GainParameter::format_value(gain);
    let parsed = text.chars().filter_map(|c| c.to_digit(10));
    for (slot, digit) in digits.iter_mut().zip(parsed) {
        *slot = digit as usize;
    }
    digits
}

fn segment_lit(digit: usize, segment: usize) -> bool {
    DIGIT_SEGMENTS[digit] & (1 << segment) != 0
}

impl Renderer {
    /// Creates a new `Renderer` by initializing the GPU to prepare it for rendering.
    pub fn new<W: raw_window_handle::HasRawWindowHandle>(handle: W) -> Result<Self, RendererError> {
        let instance = wgpu::Instance::new(wgpu::BackendBit::PRIMARY);

        // Acquire the window as a surface to be rendered on.
        // This is the only unsafe code in the plugin; it is only required to satisfy the
        // `raw_window_handle` API. Safety is upheld by taking ownership of `handle` in the
        // function signature, ensuring it is only ever used to create a single surface.
        let surface = unsafe { instance.create_surface(&handle) };

        // Get a handle to the GPU and a queue of commands to be uploaded to it while rendering.
        let (device, queue) = futures::executor::block_on(async {
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::LowPower,
                    compatible_surface: Some(&surface),
                })
                .await
                .ok_or(RendererError::NoAdapter)?;

            adapter
                .request_device(
                    &wgpu::DeviceDescriptor {
                        label: None,
                        features: wgpu::Features::empty(),
                        limits: wgpu::Limits::default(),
                    },
                    None,
                )
                .await
                .map_err(RendererError::RequestDevice)
        })?;

        // Shaders are written in GLSL and compiled to SPIR-V from `build.rs`.
        let vs_module = device.create_shader_module(&wgpu::include_spirv!(
            "../../../assets/generated/spirv/shape.vert.spv"
        ));
        let fs_module = device.create_shader_module(&wgpu::include_spirv!(
            "../../../assets/generated/spirv/shape.frag.spv"
        ));

        // Binding 0 is the shape's uniform block, read by both shader stages.
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: None,
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStage::VERTEX | wgpu::ShaderStage::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let sc_desc = wgpu::SwapChainDescriptor {
            usage: wgpu::TextureUsage::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: SIZE_X as u32,
            height: SIZE_Y as u32,
            present_mode: wgpu::PresentMode::Mailbox,
        };

        let swap_chain = device.create_swap_chain(&surface, &sc_desc);

        // A multisampled framebuffer is used for anti-aliasing.
        let multisampled_framebuffer =
            create_multisampled_framebuffer(&device, &sc_desc, MSAA_SAMPLES);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: None,
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: None,
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: "main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::InputStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float4, 1 => Float2],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: "main",
                targets: &[wgpu::ColorTargetState {
                    format: sc_desc.format,
                    color_blend: wgpu::BlendState {
                        src_factor: wgpu::BlendFactor::SrcAlpha,
                        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                        operation: wgpu::BlendOperation::Add,
                    },
                    alpha_blend: wgpu::BlendState {
                        src_factor: wgpu::BlendFactor::One,
                        dst_factor: wgpu::BlendFactor::One,
                        operation: wgpu::BlendOperation::Add,
                    },
                    write_mask: wgpu::ColorWrite::ALL,
                }],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: wgpu::CullMode::Back,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: MSAA_SAMPLES,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
        });

        // Every shape is this one rectangle split into two triangles, spanning [-1, 1] on both
        // axes before its transform is applied.
        let rectangle_vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: None,
                contents: [
                    Vertex::new(1., 1., 1., 0.),
                    Vertex::new(-1., 1., 0., 0.),
                    Vertex::new(-1., -1., 0., 1.),
                    Vertex::new(1., -1., 1., 1.),
                ]
                .as_bytes(),
                usage: wgpu::BufferUsage::VERTEX,
            });
        let rectangle_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: None,
            contents: [0u32, 1, 2, 2, 3, 0].as_bytes(),
            usage: wgpu::BufferUsage::INDEX,
        });

        let knob = Shape::new(
            &device,
            &bind_group_layout,
            knob_transform(),
            KNOB_COLOR,
            true,
        );
        let pointer = Shape::new(
            &device,
            &bind_group_layout,
            pointer_transform(0.5),
            ACCENT_COLOR,
            false,
        );
        let level_track = Shape::new(
            &device,
            &bind_group_layout,
            level_transform(1.),
            TRACK_COLOR,
            false,
        );
        let level = Shape::new(
            &device,
            &bind_group_layout,
            level_transform(0.5),
            ACCENT_COLOR,
            false,
        );

        let readout_segments = (0..READOUT_DIGITS)
            .map(|position| {
                let segment = |index| {
                    Shape::new(
                        &device,
                        &bind_group_layout,
                        segment_transform(position, index),
                        UNLIT_COLOR,
                        false,
                    )
                };
                [
                    segment(0),
                    segment(1),
                    segment(2),
                    segment(3),
                    segment(4),
                    segment(5),
                    segment(6),
                ]
            })
            .collect();
        let readout_point = Shape::new(
            &device,
            &bind_group_layout,
            readout_point_transform(),
            ACCENT_COLOR,
            false,
        );

        Ok(Self {
            device,
            queue,
            multisampled_framebuffer,
            swap_chain,

            pipeline,
            rectangle_index_buffer,
            rectangle_vertex_buffer,

            knob,
            pointer,
            level_track,
            level,
            readout_segments,
            readout_point,
        })
    }

    /// Render a single frame of the given interface state to the screen.
    pub fn draw_frame(&mut self, state: &InterfaceState) {
        let frame = match self.swap_chain.get_current_frame() {
            Ok(frame) => frame,
            Err(err) => {
                debug!("Skipping editor frame: {:?}", err);
                return;
            }
        };

        self.pointer.place(&self.queue, pointer_transform(state.knob_value));
        self.level.place(&self.queue, level_transform(state.knob_value));

        let digits = readout_digits(state.gain());
        let readout = self.readout_segments.iter().zip(&digits).enumerate();
        for (position, (segments, &digit)) in readout {
            for (index, segment) in segments.iter().enumerate() {
                let color = if segment_lit(digit, index) {
                    ACCENT_COLOR
                } else {
                    UNLIT_COLOR
                };
                segment.paint(&self.queue, segment_transform(position, index), color);
            }
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut rpass = Self::start_renderpass(
                &mut encoder,
                &frame.output.view,
                &self.multisampled_framebuffer,
            );
            rpass.set_pipeline(&self.pipeline);
            rpass.set_index_buffer(
                self.rectangle_index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.set_vertex_buffer(0, self.rectangle_vertex_buffer.slice(..));

            self.knob.draw(&mut rpass);
            self.pointer.draw(&mut rpass);
            self.level_track.draw(&mut rpass);
            self.level.draw(&mut rpass);
            for segment in self.readout_segments.iter().flatten() {
                segment.draw(&mut rpass);
            }
            self.readout_point.draw(&mut rpass);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Begin a renderpass that clears the frame to the background color.
    fn start_renderpass<'a>(
        encoder: &'a mut wgpu::CommandEncoder,
        view: &'a wgpu::TextureView,
        multisampled_framebuffer: &'a wgpu::TextureView,
    ) -> wgpu::RenderPass<'a> {
        let rpass_color_attachment = wgpu::RenderPassColorAttachmentDescriptor {
            attachment: multisampled_framebuffer,
            resolve_target: Some(view),
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(BACKGROUND_COLOR),
                store: true,
            },
        };

        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: None,
            color_attachments: &[rpass_color_attachment],
            depth_stencil_attachment: None,
        })
    }
}

/// Creates a new buffer that is sampled `sample_count` times more densely than the target output
/// surface, producing a more smooth anti-aliased appearance.
fn create_multisampled_framebuffer(
    device: &wgpu::Device,
    sc_desc: &wgpu::SwapChainDescriptor,
    sample_count: u32,
) -> wgpu::TextureView {
    let multisampled_texture_extent = wgpu::Extent3d {
        width: sc_desc.width,
        height: sc_desc.height,
        depth: 1,
    };
    let multisampled_frame_descriptor = &wgpu::TextureDescriptor {
        label: None,
        size: multisampled_texture_extent,
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: sc_desc.format,
        usage: wgpu::TextureUsage::RENDER_ATTACHMENT,
    };

    device
        .create_texture(multisampled_frame_descriptor)
        .create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    fn assert_near(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    fn to_pixels(transform: Matrix4<f32>, x: f32, y: f32) -> (f32, f32) {
        let ndc = transform * Vector4::new(x, y, 0., 1.);
        (
            (ndc.x + 1.) / 2. * SIZE_X as f32,
            (1. - ndc.y) / 2. * SIZE_Y as f32,
        )
    }

    #[test]
    fn knob_is_centered_and_round() {
        let (cx, cy) = to_pixels(knob_transform(), 0., 0.);
        assert_near(cx, KNOB_X as f32);
        assert_near(cy, KNOB_Y as f32);

        let (right, _) = to_pixels(knob_transform(), 1., 0.);
        let (_, top) = to_pixels(knob_transform(), 0., 1.);
        assert_near(right - cx, KNOB_RADIUS as f32);
        assert_near(cy - top, KNOB_RADIUS as f32);
    }

    #[test]
    fn pointer_points_up_at_unity_gain() {
        let (tip_x, tip_y) = to_pixels(pointer_transform(0.5), 0., 1.);
        assert_near(tip_x, KNOB_X as f32);
        assert_near(tip_y, (KNOB_Y - KNOB_RADIUS) as f32);
    }

    #[test]
    fn pointer_turns_clockwise_as_gain_rises() {
        let (low_x, _) = to_pixels(pointer_transform(0.1), 0., 1.);
        let (high_x, _) = to_pixels(pointer_transform(0.9), 0., 1.);
        assert!(low_x < KNOB_X as f32);
        assert!(high_x > KNOB_X as f32);
    }

    #[test]
    fn level_bar_fills_from_the_left_border() {
        let (left, _) = to_pixels(level_transform(0.5), -1., 0.);
        let (right, _) = to_pixels(level_transform(0.5), 1., 0.);
        assert_near(left, BORDER as f32);
        assert_near(right, SIZE_X as f32 / 2.);
    }

    #[test]
    fn readout_shows_the_host_text_digits() {
        assert_eq!(readout_digits(1.), [1, 0, 0]);
        assert_eq!(readout_digits(2.), [2, 0, 0]);
        assert_eq!(readout_digits(0.456), [0, 4, 6]);
        assert_eq!(readout_digits(0.), [0, 0, 0]);
    }

    #[test]
    fn seven_segment_patterns() {
        let lit = |digit| (0..7).filter(|&s| segment_lit(digit, s)).collect::<Vec<_>>();
        assert_eq!(lit(8), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(lit(1), vec![1, 2]);
        assert_eq!(lit(0), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(lit(7), vec![0, 1, 2]);
    }

    #[test]
    fn readout_fits_inside_the_pointer_sweep() {
        // The pointer starts this far from the knob center.
        let clear_radius = KNOB_RADIUS as f32 * (1. - POINTER_LENGTH);
        let corners = [(-1., -1.), (1., -1.), (1., 1.), (-1., 1.)];
        let placed = (0..READOUT_DIGITS)
            .flat_map(|position| (0..7).map(move |s| segment_transform(position, s)))
            .chain(std::iter::once(readout_point_transform()));
        for transform in placed {
            for &(x, y) in &corners {
                let (px, py) = to_pixels(transform, x, y);
                let distance = (px - KNOB_X as f32).hypot(py - KNOB_Y as f32);
                assert!(distance < clear_radius, "segment corner at {}", distance);
            }
        }
    }
}

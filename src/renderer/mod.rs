pub mod pipeline;
pub mod sprite_atlas;
pub mod text;
pub mod texture;

use std::collections::HashMap;
use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use pipeline::{SpritePipeline, SpriteVertex, create_sprite_pipeline, quad, rect_quad, BLACK, WHITE};
use sprite_atlas::{SpriteAtlas, SpriteData};
use text::{layout_lines, GlyphQuad};
use texture::GpuTexture;

use crate::assets::Assets;
use crate::camera::CameraUniform;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::scene::{Frame, SpriteCommand};
use crate::world::SpriteId;

/// Splash text metrics, in pixels.
const INTRO_FONT_SIZE: f32 = 40.0;
const INTRO_LEFT: f32 = 50.0;
const INTRO_TOP: f32 = 100.0;
const INTRO_SPACING: f32 = 15.0;

/// Which texture a batch samples from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Sprites,
    Background,
    Font,
}

/// Vertices drawn with one texture, in submission order.
#[derive(Debug)]
pub struct DrawBatch {
    pub slot: TextureSlot,
    pub vertices: Vec<SpriteVertex>,
}

pub struct Renderer {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: SpritePipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    sprites: GpuTexture,
    sprite_uvs: HashMap<SpriteId, SpriteData>,
    background: GpuTexture,
    font: Option<GpuTexture>,
    /// Intro text, laid out once at startup.
    intro: Vec<GlyphQuad>,
    viewport: [f32; 2],
}

impl Renderer {
    pub async fn new(window: Arc<Window>, assets: &Assets, game: &GameConfig) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(|e| GameError::Graphics(format!("cannot create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(|e| GameError::Graphics(format!("no suitable GPU adapter found: {e}")))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .map_err(|e| GameError::Graphics(format!("failed to create device: {e}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = *caps
            .formats
            .first()
            .ok_or_else(|| GameError::Graphics("surface reports no formats".into()))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_sprite_pipeline(&device, format);

        // Drawing happens in logical viewport pixels; the projection maps them
        // onto whatever physical size the surface ends up with.
        let viewport = [game.viewport_width as f32, game.viewport_height as f32];
        let cam_uniform = CameraUniform::screen_ortho(viewport[0], viewport[1]);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera_buffer"),
            contents: bytemuck::cast_slice(&[cam_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let atlas = SpriteAtlas::compose(&[
            (SpriteId::Wall, &assets.wall),
            (SpriteId::Road, &assets.road),
            (SpriteId::Player, &assets.player),
        ]);
        let layout = &pipeline.texture_bind_group_layout;
        let sprites = GpuTexture::from_rgba(&device, &queue, layout, &atlas.image, "sprite_atlas");
        let background = GpuTexture::from_rgba(&device, &queue, layout, &assets.background, "background");

        let (font, intro) = match &assets.font {
            Some(f) => (
                Some(GpuTexture::from_rgba(&device, &queue, layout, &f.image, "font")),
                layout_lines(&game.intro_text, &f.font, INTRO_FONT_SIZE, INTRO_LEFT, INTRO_TOP, INTRO_SPACING),
            ),
            None => (None, Vec::new()),
        };

        tracing::info!(?format, width = config.width, height = config.height, "renderer ready");

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            camera_buffer,
            camera_bind_group,
            sprites,
            sprite_uvs: atlas.sprites,
            background,
            font,
            intro,
            viewport,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let uniform = CameraUniform::screen_ortho(self.viewport[0], self.viewport[1]);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(std::slice::from_ref(&uniform)));
    }

    /// Turn a frame description into textured batches.
    pub fn batches(&self, frame: &Frame) -> Vec<DrawBatch> {
        match frame {
            Frame::Splash => {
                let mut out = vec![DrawBatch {
                    slot: TextureSlot::Background,
                    vertices: background_vertices(self.viewport).to_vec(),
                }];
                if self.font.is_some() && !self.intro.is_empty() {
                    out.push(DrawBatch { slot: TextureSlot::Font, vertices: text_vertices(&self.intro) });
                }
                out
            }
            Frame::World(commands) => vec![DrawBatch {
                slot: TextureSlot::Sprites,
                vertices: world_vertices(commands, &self.sprite_uvs),
            }],
        }
    }

    fn bind_group_for(&self, slot: TextureSlot) -> Option<&wgpu::BindGroup> {
        match slot {
            TextureSlot::Sprites => Some(&self.sprites.bind_group),
            TextureSlot::Background => Some(&self.background.bind_group),
            TextureSlot::Font => self.font.as_ref().map(|f| &f.bind_group),
        }
    }

    /// Clear to black, draw `frame`, present.
    pub fn render(&mut self, frame: &Frame) -> std::result::Result<(), wgpu::SurfaceError> {
        let batches = self.batches(frame);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let buffers: Vec<(TextureSlot, wgpu::Buffer, u32)> = batches
            .iter()
            .filter(|b| !b.vertices.is_empty())
            .map(|b| {
                let buf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite_vertex_buffer"),
                    contents: bytemuck::cast_slice(&b.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                (b.slot, buf, b.vertices.len() as u32)
            })
            .collect();

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&self.pipeline.render_pipeline);
            pass.set_bind_group(0, &self.camera_bind_group, &[]);

            for (slot, buf, count) in &buffers {
                let Some(bind_group) = self.bind_group_for(*slot) else { continue };
                pass.set_bind_group(1, bind_group, &[]);
                pass.set_vertex_buffer(0, buf.slice(..));
                pass.draw(0..*count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

// ── Vertex builders (pure, GPU-free) ──────────────────────────────────────────

/// Full-viewport quad showing the whole background image, stretched to fit.
pub fn background_vertices(viewport: [f32; 2]) -> [SpriteVertex; 6] {
    quad([0.0, 0.0], viewport, [0.0, 0.0], [1.0, 1.0], WHITE)
}

/// Black glyph quads for the intro text.
pub fn text_vertices(glyphs: &[GlyphQuad]) -> Vec<SpriteVertex> {
    glyphs
        .iter()
        .flat_map(|g| quad(g.pos, g.size, g.uv_min, g.uv_max, BLACK))
        .collect()
}

/// Sprite quads in command order. Commands whose sprite is missing from the
/// atlas are skipped.
pub fn world_vertices(commands: &[SpriteCommand], uvs: &HashMap<SpriteId, SpriteData>) -> Vec<SpriteVertex> {
    let mut verts = Vec::with_capacity(commands.len() * 6);
    for cmd in commands {
        let Some(data) = uvs.get(&cmd.sprite) else { continue };
        verts.extend_from_slice(&rect_quad(&cmd.rect, data.uv_min, data.uv_max, WHITE));
    }
    verts
}

//! Hero copy and CTA labels drawn with glyphon on top of the overlay.

use glyphon::cosmic_text::{Align, Weight};
use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, Resolution, Shaping, SwashCache,
    TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
};

use crate::error::Result;
use crate::overlay::TextRun;

/// Runs at or above this size are set bold
const BOLD_FROM_PX: f32 = 40.0;

/// Shaped text ready for the overlay pass
pub struct TextLayer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    renderer: TextRenderer,
    buffers: Vec<(Buffer, TextRun)>,
}

impl TextLayer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let renderer =
            TextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system,
            swash_cache,
            viewport,
            atlas,
            renderer,
            buffers: Vec::new(),
        }
    }

    /// Reshape all runs (after startup and every resize)
    pub fn set_runs(&mut self, runs: &[TextRun]) {
        self.buffers = runs
            .iter()
            .map(|run| {
                let buffer = shape_run(&mut self.font_system, run);
                (buffer, run.clone())
            })
            .collect();
        log::debug!("Shaped {} text runs", self.buffers.len());
    }

    /// Upload glyphs for the next frame
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.viewport.update(queue, Resolution { width, height });

        let areas = self.buffers.iter().map(|(buffer, run)| {
            let [r, g, b, a] = run.color;
            TextArea {
                buffer,
                left: run.left,
                top: run.top,
                scale: 1.0,
                bounds: TextBounds {
                    left: run.left.floor() as i32,
                    top: run.top.floor() as i32,
                    right: (run.left + run.width).ceil() as i32,
                    bottom: (run.top + run.height).ceil() as i32,
                },
                default_color: Color::rgba(r, g, b, a),
                custom_glyphs: &[],
            }
        });

        self.renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        )?;
        Ok(())
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) -> Result<()> {
        self.renderer.render(&self.atlas, &self.viewport, pass)?;
        Ok(())
    }

    /// Release atlas space for glyphs not used by the last frame
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

fn shape_run(font_system: &mut FontSystem, run: &TextRun) -> Buffer {
    let mut buffer = Buffer::new(font_system, Metrics::new(run.font_px, run.line_px));
    buffer.set_size(font_system, Some(run.width), Some(run.height));

    let weight = if run.font_px >= BOLD_FROM_PX {
        Weight::BOLD
    } else {
        Weight::NORMAL
    };
    let attrs = Attrs::new().family(Family::SansSerif).weight(weight);
    buffer.set_text(font_system, &run.text, attrs, Shaping::Advanced);

    for line in buffer.lines.iter_mut() {
        line.set_align(Some(Align::Center));
    }
    buffer.shape_until_scroll(font_system, false);
    buffer
}

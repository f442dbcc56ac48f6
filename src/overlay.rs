//! Foreground composition: depth gradient over the field, hero text layout
//! and CTA hit-testing.
//!
//! The gradient and the text are visual only and never claim the pointer.
//! CTA rectangles are the only regions that stop a click from reaching the
//! ground plane.

use crate::params::{CtaKind, OverlayLayout, ScreenRect};
use crate::rendering::OverlayUniforms;

/// Capacity of the overlay uniform block
pub const MAX_CTAS: usize = 4;

/// Where a pointer press is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A call-to-action claims the click
    Cta(CtaKind),
    /// The click passes through to ripple seeding
    Field,
}

/// Line height as a multiple of font size
const LINE_SPACING: f32 = 1.25;

/// Text laid out in surface pixels (origin top-left), centered horizontally
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub font_px: f32,
    pub line_px: f32,
    /// sRGB
    pub color: [u8; 4],
}

/// Overlay layout bound to the current surface size
pub struct Overlay {
    layout: OverlayLayout,
    width: u32,
    height: u32,
}

impl Overlay {
    pub fn new(layout: OverlayLayout, width: u32, height: u32) -> Self {
        if layout.ctas.len() > MAX_CTAS {
            log::warn!(
                "Overlay has {} CTAs, only the first {} are drawn and clickable",
                layout.ctas.len(),
                MAX_CTAS
            );
        }
        Self {
            layout,
            width,
            height,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Route a press at pixel (x, y), origin top-left
    pub fn route(&self, x: f64, y: f64) -> PointerTarget {
        if self.width == 0 || self.height == 0 {
            return PointerTarget::Field;
        }

        let u = (x / self.width as f64) as f32;
        let v = (y / self.height as f64) as f32;

        self.layout
            .ctas
            .iter()
            .take(MAX_CTAS)
            .find(|cta| cta.rect.contains(u, v))
            .map_or(PointerTarget::Field, |cta| PointerTarget::Cta(cta.kind))
    }

    /// Hero copy followed by one label per drawn CTA
    pub fn text_runs(&self) -> Vec<TextRun> {
        let width = self.width as f32;
        let height = self.height as f32;

        let copy = self.layout.copy.iter().map(|block| {
            let font_px = block.font_size * height;
            TextRun {
                text: block.text.clone(),
                left: block.rect.x * width,
                top: block.rect.y * height,
                width: block.rect.width * width,
                height: block.rect.height * height,
                font_px,
                line_px: font_px * LINE_SPACING,
                color: block.color,
            }
        });

        let labels = self.layout.ctas.iter().take(MAX_CTAS).map(|cta| {
            let font_px = self.layout.label_font_size * height;
            let line_px = font_px * LINE_SPACING;
            let ScreenRect {
                x,
                y,
                width: rect_width,
                height: rect_height,
            } = cta.rect;
            TextRun {
                text: cta.kind.label().to_string(),
                left: x * width,
                // Single line, centered vertically in the panel
                top: y * height + (rect_height * height - line_px) / 2.0,
                width: rect_width * width,
                height: line_px,
                font_px,
                line_px,
                color: self.layout.label_color,
            }
        });

        copy.chain(labels).collect()
    }

    /// Uniform block consumed by the overlay shader
    pub fn uniforms(&self) -> OverlayUniforms {
        let mut uniforms = OverlayUniforms {
            gradient: [
                self.layout.gradient_start,
                self.layout.gradient_end_alpha,
                0.0,
                0.0,
            ],
            rects: [[0.0; 4]; MAX_CTAS],
            colors: [[0.0; 4]; MAX_CTAS],
        };

        let mut count = 0;
        for (slot, cta) in self.layout.ctas.iter().take(MAX_CTAS).enumerate() {
            uniforms.rects[slot] = [cta.rect.x, cta.rect.y, cta.rect.width, cta.rect.height];
            uniforms.colors[slot] = cta.color;
            count += 1;
        }
        uniforms.gradient[2] = count as f32;

        uniforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CtaRegion, ScreenRect};

    fn default_overlay() -> Overlay {
        Overlay::new(OverlayLayout::default(), 1000, 1000)
    }

    #[test]
    fn test_cta_claims_click() {
        let overlay = default_overlay();

        assert_eq!(
            overlay.route(400.0, 580.0),
            PointerTarget::Cta(CtaKind::GetProposal)
        );
        assert_eq!(
            overlay.route(600.0, 580.0),
            PointerTarget::Cta(CtaKind::ViewWork)
        );
    }

    #[test]
    fn test_gradient_and_gaps_pass_through() {
        let overlay = default_overlay();

        // Between the two buttons
        assert_eq!(overlay.route(500.0, 580.0), PointerTarget::Field);
        // Inside the bottom gradient
        assert_eq!(overlay.route(500.0, 950.0), PointerTarget::Field);
        // Top of the screen
        assert_eq!(overlay.route(10.0, 10.0), PointerTarget::Field);
    }

    #[test]
    fn test_routing_follows_resize() {
        let mut overlay = default_overlay();
        overlay.set_viewport(2000, 1000);

        assert_eq!(overlay.route(400.0, 580.0), PointerTarget::Field);
        assert_eq!(
            overlay.route(800.0, 580.0),
            PointerTarget::Cta(CtaKind::GetProposal)
        );
    }

    #[test]
    fn test_cta_labels_sit_inside_their_panels() {
        let overlay = Overlay::new(OverlayLayout::default(), 1280, 720);
        let runs = overlay.text_runs();

        for kind in [CtaKind::GetProposal, CtaKind::ViewWork] {
            let label = runs.iter().find(|run| run.text == kind.label()).unwrap();
            let center_x = label.left + label.width / 2.0;
            let center_y = label.top + label.height / 2.0;

            assert!(label.top >= 0.55 * 720.0);
            assert!(label.top + label.height <= 0.62 * 720.0);
            assert_eq!(
                overlay.route(center_x as f64, center_y as f64),
                PointerTarget::Cta(kind)
            );
        }
    }

    #[test]
    fn test_hero_copy_is_laid_out() {
        let overlay = Overlay::new(OverlayLayout::default(), 1280, 720);
        let runs = overlay.text_runs();

        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0].text, "Digital Marketing Agency");
        assert_eq!(runs[1].text, "Growth, Engineered.");
        assert!(runs[2].text.starts_with("Performance-first digital marketing"));
        assert!(runs[2].text.contains("business. We engineer"));

        // Headline is the largest run and ends above the buttons
        let headline = &runs[1];
        assert!(runs.iter().all(|run| run.font_px <= headline.font_px));
        assert!(headline.top + headline.height <= 0.55 * 720.0);
    }

    #[test]
    fn test_text_follows_resize() {
        let mut overlay = Overlay::new(OverlayLayout::default(), 1280, 720);
        let before = overlay.text_runs();
        overlay.set_viewport(2560, 1440);
        let after = overlay.text_runs();

        for (small, large) in before.iter().zip(&after) {
            assert!((large.font_px - 2.0 * small.font_px).abs() < 1e-3);
            assert!((large.left - 2.0 * small.left).abs() < 1e-3);
            assert!((large.top - 2.0 * small.top).abs() < 1e-3);
        }
    }

    #[test]
    fn test_uniforms_capped_at_capacity() {
        let cta = CtaRegion {
            kind: CtaKind::ViewWork,
            rect: ScreenRect::new(0.0, 0.0, 0.1, 0.1),
            color: [1.0; 4],
        };
        let layout = OverlayLayout {
            ctas: vec![cta; MAX_CTAS + 2],
            ..OverlayLayout::default()
        };
        let overlay = Overlay::new(layout, 100, 100);

        assert_eq!(overlay.uniforms().gradient[2], MAX_CTAS as f32);
        assert_eq!(default_overlay().uniforms().gradient[2], 2.0);
    }
}

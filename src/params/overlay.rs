//! Foreground overlay layout: depth gradient, hero copy and call-to-action regions.

/// Which call-to-action a region represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaKind {
    /// Opens the proposal flow
    GetProposal,
    /// Navigates to the portfolio
    ViewWork,
}

impl CtaKind {
    pub fn label(self) -> &'static str {
        match self {
            CtaKind::GetProposal => "Get Proposal",
            CtaKind::ViewWork => "View Work",
        }
    }
}

/// Axis-aligned rectangle in normalized screen space (0..1, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive of the top-left edge, exclusive of the bottom-right edge
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u >= self.x && u < self.x + self.width && v >= self.y && v < self.y + self.height
    }
}

/// A rendered button that claims pointer clicks
#[derive(Debug, Clone, Copy)]
pub struct CtaRegion {
    pub kind: CtaKind,
    pub rect: ScreenRect,
    /// Fill color (linear RGBA)
    pub color: [f32; 4],
}

/// A block of hero copy, centered horizontally inside its rectangle
#[derive(Debug, Clone)]
pub struct CopyBlock {
    pub text: String,
    pub rect: ScreenRect,
    /// Font size as a fraction of surface height
    pub font_size: f32,
    /// sRGB text color
    pub color: [u8; 4],
}

impl CopyBlock {
    pub fn new(text: &str, rect: ScreenRect, font_size: f32, color: [u8; 4]) -> Self {
        Self {
            text: text.to_string(),
            rect,
            font_size,
            color,
        }
    }
}

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Overlay layout
#[derive(Debug, Clone)]
pub struct OverlayLayout {
    /// Normalized height where the bottom gradient starts (transparent above)
    pub gradient_start: f32,

    /// Black alpha reached at the bottom edge
    pub gradient_end_alpha: f32,

    /// Buttons drawn above the field (at most `overlay::MAX_CTAS`)
    pub ctas: Vec<CtaRegion>,

    /// Eyebrow, headline and subcopy
    pub copy: Vec<CopyBlock>,

    /// CTA label size as a fraction of surface height
    pub label_font_size: f32,

    /// sRGB CTA label color
    pub label_color: [u8; 4],
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            gradient_start: 0.5,
            gradient_end_alpha: 0.5,
            ctas: vec![
                CtaRegion {
                    kind: CtaKind::GetProposal,
                    rect: ScreenRect::new(0.35, 0.55, 0.14, 0.07),
                    color: [0.94, 0.27, 0.27, 0.9], // Brand red
                },
                CtaRegion {
                    kind: CtaKind::ViewWork,
                    rect: ScreenRect::new(0.51, 0.55, 0.14, 0.07),
                    color: [1.0, 1.0, 1.0, 0.15], // Outline-style, mostly transparent
                },
            ],
            copy: vec![
                CopyBlock::new(
                    "Digital Marketing Agency",
                    ScreenRect::new(0.1, 0.2, 0.8, 0.05),
                    0.025,
                    WHITE,
                ),
                CopyBlock::new(
                    "Growth, Engineered.",
                    ScreenRect::new(0.05, 0.26, 0.9, 0.13),
                    0.09,
                    [239, 68, 68, 255], // Brand red
                ),
                CopyBlock::new(
                    "Performance-first digital marketing for brands that mean business. \
                     We engineer growth through data-driven strategies and relentless optimization.",
                    ScreenRect::new(0.2, 0.41, 0.6, 0.11),
                    0.028,
                    WHITE,
                ),
            ],
            label_font_size: 0.024,
            label_color: WHITE,
        }
    }
}

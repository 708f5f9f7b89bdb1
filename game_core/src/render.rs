//! Projection of a frame onto a 2D drawing surface
//!
//! `render` only issues draw calls; it never touches the simulation. Any
//! backend that can fill rectangles, fill circles and print text can show
//! the game.

use crate::{Config, Params, Snapshot};

/// RGBA colour, sRGB-encoded, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque colour from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self([
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
            1.0,
        ])
    }

    /// Same colour with linear-light RGB, for sRGB render targets
    pub fn to_linear(self) -> [f32; 4] {
        let [r, g, b, a] = self.0;
        [
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a,
        ]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::hex(0x111111);
    pub const NET: Color = Color::hex(0xffffff);
    pub const LEFT_PADDLE: Color = Color::hex(0x4caf50);
    pub const RIGHT_PADDLE: Color = Color::hex(0xf44336);
    pub const BALL: Color = Color::hex(0xffffff);
    pub const SCORE: Color = Color::hex(0xffffff);
}

/// Drawing surface
pub trait Painter {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);

    /// Text whose baseline starts at `(x, y)`; `size` is the font size in pixels
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

/// Paint one frame: background, net, paddles, ball, scores
pub fn render<P: Painter>(snapshot: &Snapshot, config: &Config, painter: &mut P) {
    let width = config.playfield_width;
    let height = config.playfield_height;

    painter.fill_rect(0.0, 0.0, width, height, palette::BACKGROUND);

    // Dashed net
    let net_x = width / 2.0 - Params::NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < height {
        painter.fill_rect(net_x, y, Params::NET_WIDTH, Params::NET_DASH, palette::NET);
        y += Params::NET_SPACING;
    }

    for (paddle, color) in [
        (&snapshot.left, palette::LEFT_PADDLE),
        (&snapshot.right, palette::RIGHT_PADDLE),
    ] {
        painter.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, color);
    }

    // Drawn as its collision box
    let ball = &snapshot.ball;
    painter.fill_rect(ball.pos.x, ball.pos.y, ball.size, ball.size, palette::BALL);

    let size = Params::SCORE_FONT_SIZE;
    let baseline = Params::SCORE_BASELINE;
    painter.fill_text(
        &snapshot.score.left.to_string(),
        width / 4.0,
        baseline,
        size,
        palette::SCORE,
    );
    painter.fill_text(
        &snapshot.score.right.to_string(),
        width * 3.0 / 4.0,
        baseline,
        size,
        palette::SCORE,
    );
}

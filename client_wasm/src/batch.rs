//! Collects draw calls as GPU instances

use game_core::{Color, Painter};

use crate::glyphs;

pub const SHAPE_RECT: f32 = 0.0;
pub const SHAPE_CIRCLE: f32 = 1.0;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub rect: [f32; 4],  // x, y, width, height in pixels
    pub tint: [f32; 4],  // linear rgba
    pub shape: [f32; 4], // x = SHAPE_RECT or SHAPE_CIRCLE, rest unused
}

/// One frame's worth of quads, in paint order
#[derive(Debug, Default)]
pub struct QuadBatch {
    instances: Vec<InstanceData>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn push(&mut self, rect: [f32; 4], color: Color, shape: f32) {
        self.instances.push(InstanceData {
            rect,
            tint: color.to_linear(),
            shape: [shape, 0.0, 0.0, 0.0],
        });
    }
}

impl Painter for QuadBatch {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.push([x, y, width, height], color, SHAPE_RECT);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let d = radius * 2.0;
        self.push([cx - radius, cy - radius, d, d], color, SHAPE_CIRCLE);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        for seg in glyphs::layout(text, x, y, size) {
            self.push([seg.x, seg.y, seg.width, seg.height], color, SHAPE_RECT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{palette, render, Config, Game};

    #[test]
    fn test_circle_becomes_bounding_quad() {
        let mut batch = QuadBatch::new();
        batch.fill_circle(50.0, 60.0, 7.0, palette::BALL);

        let inst = batch.instances()[0];
        assert_eq!(inst.rect, [43.0, 53.0, 14.0, 14.0]);
        assert_eq!(inst.shape[0], SHAPE_CIRCLE);
        assert_eq!(inst.tint, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_text_expands_to_segments() {
        let mut batch = QuadBatch::new();
        batch.fill_text("10", 0.0, 50.0, 40.0, palette::SCORE);
        assert_eq!(batch.len(), 2 + 6);
        assert!(batch.instances().iter().all(|i| i.shape[0] == SHAPE_RECT));
    }

    #[test]
    fn test_full_frame_and_clear() {
        let game = Game::with_seed(Config::new(), 8);
        let mut batch = QuadBatch::new();

        render(&game.snapshot(), &game.config, &mut batch);

        // background + 20 net dashes + 2 paddles + ball + "0" + "0"
        assert_eq!(batch.len(), 1 + 20 + 2 + 1 + 6 + 6);
        assert_eq!(batch.instances()[0].rect, [0.0, 0.0, 800.0, 600.0]);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_ball_quad_matches_collision_box() {
        let game = Game::with_seed(Config::new(), 8);
        let snap = game.snapshot();
        let mut batch = QuadBatch::new();

        render(&snap, &game.config, &mut batch);

        let ball = batch.instances()[1 + 20 + 2];
        assert_eq!(
            ball.rect,
            [snap.ball.pos.x, snap.ball.pos.y, snap.ball.size, snap.ball.size]
        );
        assert_eq!(ball.shape[0], SHAPE_RECT);
        assert!(batch.instances().iter().all(|i| i.shape[0] == SHAPE_RECT));
    }

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 48);
    }
}

use glam::Vec2;

/// Axis-aligned bounding box in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive test of an x coordinate against the horizontal span
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max.x
    }

    /// Inclusive overlap of the vertical spans
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y >= other.min.y && self.min.y <= other.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pos_size() {
        let b = Aabb::from_pos_size(Vec2::new(30.0, 250.0), Vec2::new(12.0, 100.0));
        assert_eq!(b.max, Vec2::new(42.0, 350.0));
        assert_eq!(b.center(), Vec2::new(36.0, 300.0));
        assert_eq!(b.height(), 100.0);
    }

    #[test]
    fn test_contains_x_is_inclusive() {
        let b = Aabb::new(Vec2::new(30.0, 0.0), Vec2::new(42.0, 10.0));
        assert!(b.contains_x(30.0));
        assert!(b.contains_x(42.0));
        assert!(!b.contains_x(42.01));
        assert!(!b.contains_x(29.99));
    }

    #[test]
    fn test_overlaps_y_touching_edges() {
        let paddle = Aabb::new(Vec2::new(0.0, 100.0), Vec2::new(10.0, 200.0));
        let above = Aabb::new(Vec2::new(0.0, 86.0), Vec2::new(10.0, 100.0));
        let clear = Aabb::new(Vec2::new(0.0, 80.0), Vec2::new(10.0, 94.0));
        assert!(above.overlaps_y(&paddle));
        assert!(!clear.overlaps_y(&paddle));
    }
}

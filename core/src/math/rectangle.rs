use crate::math::vector::Vec2f;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Vec2f {
        Vec2f::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2f {
        Vec2f::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn contains(&self, point: Vec2f) -> bool {
        let (min_x, max_x) = ordered(self.x, self.x + self.width);
        let (min_y, max_y) = ordered(self.y, self.y + self.height);
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

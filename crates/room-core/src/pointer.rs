use glam::Vec2;

/// Last pointer position in normalized device coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Overwrites the stored position. Returns `None` (and leaves the state
    /// untouched) when the viewport has no area.
    pub fn update(&mut self, px: f32, py: f32, width: f32, height: f32) -> Option<Vec2> {
        let ndc = to_ndc(px, py, width, height)?;
        self.ndc = ndc;
        Some(ndc)
    }
}

/// `x = (px/w)*2-1`, `y = -(py/h)*2+1`.
#[inline]
pub fn to_ndc(px: f32, py: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    Some(Vec2::new((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0))
}

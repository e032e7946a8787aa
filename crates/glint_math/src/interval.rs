/// The range of distances along a [`Ray`](crate::Ray) that count as a
/// valid hit.
///
/// `min` is the self-intersection epsilon and `max` starts at the
/// background cutoff; intersection loops shrink `max` to the nearest
/// hit found so far, so later candidates are rejected early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True when t lies strictly between min and max.
    ///
    /// Both bounds are exclusive: a hit exactly at the epsilon is
    /// treated as self-intersection, and one exactly at the current
    /// nearest distance does not replace it.
    pub fn surrounds(&self, t: f32) -> bool {
        self.min < t && t < self.max
    }
}

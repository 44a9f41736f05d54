use glam::Vec3;

/// Horizontal drift of the square, bouncing between `-limit` and `limit`.
///
/// Advances one fixed step per frame tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Drift {
    offset: f32,
    velocity: f32,
    limit: f32,
}

impl Drift {
    /// Where the square sits before any drift is applied.
    pub const BASE: Vec3 = Vec3::new(0.0, 0.0, -6.0);

    pub fn new(velocity: f32, limit: f32) -> Self {
        Self {
            offset: 0.0,
            velocity,
            limit: limit.abs(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Moves one tick, reflecting off either bound.
    pub fn step(&mut self) {
        let next = self.offset + self.velocity;
        if next > self.limit {
            self.offset = 2.0 * self.limit - next;
            self.velocity = -self.velocity;
        } else if next < -self.limit {
            self.offset = -2.0 * self.limit - next;
            self.velocity = -self.velocity;
        } else {
            self.offset = next;
        }
    }

    /// Translation for the model-view this tick.
    pub fn translation(&self) -> Vec3 {
        Self::BASE + Vec3::new(self.offset, 0.0, 0.0)
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::new(0.25, 80.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_base() {
        assert_eq!(Drift::default().translation(), Drift::BASE);
    }

    #[test]
    fn moves_by_velocity() {
        let mut d = Drift::new(0.5, 10.0);
        d.step();
        d.step();
        assert_eq!(d.offset(), 1.0);
        assert_eq!(d.translation(), Vec3::new(1.0, 0.0, -6.0));
    }

    #[test]
    fn reflects_off_upper_bound() {
        let mut d = Drift::new(3.0, 4.0);
        d.step(); // 3
        d.step(); // 6 -> 2, heading back
        assert_eq!(d.offset(), 2.0);
        d.step();
        assert_eq!(d.offset(), -1.0);
    }

    #[test]
    fn reflects_off_lower_bound() {
        let mut d = Drift::new(-3.0, 4.0);
        d.step();
        d.step();
        assert_eq!(d.offset(), -2.0);
    }

    #[test]
    fn never_leaves_the_bounds() {
        let mut d = Drift::default();
        for _ in 0..10_000 {
            d.step();
            assert!(d.offset().abs() <= 80.0);
        }
    }
}

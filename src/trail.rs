use crate::items::Circle;

pub const TRAJECTORY_LENGTH: usize = 100;
/// Radius of the newest trail sample when the buffer is full.
pub const TRAJECTORY_WIDTH: f64 = 10.0;

/// Bounded history of circle snapshots, oldest evicted first.
///
/// Samples are copies, so the live circle can keep moving without touching
/// what was recorded.
pub struct Trajectory {
    samples: Vec<Circle>,
    capacity: usize,
    /// Slot holding the oldest sample once the buffer has wrapped.
    head: usize,
}

impl Trajectory {
    pub fn new(capacity: usize) -> Trajectory {
        Trajectory {
            samples: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn record(&mut self, circle: Circle) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() < self.capacity {
            self.samples.push(circle);
        } else {
            self.samples[self.head] = circle;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        let (newer, older) = self.samples.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Samples with the radius they are drawn at, tapering toward the oldest.
    pub fn tapered(&self) -> impl Iterator<Item = Circle> + '_ {
        let capacity = self.capacity as f64;
        self.iter().enumerate().map(move |(i, sample)| Circle {
            radius: TRAJECTORY_WIDTH * i as f64 / capacity,
            ..*sample
        })
    }
}

impl Default for Trajectory {
    fn default() -> Trajectory {
        Trajectory::new(TRAJECTORY_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(i: usize) -> Circle {
        Circle::new([i as f64, 0.0], None, Some(5.0), None)
    }

    fn xs(trail: &Trajectory) -> Vec<f64> {
        trail.iter().map(|c| c.position[0]).collect()
    }

    #[test]
    fn grows_until_full() {
        let mut trail = Trajectory::new(4);
        assert!(trail.is_empty());
        for i in 0..3 {
            trail.record(sample(i));
        }
        assert_eq!(trail.len(), 3);
        assert!(!trail.is_full());
        assert_eq!(xs(&trail), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn keeps_last_capacity_samples_in_order() {
        let mut trail = Trajectory::default();
        let k = 37;
        for i in 0..TRAJECTORY_LENGTH + k {
            trail.record(sample(i));
        }
        assert_eq!(trail.len(), TRAJECTORY_LENGTH);
        let expected: Vec<f64> = (k..TRAJECTORY_LENGTH + k).map(|i| i as f64).collect();
        assert_eq!(xs(&trail), expected);
    }

    #[test]
    fn snapshots_do_not_follow_the_live_circle() {
        let mut trail = Trajectory::new(3);
        let mut live = sample(1);
        trail.record(live);
        live.position = [99.0, 99.0];
        assert_eq!(trail.iter().next().map(|c| c.position), Some([1.0, 0.0]));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut trail = Trajectory::new(0);
        trail.record(sample(1));
        assert!(trail.is_empty());
    }

    #[test]
    fn tapered_radius_grows_with_index() {
        let mut trail = Trajectory::default();
        for i in 0..TRAJECTORY_LENGTH + 5 {
            trail.record(sample(i));
        }
        let radii: Vec<f64> = trail.tapered().map(|c| c.radius).collect();
        assert_eq!(radii[0], 0.0);
        assert_eq!(radii[50], 5.0);
        assert!(radii.windows(2).all(|w| w[0] < w[1]));
        // Tapering does not rewrite what was recorded.
        assert!(trail.iter().all(|c| c.radius == 5.0));
    }
}

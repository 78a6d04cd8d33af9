use crate::items::{Circle, Physics};
use crate::library::*;
use crate::surface::{Surface, fill_circle};
use crate::trail::Trajectory;
use anyhow::Result;
use log::{debug, trace, warn};
use rand::Rng;

pub const WINDOW_WIDTH: u32 = 900;
pub const WINDOW_HEIGHT: u32 = 600;

pub const COLOR_WHITE: u32 = 0xffffffff;
pub const COLOR_BLACK: u32 = 0x00000000;
pub const COLOR_GRAY: u32 = 0xf1f1f1f1;
pub const COLOR_ORANGE: u32 = 0x00ff763b;
pub const BACKGROUND: u32 = 0x0f0f0f0f;

/// Horizontal speed added along the direction of travel by a boost.
const BOOST_KICK: f64 = 5.0;
/// Vertical velocity a boost sets, upward.
const BOOST_LIFT: f64 = -20.0;

const SCATTER_RADIUS: std::ops::Range<f64> = 20.0..60.0;
const SCATTER_SPEED: std::ops::Range<f64> = -15.0..15.0;
const SCATTER_ATTEMPTS_PER_CIRCLE: usize = 100;
/// Most circles `scattered` will try to place. Far more than fit in the window.
pub const MAX_SCATTER_CIRCLES: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Several circles that collide with each other.
    MultiBody,
    /// One circle that leaves a tapering trail and can come to rest.
    Trail,
}

/// Everything the frame loop simulates and draws.
pub struct Scene {
    variant: Variant,
    physics: Physics,
    circles: Vec<Circle>,
    trail: Option<Trajectory>,
}

impl Scene {
    pub fn new(variant: Variant, circles: Vec<Circle>) -> Scene {
        let (width, height) = (WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64);
        let (physics, trail) = match variant {
            Variant::MultiBody => (Physics::multi_body(width, height), None),
            Variant::Trail => (Physics::trail(width, height), Some(Trajectory::default())),
        };
        Scene {
            variant,
            physics,
            circles,
            trail,
        }
    }

    /// The fixed starting cast for each variant.
    pub fn preset(variant: Variant) -> Scene {
        let circles = match variant {
            Variant::MultiBody => vec![
                Circle::new([300.0, 200.0], Some([15.0, 15.0]), Some(80.0), Some(COLOR_WHITE)),
                Circle::new([100.0, 200.0], Some([-15.0, 10.0]), Some(50.0), Some(COLOR_BLACK)),
                Circle::new([50.0, 300.0], Some([-10.0, 15.0]), Some(60.0), Some(COLOR_ORANGE)),
            ],
            Variant::Trail => vec![Circle::new(
                [200.0, 200.0],
                Some([20.0, 5.0]),
                Some(40.0),
                Some(COLOR_WHITE),
            )],
        };
        Scene::new(variant, circles)
    }

    /// Places up to `count` non-overlapping circles at random.
    ///
    /// Candidates that overlap an already placed circle are thrown away. The
    /// number of attempts is bounded, so a crowded window can yield fewer
    /// circles than asked for. `count` is capped at [`MAX_SCATTER_CIRCLES`].
    pub fn scattered<R: Rng>(variant: Variant, count: usize, rng: &mut R) -> Scene {
        let count = count.min(MAX_SCATTER_CIRCLES);
        let mut scene = Scene::new(variant, Vec::with_capacity(count));
        let (width, height) = (scene.physics.width, scene.physics.height);
        let palette = [COLOR_WHITE, COLOR_BLACK, COLOR_ORANGE];

        let max_attempts = count.saturating_mul(SCATTER_ATTEMPTS_PER_CIRCLE);
        let mut attempts = 0;
        while scene.circles.len() < count && attempts < max_attempts {
            attempts += 1;
            let radius = rng.random_range(SCATTER_RADIUS);
            let position = [
                rng.random_range(radius..(width - radius)),
                rng.random_range(radius..(height - radius)),
            ];
            let overlaps = scene.circles.iter().any(|other| {
                magnitude(find_vector(other.position, position)) <= other.radius + radius
            });
            if overlaps {
                continue;
            }
            let velocity = [
                rng.random_range(SCATTER_SPEED),
                rng.random_range(SCATTER_SPEED),
            ];
            let color = palette[scene.circles.len() % palette.len()];
            scene.add_circle(Circle::new(position, Some(velocity), Some(radius), Some(color)));
        }
        if scene.circles.len() < count {
            warn!(
                "placed {} of {} circles after {} attempts",
                scene.circles.len(),
                count,
                attempts
            );
        }
        scene
    }

    pub fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn trail(&self) -> Option<&Trajectory> {
        self.trail.as_ref()
    }

    /// Kicks every circle upward and speeds it up along its horizontal travel.
    pub fn boost(&mut self) {
        for circle in self.circles.iter_mut() {
            circle.velocity[0] += if circle.velocity[0] < 0.0 { -BOOST_KICK } else { BOOST_KICK };
            circle.velocity[1] = BOOST_LIFT;
        }
        debug!("boosted {} circles", self.circles.len());
    }

    /// Resolves every unordered pair once, in index order.
    pub fn handle_collisions(&mut self) {
        for i in 0..self.circles.len() {
            let (head, tail) = self.circles.split_at_mut(i + 1);
            let circle = &mut head[i];
            for other in tail.iter_mut() {
                circle.collide(other);
            }
        }
    }

    /// One physics tick: collisions, integration, then the trail sample.
    pub fn update(&mut self) {
        if self.variant == Variant::MultiBody {
            self.handle_collisions();
        }
        for circle in self.circles.iter_mut() {
            circle.step(&self.physics);
            trace!("{:?}", circle);
        }
        // The trail follows the first circle.
        if let (Some(trail), Some(circle)) = (self.trail.as_mut(), self.circles.first()) {
            trail.record(*circle);
        }
    }

    /// Clears the frame, then draws the trail under the circles.
    pub fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.fill_rect(
            0,
            0,
            self.physics.width as u32,
            self.physics.height as u32,
            BACKGROUND,
        )?;
        if let Some(trail) = &self.trail {
            for sample in trail.tapered() {
                fill_circle(surface, &sample, COLOR_GRAY)?;
            }
        }
        for circle in &self.circles {
            fill_circle(surface, circle, circle.color)?;
        }
        Ok(())
    }
}

use crate::library::*;
use log::debug;

pub const GRAVITY: f64 = 0.3;
pub const DAMPENING: f64 = 0.7;
pub const FRICTION: f64 = 0.95;

/// Vertical speed below which a floor bounce is treated as resting contact.
pub const VY_DEADZONE: f64 = 4.0;
/// Horizontal speed below which a circle on the floor stops rolling.
pub const VX_DEADZONE: f64 = 1.0;

/// Radius that maps to unit mass in the collision response.
pub const MASS_RADIUS_SCALE: f64 = 20.0;
/// Empirical divisor applied to the collision velocity. Makes impacts soft.
///
/// Tuned against a denominator of `(m1 + m2) * d`, with `d` the single-power
/// center distance before separation, not the textbook `|x1 - x2|^2`.
pub const COLLISION_SOFTENING: f64 = 200.0;
/// Centers closer than this have no usable collision normal.
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// How a circle that sank through the floor gets its vertical speed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloorPolicy {
    /// Drop this tick's gravity again and truncate to whole pixels before
    /// reflecting, so slow bounces collapse to zero.
    IntegerTruncate,
    /// Reflect, then snap slow velocities to zero (resting contact).
    Deadzone,
}

/// How a circle that left through the ceiling is reflected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopPolicy {
    /// Full reflection, with friction on the horizontal speed.
    FullBounce,
    /// Damped reflection, no friction.
    DampedBounce,
}

/// Constants and boundary policies for one simulation variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Physics {
    pub width: f64,
    pub height: f64,
    pub gravity: f64,
    pub dampening: f64,
    pub friction: f64,
    pub floor: FloorPolicy,
    pub top: TopPolicy,
}

impl Physics {
    /// Several colliding circles.
    pub fn multi_body(width: f64, height: f64) -> Physics {
        Physics {
            width,
            height,
            gravity: GRAVITY,
            dampening: DAMPENING,
            friction: FRICTION,
            floor: FloorPolicy::IntegerTruncate,
            top: TopPolicy::FullBounce,
        }
    }

    /// One circle that comes to rest and leaves a trail.
    pub fn trail(width: f64, height: f64) -> Physics {
        Physics {
            floor: FloorPolicy::Deadzone,
            top: TopPolicy::DampedBounce,
            ..Physics::multi_body(width, height)
        }
    }

    pub fn with_gravity(self, gravity: f64) -> Physics {
        Physics { gravity, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub radius: f64,
    pub color: u32,
}

impl Circle {
    pub fn new(
        position: [f64; 2],
        velocity: Option<[f64; 2]>,
        radius: Option<f64>,
        color: Option<u32>,
    ) -> Circle {
        Circle {
            position,
            velocity: velocity.unwrap_or([0.0, 0.0]),
            radius: radius.unwrap_or(20.0),
            color: color.unwrap_or(0xffffffff),
        }
    }

    /// Area-like mass, `(radius / 20)^2`.
    pub fn mass(&self) -> f64 {
        let scaled = self.radius / MASS_RADIUS_SCALE;
        scaled * scaled
    }

    /// Advances the circle by one tick.
    ///
    /// The position moves with last tick's velocity before gravity is added.
    /// Each wall is checked on its own, so a corner hit corrects both axes.
    pub fn step(&mut self, physics: &Physics) {
        self.position[0] += self.velocity[0];
        self.position[1] += self.velocity[1];
        self.velocity[1] += physics.gravity;

        let r = self.radius;
        if self.position[0] + r > physics.width {
            self.position[0] = physics.width - r;
            self.velocity[0] *= -physics.dampening;
        }
        if self.position[0] - r < 0.0 {
            self.position[0] = r;
            self.velocity[0] *= -physics.dampening;
        }
        if self.position[1] + r > physics.height {
            self.position[1] = physics.height - r;
            self.floor_bounce(physics);
        }
        if self.position[1] - r < 0.0 {
            self.position[1] = r;
            match physics.top {
                TopPolicy::FullBounce => {
                    self.velocity[1] *= -1.0;
                    self.velocity[0] *= physics.friction;
                }
                TopPolicy::DampedBounce => {
                    self.velocity[1] *= -physics.dampening;
                }
            }
        }
    }

    fn floor_bounce(&mut self, physics: &Physics) {
        match physics.floor {
            FloorPolicy::IntegerTruncate => {
                // Resting on the floor cancels this tick's gravity.
                let vy = (self.velocity[1] - physics.gravity).trunc();
                self.velocity[1] = vy * -physics.dampening;
                self.velocity[0] *= physics.friction;
            }
            FloorPolicy::Deadzone => {
                self.velocity[1] *= -physics.dampening;
                self.velocity[0] *= physics.friction;
                if self.velocity[1].abs() < VY_DEADZONE {
                    self.velocity[1] = 0.0;
                }
                if self.velocity[0].abs() < VX_DEADZONE {
                    self.velocity[0] = 0.0;
                }
            }
        }
    }

    /// Separates two overlapping circles and exchanges momentum between them.
    ///
    /// Both circles are pushed half the overlap apart along the line between
    /// their centers. Each then gets a new velocity from the two-body elastic
    /// formula, divided by [`COLLISION_SOFTENING`]. The new velocity replaces
    /// the old one. Pairs whose centers coincide are left untouched.
    pub fn collide(&mut self, other: &mut Circle) {
        let dist = magnitude(find_vector(other.position, self.position));
        let min_dist = self.radius + other.radius;
        if dist >= min_dist {
            return;
        }
        if dist < COINCIDENT_EPSILON {
            debug!(
                "skipping coincident circles at ({:.2}, {:.2})",
                self.position[0], self.position[1]
            );
            return;
        }

        let overlap = dist - min_dist;
        let dir = normalize(find_vector(self.position, other.position));
        let shift = scale(dir, overlap * 0.5);
        self.position = [self.position[0] + shift[0], self.position[1] + shift[1]];
        other.position = [other.position[0] - shift[0], other.position[1] - shift[1]];

        let m_self = self.mass();
        let m_other = other.mass();
        let x_to_other = find_vector(self.position, other.position);
        let x_to_self = find_vector(other.position, self.position);
        let v_to_other = find_vector(self.velocity, other.velocity);
        let v_to_self = find_vector(other.velocity, self.velocity);
        // Single power of the pre-separation distance.
        let denominator = (m_self + m_other) * dist;

        let k_self = 2.0 * m_other * dot(v_to_other, x_to_other) / denominator;
        let k_other = 2.0 * m_self * dot(v_to_self, x_to_self) / denominator;
        self.velocity = scale(x_to_other, k_self / COLLISION_SOFTENING);
        other.velocity = scale(x_to_self, k_other / COLLISION_SOFTENING);
    }
}

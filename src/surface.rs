//! The graphics collaborator the simulation draws through.
//!
//! The frame loop only needs four things from a window: fill a rectangle,
//! present, poll input and sleep. [`Surface`] is that contract. `main.rs`
//! implements it on SDL2; tests implement it with in-memory fakes.

use crate::items::Circle;
use anyhow::Result;
use std::time::Duration;

/// Keys the simulation reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(Key),
}

pub trait Surface {
    /// Fills `w` x `h` pixels at `(x, y)` with a `0xAARRGGBB` color.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    /// Next pending input event, without blocking.
    fn poll_event(&mut self) -> Option<Event>;

    fn sleep(&mut self, duration: Duration);
}

/// Rasterizes a disc one pixel at a time.
///
/// Walks the circle's bounding box and fills each pixel whose squared
/// distance to the center is strictly less than `radius^2`.
pub fn fill_circle<S: Surface + ?Sized>(surface: &mut S, circle: &Circle, color: u32) -> Result<()> {
    let [cx, cy] = circle.position;
    let r = circle.radius;
    let radius_squared = r * r;

    let (low_x, high_x) = ((cx - r) as i32, (cx + r).ceil() as i32);
    let (low_y, high_y) = ((cy - r) as i32, (cy + r).ceil() as i32);
    for x in low_x..high_x {
        for y in low_y..high_y {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy < radius_squared {
                surface.fill_rect(x, y, 1, 1, color)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pixels {
        filled: Vec<(i32, i32, u32)>,
    }

    impl Surface for Pixels {
        fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) -> Result<()> {
            assert_eq!((w, h), (1, 1));
            self.filled.push((x, y, color));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            Ok(())
        }

        fn poll_event(&mut self) -> Option<Event> {
            None
        }

        fn sleep(&mut self, _duration: Duration) {}
    }

    #[test]
    fn fills_only_pixels_inside_the_disc() {
        let mut pixels = Pixels::default();
        let circle = Circle::new([10.0, 10.0], None, Some(2.0), None);
        fill_circle(&mut pixels, &circle, 0xff763b).unwrap();

        // The axis tips sit exactly on the rim and are excluded.
        assert_eq!(pixels.filled.len(), 9);
        for &(x, y, color) in &pixels.filled {
            let d2 = (x - 10).pow(2) + (y - 10).pow(2);
            assert!(d2 < 4, "pixel ({x}, {y}) outside the disc");
            assert_eq!(color, 0xff763b);
        }
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut pixels = Pixels::default();
        let circle = Circle::new([10.5, 10.5], None, Some(0.0), None);
        fill_circle(&mut pixels, &circle, 0).unwrap();
        assert!(pixels.filled.is_empty());
    }

    #[test]
    fn fractional_center_covers_bounding_box_edge() {
        let mut pixels = Pixels::default();
        let circle = Circle::new([5.5, 5.5], None, Some(1.0), None);
        fill_circle(&mut pixels, &circle, 0).unwrap();
        let mut got: Vec<(i32, i32)> = pixels.filled.iter().map(|&(x, y, _)| (x, y)).collect();
        got.sort();
        assert_eq!(got, vec![(5, 5), (5, 6), (6, 5), (6, 6)]);
    }
}

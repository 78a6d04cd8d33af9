//! Bouncing balls in an SDL2 window.
//!
//! Circles fall under gravity, bounce off the window edges with damping and
//! friction, and knock into each other. The `trail` variant follows a single
//! circle that leaves a tapering trail and settles on the floor.
//!
//! Press space to kick every circle upward. Escape or closing the window quits.

use anyhow::{Context, Result};
use bouncy::frame;
use bouncy::scene::{MAX_SCATTER_CIRCLES, Scene, Variant, WINDOW_HEIGHT, WINDOW_WIDTH};
use bouncy::surface::{Event, Key, Surface};
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::EventPump;
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::Duration;

/// Window title displayed in the title bar
const TITLE: &str = "Bouncy Balls";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    /// Three colliding circles
    Multi,
    /// One circle with a trajectory trail
    Trail,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Variant {
        match arg {
            VariantArg::Multi => Variant::MultiBody,
            VariantArg::Trail => Variant::Trail,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Bouncing, colliding circles under gravity")]
struct Args {
    /// Which simulation to run
    #[arg(long, value_enum, default_value_t = VariantArg::Multi)]
    variant: VariantArg,

    /// Scatter this many random circles instead of the fixed starting cast
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_SCATTER_CIRCLES as u64))]
    circles: Option<u64>,

    /// Seed for `--circles`
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Converts a `0xAARRGGBB` value to an opaque SDL color.
///
/// Alpha is dropped, the same way an RGB888 window surface ignores it.
fn to_color(color: u32) -> Color {
    Color::RGB((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

fn to_key(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// An SDL2 window canvas together with its event pump.
struct SdlSurface {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    _context: sdl2::Sdl,
}

impl SdlSurface {
    /// Opens a centered window of the given size.
    ///
    /// # Arguments
    ///
    /// * `title` - Text for the title bar
    /// * `width` - Window width in pixels
    /// * `height` - Window height in pixels
    fn new(title: &str, width: u32, height: u32) -> Result<SdlSurface> {
        let context = sdl2::init()
            .map_err(anyhow::Error::msg)
            .context("failed to initialize SDL")?;
        let video_subsystem = context
            .video()
            .map_err(anyhow::Error::msg)
            .context("failed to initialize SDL video")?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .allow_highdpi()
            .build()
            .context("failed to create window")?;
        let canvas = window
            .into_canvas()
            .build()
            .context("failed to create canvas")?;
        let event_pump = context
            .event_pump()
            .map_err(anyhow::Error::msg)
            .context("failed to create event pump")?;

        Ok(SdlSurface {
            canvas,
            event_pump,
            _context: context,
        })
    }
}

impl Surface for SdlSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) -> Result<()> {
        self.canvas.set_draw_color(to_color(color));
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(anyhow::Error::msg)
    }

    fn present(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn poll_event(&mut self) -> Option<Event> {
        while let Some(event) = self.event_pump.poll_event() {
            match event {
                SdlEvent::Quit { .. } => return Some(Event::Quit),
                SdlEvent::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => return Some(Event::KeyDown(to_key(keycode))),
                _ => {}
            }
        }
        None
    }

    fn sleep(&mut self, duration: Duration) {
        ::std::thread::sleep(duration);
    }
}

/// Builds the scene from the command line, opens the window and runs until quit.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let variant = Variant::from(args.variant);
    let mut scene = match args.circles {
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            Scene::scattered(variant, count as usize, &mut rng)
        }
        None => Scene::preset(variant),
    };
    info!(
        "starting {:?} with {} circles (seed {})",
        scene.variant(),
        scene.circles().len(),
        args.seed
    );

    let mut surface = SdlSurface::new(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    info!("opened {}x{} window", WINDOW_WIDTH, WINDOW_HEIGHT);

    frame::run(&mut scene, &mut surface)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_drop_alpha() {
        assert_eq!(to_color(0x00ff763b), Color::RGB(0xff, 0x76, 0x3b));
        assert_eq!(to_color(0x0f0f0f0f), Color::RGB(0x0f, 0x0f, 0x0f));
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(to_key(Keycode::Space), Key::Space);
        assert_eq!(to_key(Keycode::Escape), Key::Escape);
        assert_eq!(to_key(Keycode::A), Key::Other);
    }

    #[test]
    fn variant_flag_parses() {
        let args = Args::parse_from(["bouncy", "--variant", "trail", "--circles", "4"]);
        assert_eq!(Variant::from(args.variant), Variant::Trail);
        assert_eq!(args.circles, Some(4));
        assert_eq!(args.seed, 0);
    }

    #[test]
    fn circle_count_is_range_checked() {
        assert!(Args::try_parse_from(["bouncy", "--circles", "0"]).is_err());
        assert!(Args::try_parse_from(["bouncy", "--circles", "1001"]).is_err());
        assert!(Args::try_parse_from(["bouncy", "--circles", "999999999999999999999"]).is_err());
        let args = Args::try_parse_from(["bouncy", "--circles", "1000"]).unwrap();
        assert_eq!(args.circles, Some(1000));
    }
}

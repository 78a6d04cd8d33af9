use crate::scene::Scene;
use crate::surface::{Event, Key, Surface};
use anyhow::Result;
use log::{debug, info};
use std::time::Duration;

/// Pause between frames.
pub const FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Runs one frame: input, physics, draw, present, sleep.
///
/// Every pending event is handled before the physics runs. A quit request
/// still lets the current frame finish; the returned state says whether
/// another frame should follow.
pub fn tick<S: Surface + ?Sized>(scene: &mut Scene, surface: &mut S) -> Result<LoopState> {
    let mut state = LoopState::Running;
    while let Some(event) = surface.poll_event() {
        match event {
            Event::Quit | Event::KeyDown(Key::Escape) => {
                debug!("quit requested");
                state = LoopState::Stopped;
            }
            Event::KeyDown(Key::Space) => scene.boost(),
            Event::KeyDown(Key::Other) => {}
        }
    }

    scene.update();
    scene.draw_frame(surface)?;
    surface.present()?;
    surface.sleep(FRAME_DELAY);
    Ok(state)
}

/// Drives `scene` until the surface asks to quit. Returns the frame count.
pub fn run<S: Surface + ?Sized>(scene: &mut Scene, surface: &mut S) -> Result<u64> {
    let mut frames = 0;
    loop {
        let state = tick(scene, surface)?;
        frames += 1;
        if state == LoopState::Stopped {
            break;
        }
    }
    info!("stopped after {} frames", frames);
    Ok(frames)
}

use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::chip8::Chip8;

/// Drains the events pending for this frame.
///
/// A quit request (window close or Escape) stops the drain right away, so
/// events queued behind it stay unread.
pub fn poll_input<I>(events: I, chip8: &mut Chip8)
where
    I: IntoIterator<Item = Event>,
{
    for event in events {
        match event {
            Event::Quit { .. } => {
                debug!("window closed");
                chip8.request_quit();
                return;
            }
            Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                debug!("escape pressed");
                chip8.request_quit();
                return;
            }
            // Key presses other than Escape and key releases are ignored
            _ => {}
        }
    }
}

use log::{debug, info};
use sdl2::event::Event;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{AudioSubsystem, EventPump, Sdl, TimerSubsystem, VideoSubsystem};

use crate::config::Config;
use crate::error::{Error, Stage};

pub const WINDOW_TITLE: &str = "CHIP8 Emulator";

/// What the frame loop needs from the platform.
pub trait Frontend {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Shows everything drawn since the last call.
    fn present(&mut self);

    /// Next pending event, without blocking.
    fn poll_event(&mut self) -> Option<Event>;

    /// Releases the drawing context, then the window, then the platform.
    fn shutdown(self)
    where
        Self: Sized;
}

/// An SDL2 window with an accelerated renderer.
pub struct SdlDisplay {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    video: VideoSubsystem,
    audio: AudioSubsystem,
    timer: TimerSubsystem,
    sdl: Sdl,
}

impl SdlDisplay {
    /// Brings up SDL (video, audio and timer), a centered window of
    /// `config.window_size()` and its renderer.
    pub fn open(config: &Config) -> Result<SdlDisplay, Error> {
        let sdl = sdl2::init().map_err(|err| Error::sdl(Stage::Context, err))?;
        let video = sdl.video().map_err(|err| Error::sdl(Stage::Subsystems, err))?;
        let audio = sdl.audio().map_err(|err| Error::sdl(Stage::Subsystems, err))?;
        let timer = sdl.timer().map_err(|err| Error::sdl(Stage::Subsystems, err))?;

        let (width, height) = config.window_size();
        let window = video
            .window(WINDOW_TITLE, width, height)
            .position_centered()
            .build()
            .map_err(|err| Error::sdl(Stage::Window, err.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|err| Error::sdl(Stage::Renderer, err.to_string()))?;

        let event_pump = sdl.event_pump().map_err(|err| Error::sdl(Stage::EventPump, err))?;

        info!("opened a {}x{} window", width, height);

        Ok(SdlDisplay {
            canvas,
            event_pump,
            video,
            audio,
            timer,
            sdl,
        })
    }

    /// Size of the window as SDL reports it.
    pub fn window_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }
}

impl Frontend for SdlDisplay {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn poll_event(&mut self) -> Option<Event> {
        self.event_pump.poll_event()
    }

    fn shutdown(self) {
        let SdlDisplay {
            canvas,
            event_pump,
            video,
            audio,
            timer,
            sdl,
        } = self;

        // The renderer holds the last reference to the window, so the window
        // goes away right after it.
        drop(canvas);
        debug!("renderer and window destroyed");

        drop(event_pump);
        drop(timer);
        drop(audio);
        drop(video);
        drop(sdl);
        debug!("SDL shut down");
    }
}

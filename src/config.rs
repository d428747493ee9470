use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use clap::{App, AppSettings, Arg};
use log::debug;
use sdl2::pixels::Color;

use crate::error::Error;
use crate::gfx;

/// The CHIP-8 has a 64x32 screen
pub const SCREEN_SIZE: (u32, u32) = (64, 32);

pub const DEFAULT_SCALE: u32 = 20;

// Opaque white
pub const DEFAULT_FG_COLOR: u32 = 0xFFFF_FFFF;
// Opaque yellow: R=FF G=FF B=00 A=FF
pub const DEFAULT_BG_COLOR: u32 = 0xFFFF_00FF;

/// Roughly 60 frames per second.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub const DEFAULT_CLOCK_HZ: u32 = 700;

/// How the frame loop waits between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep the whole frame interval, ignoring time already spent on the frame.
    Fixed,
    /// Sleep only until the next frame deadline.
    Deadline,
}

impl FromStr for Pacing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Pacing, Error> {
        match s {
            "fixed" => Ok(Pacing::Fixed),
            "deadline" => Ok(Pacing::Deadline),
            other => Err(Error::InvalidConfig(format!("unknown pacing mode '{}'", other))),
        }
    }
}

/// Display and timing parameters. Only `Config::default` and
/// `Config::from_args` build one, so the dimensions are always positive and
/// the window size always fits in a C int.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    window_width: u32,
    window_height: u32,
    /// Each CHIP-8 pixel becomes a `scale_factor` x `scale_factor` square
    scale_factor: u32,
    /// RGBA8888
    fg_color: u32,
    /// RGBA8888
    bg_color: u32,
    frame_interval: Duration,
    pacing: Pacing,
    /// Interpreter cycles per emulated second
    clock_hz: u32,
    /// Accepted on the command line, not loaded yet
    rom: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            window_width: SCREEN_SIZE.0,
            window_height: SCREEN_SIZE.1,
            scale_factor: DEFAULT_SCALE,
            fg_color: DEFAULT_FG_COLOR,
            bg_color: DEFAULT_BG_COLOR,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            pacing: Pacing::Fixed,
            clock_hz: DEFAULT_CLOCK_HZ,
            rom: None,
        }
    }
}

// Anything the parser does not know about lands in "rest" and is ignored
fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("oito")
        .settings(&[AppSettings::ColoredHelp, AppSettings::AllowLeadingHyphen])
        .version(clap::crate_version!())
        .about("CHIP-8 emulator")
        .arg(
            Arg::with_name("rom")
                .value_name("ROM")
                .help("The ROM file to be played (not loaded yet).")
                .index(1))
        .arg(
            Arg::with_name("scale")
                .short("s")
                .long("scale")
                .value_name("SCALE")
                .help("Sets the video scale factor.")
                .takes_value(true))
        .arg(
            Arg::with_name("pacing")
                .short("p")
                .long("pacing")
                .value_name("MODE")
                .help("How frames are paced: a fixed sleep or a deadline.")
                .possible_values(&["fixed", "deadline"])
                .takes_value(true))
        .arg(
            Arg::with_name("rest")
                .value_name("ARGS")
                .help("Reserved, currently ignored.")
                .multiple(true)
                .index(2))
}

impl Config {
    /// Builds the configuration from the process arguments, the first one being
    /// the program name. Without options this is `Config::default()`.
    pub fn from_args<I, T>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        let mut config = Config::default();

        if let Some(scale) = matches.value_of("scale") {
            config.scale_factor = scale.parse::<u32>().map_err(|_| {
                Error::InvalidConfig(format!(
                    "invalid argument passed on to -s/--scale: '{}'",
                    scale
                ))
            })?;
        }

        if let Some(pacing) = matches.value_of("pacing") {
            config.pacing = pacing.parse()?;
        }

        config.rom = matches.value_of_os("rom").map(PathBuf::from);
        if let Some(rest) = matches.values_of_lossy("rest") {
            debug!("ignoring arguments: {:?}", rest);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidConfig("the screen must not be empty".to_string()));
        }
        if self.scale_factor == 0 {
            return Err(Error::InvalidConfig("the scale factor must be positive".to_string()));
        }

        // SDL takes window sizes as C ints
        let limit = i32::MAX as u32;
        let fits = |side: u32| side.checked_mul(self.scale_factor).map_or(false, |px| px <= limit);
        if !fits(self.window_width) || !fits(self.window_height) {
            return Err(Error::InvalidConfig(format!(
                "a scale factor of {} makes the window too large",
                self.scale_factor
            )));
        }
        Ok(())
    }

    /// Sets how long a frame lasts.
    pub fn with_frame_interval(self, frame_interval: Duration) -> Config {
        Config { frame_interval, ..self }
    }

    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    pub fn window_height(&self) -> u32 {
        self.window_height
    }

    pub fn scale_factor(&self) -> u32 {
        self.scale_factor
    }

    pub fn fg_color(&self) -> u32 {
        self.fg_color
    }

    pub fn bg_color(&self) -> u32 {
        self.bg_color
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    pub fn rom(&self) -> Option<&Path> {
        self.rom.as_deref()
    }

    /// Physical window size in pixels.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width * self.scale_factor, self.window_height * self.scale_factor)
    }

    pub fn foreground(&self) -> Color {
        gfx::unpack(self.fg_color)
    }

    pub fn background(&self) -> Color {
        gfx::unpack(self.bg_color)
    }
}

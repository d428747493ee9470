use std::iter;
use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::chip8::Chip8;
use crate::config::{Config, Pacing};
use crate::display::Frontend;
use crate::error::Error;
use crate::input;

/// Blocks between two frames.
pub trait Pacer {
    fn wait(&mut self);
}

/// Sleeps on the calling thread. A hung sleep (or a hung platform call
/// elsewhere in the frame) stalls the whole emulator; nothing times out.
#[derive(Debug)]
pub struct FramePacer {
    mode: Pacing,
    interval: Duration,
    deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(mode: Pacing, interval: Duration) -> FramePacer {
        FramePacer { mode, interval, deadline: None }
    }

    pub fn from_config(config: &Config) -> FramePacer {
        FramePacer::new(config.pacing(), config.frame_interval())
    }
}

impl Pacer for FramePacer {
    fn wait(&mut self) {
        match self.mode {
            // Time spent on the frame itself is not subtracted, so frames drift
            Pacing::Fixed => thread::sleep(self.interval),
            Pacing::Deadline => {
                let now = Instant::now();
                let deadline = match self.deadline {
                    Some(previous) => previous + self.interval,
                    None => now + self.interval,
                };
                if deadline > now {
                    thread::sleep(deadline - now);
                    self.deadline = Some(deadline);
                } else {
                    // Running behind: start counting again from here
                    self.deadline = Some(now);
                }
            }
        }
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Turns wall-clock time into whole interpreter cycles. The fraction of a
/// cycle left over at the end of a frame is carried into the next one.
#[derive(Debug)]
pub struct CycleBudget {
    clock_hz: u32,
    // cycles * 1e9 owed but not handed out yet, always below 1e9
    carry: u128,
}

impl CycleBudget {
    pub fn new(clock_hz: u32) -> CycleBudget {
        CycleBudget { clock_hz, carry: 0 }
    }

    pub fn cycles(&mut self, elapsed: Duration) -> u32 {
        let owed = elapsed.as_nanos() * u128::from(self.clock_hz) + self.carry;
        self.carry = owed % NANOS_PER_SEC;
        (owed / NANOS_PER_SEC).min(u128::from(u32::MAX)) as u32
    }
}

/// Opens the frontend and runs the frame loop. If the frontend cannot be
/// opened no frame is ever presented.
pub fn start<F, O, P>(config: &Config, open: O, pacer: P) -> Result<u64, Error>
where
    F: Frontend,
    O: FnOnce(&Config) -> Result<F, Error>,
    P: Pacer,
{
    let frontend = open(config)?;
    Ok(run(frontend, config, pacer))
}

/// Runs frames until the machine quits, then shuts the frontend down.
/// Returns how many frames were presented.
///
/// Quit is only checked at the top of the loop, so the frame on which it is
/// requested is still presented and paced.
pub fn run<F: Frontend, P: Pacer>(mut frontend: F, config: &Config, mut pacer: P) -> u64 {
    let mut chip8 = Chip8::new();

    frontend.clear(config.background());

    let mut frames: u64 = 0;
    let mut budget = CycleBudget::new(config.clock_hz());
    let mut last_frame = Instant::now();

    while !chip8.should_quit() {
        input::poll_input(iter::from_fn(|| frontend.poll_event()), &mut chip8);

        let now = Instant::now();
        if chip8.is_running() {
            chip8.advance(budget.cycles(now - last_frame));
        }
        last_frame = now;

        frontend.present();
        frames += 1;

        pacer.wait();
    }

    info!("quitting after {} frames", frames);
    frontend.shutdown();
    frames
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use oito::emulator::{self, FramePacer, Pacer};
use oito::error::Stage;
use oito::{Config, Error, Frontend, Pacing};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::pixels::Color;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Color),
    Present,
    Wait,
    DestroyRenderer,
    DestroyWindow,
    QuitSubsystems,
}

type Log = Rc<RefCell<Vec<Op>>>;

/// Records everything the frame loop asks of it. Scheduled events become
/// visible once `frame` frames have been presented.
struct FakeFrontend {
    log: Log,
    scheduled: Vec<(u64, Event)>,
    presented: u64,
    unread: Rc<Cell<usize>>,
}

impl FakeFrontend {
    fn new(log: &Log) -> FakeFrontend {
        FakeFrontend {
            log: Rc::clone(log),
            scheduled: Vec::new(),
            presented: 0,
            unread: Rc::new(Cell::new(0)),
        }
    }

    fn at(mut self, frame: u64, event: Event) -> FakeFrontend {
        self.scheduled.push((frame, event));
        self
    }
}

impl Frontend for FakeFrontend {
    fn clear(&mut self, color: Color) {
        self.log.borrow_mut().push(Op::Clear(color));
    }

    fn present(&mut self) {
        self.presented += 1;
        self.log.borrow_mut().push(Op::Present);
    }

    fn poll_event(&mut self) -> Option<Event> {
        let presented = self.presented;
        let next = self.scheduled.iter().position(|(frame, _)| *frame <= presented)?;
        Some(self.scheduled.remove(next).1)
    }

    // Stands in for SdlDisplay::shutdown, whose order comes from dropping the
    // canvas (renderer, then the window it keeps alive) before the subsystems
    // and the context. tests/sdl_display.rs covers the real thing.
    fn shutdown(self) {
        let due = self.scheduled.iter().filter(|(frame, _)| *frame <= self.presented).count();
        self.unread.set(due);
        let mut log = self.log.borrow_mut();
        log.push(Op::DestroyRenderer);
        log.push(Op::DestroyWindow);
        log.push(Op::QuitSubsystems);
    }
}

struct RecordingPacer {
    log: Log,
}

impl Pacer for RecordingPacer {
    fn wait(&mut self) {
        self.log.borrow_mut().push(Op::Wait);
    }
}

fn quit() -> Event {
    Event::Quit { timestamp: 0 }
}

fn key_down(keycode: Keycode) -> Event {
    Event::KeyDown {
        timestamp: 0,
        window_id: 1,
        keycode: Some(keycode),
        scancode: None,
        keymod: Mod::NOMOD,
        repeat: false,
    }
}

fn teardown() -> Vec<Op> {
    vec![Op::DestroyRenderer, Op::DestroyWindow, Op::QuitSubsystems]
}

#[test]
fn test_window_close_ends_the_loop_and_tears_down_once() {
    let log: Log = Rc::default();
    let config = Config::from_args(vec!["oito"]).unwrap();
    let pacer = RecordingPacer { log: Rc::clone(&log) };

    let opened_size = Rc::new(Cell::new((0, 0)));
    let size = Rc::clone(&opened_size);
    let frontend_log = Rc::clone(&log);
    let open = move |config: &Config| -> Result<FakeFrontend, Error> {
        size.set(config.window_size());
        Ok(FakeFrontend::new(&frontend_log).at(0, quit()))
    };

    let frames = emulator::start(&config, open, pacer).unwrap();

    assert_eq!(opened_size.get(), (1280, 640));
    assert_eq!(frames, 1);

    let mut expected = vec![Op::Clear(Color::RGBA(255, 255, 0, 255)), Op::Present, Op::Wait];
    expected.extend(teardown());
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn test_frames_repeat_until_quit_is_injected() {
    let log: Log = Rc::default();
    let config = Config::default();
    let frontend = FakeFrontend::new(&log).at(5, quit());

    let frames = emulator::run(frontend, &config, RecordingPacer { log: Rc::clone(&log) });

    // The frame on which quit arrives is still presented and paced
    assert_eq!(frames, 6);
    let log = log.borrow();
    assert_eq!(log[0], Op::Clear(config.background()));
    for frame in log[1..13].chunks(2) {
        assert_eq!(frame, &[Op::Present, Op::Wait][..]);
    }
    assert_eq!(&log[13..], &teardown()[..]);
}

#[test]
fn test_escape_quits_and_other_keys_do_not() {
    let log: Log = Rc::default();
    let frontend = FakeFrontend::new(&log)
        .at(0, key_down(Keycode::Space))
        .at(1, key_down(Keycode::Q))
        .at(2, key_down(Keycode::Escape));

    let pacer = RecordingPacer { log: Rc::clone(&log) };
    let frames = emulator::run(frontend, &Config::default(), pacer);

    assert_eq!(frames, 3);
}

#[test]
fn test_quit_short_circuits_the_rest_of_the_frame() {
    let log: Log = Rc::default();
    let frontend = FakeFrontend::new(&log)
        .at(0, key_down(Keycode::A))
        .at(0, quit())
        .at(0, key_down(Keycode::B))
        .at(0, quit());
    let unread = Rc::clone(&frontend.unread);

    let pacer = RecordingPacer { log: Rc::clone(&log) };
    let frames = emulator::run(frontend, &Config::default(), pacer);

    assert_eq!(frames, 1);
    assert_eq!(unread.get(), 2);
}

#[test]
fn test_failed_open_never_enters_the_loop() {
    let log: Log = Rc::default();
    let pacer = RecordingPacer { log: Rc::clone(&log) };
    let open = |_: &Config| -> Result<FakeFrontend, Error> {
        Err(Error::sdl(Stage::Window, "no display"))
    };

    let result = emulator::start(&Config::default(), open, pacer);

    assert!(matches!(result, Err(Error::Sdl { stage: Stage::Window, .. })));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_fixed_pacing_blocks_every_frame() {
    let log: Log = Rc::default();
    let config = Config::default().with_frame_interval(Duration::from_millis(5));
    let frontend = FakeFrontend::new(&log).at(3, quit());
    let pacer = FramePacer::new(Pacing::Fixed, config.frame_interval());

    let start = Instant::now();
    let frames = emulator::run(frontend, &config, pacer);

    assert_eq!(frames, 4);
    assert!(start.elapsed() >= Duration::from_millis(20));
}

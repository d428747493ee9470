use log::trace;

/// Whether the emulator keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    // Nothing pauses the machine yet; reserved for a pause command
    Paused,
    // Terminal: only shutdown runs after this
    Quit,
}

/// Represents the CHIP-8 virtual machine.
///
/// Only the run state lives here for now. Memory, registers, the stack and
/// the timers belong here once the interpreter exists.
#[derive(Debug)]
pub struct Chip8 {
    state: RunState,
}

impl Default for Chip8 {
    fn default() -> Self {
        Chip8::new()
    }
}

impl Chip8 {
    /// A fresh machine starts running.
    pub fn new() -> Chip8 {
        Chip8 { state: RunState::Running }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn should_quit(&self) -> bool {
        self.state == RunState::Quit
    }

    pub fn request_quit(&mut self) {
        self.state = RunState::Quit;
    }

    /// Flips between `Running` and `Paused`. Has no effect once quit.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Quit => RunState::Quit,
        };
    }

    /// Runs `cycles` interpreter cycles. There is no interpreter yet, so
    /// this only reports how far the machine would have advanced.
    pub fn advance(&mut self, cycles: u32) {
        trace!("advance: {} cycles", cycles);
    }
}

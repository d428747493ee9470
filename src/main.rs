use std::env;
use std::process::ExitCode;

use log::{debug, error, info, warn};
use oito::emulator::{self, FramePacer};
use oito::{Config, Error, SdlDisplay};

macro_rules! catch {
    ($a:expr) => {
        match $a {
            Ok(value) => value,
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    };
}

fn main() -> ExitCode {
    oito::logging::init();

    let cfg = match Config::from_args(env::args_os()) {
        // Usage errors, --help and --version are printed by clap itself
        Err(Error::Args(err)) => err.exit(),
        other => catch!(other),
    };
    debug!("{:?}", cfg);

    if let Some(rom) = cfg.rom() {
        warn!("ROM loading is not supported yet, ignoring {}", rom.display());
    }

    let pacer = FramePacer::from_config(&cfg);
    let frames = catch!(emulator::start(&cfg, SdlDisplay::open, pacer));
    info!("presented {} frames", frames);

    ExitCode::SUCCESS
}

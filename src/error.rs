use std::fmt;

/// The part of SDL start-up that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Context,
    Subsystems,
    Window,
    Renderer,
    EventPump,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Stage::Context => "SDL context",
            Stage::Subsystems => "SDL subsystems",
            Stage::Window => "SDL window",
            Stage::Renderer => "SDL renderer",
            Stage::EventPump => "SDL event pump",
        };
        f.write_str(what)
    }
}

#[derive(Debug)]
pub enum Error {
    /// The command line could not be parsed (also covers --help and --version)
    Args(clap::Error),

    /// The command line parsed, but describes an unusable configuration
    InvalidConfig(String),

    /// A platform resource could not be acquired
    Sdl { stage: Stage, message: String },
}

impl Error {
    pub fn sdl(stage: Stage, message: impl Into<String>) -> Error {
        Error::Sdl { stage, message: message.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Args(err) => write!(f, "{}", err),
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Error::Sdl { stage, message } => {
                write!(f, "could not initialize {}: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Args(err) => Some(err),
            _ => None,
        }
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        Error::Args(err)
    }
}

use std::{error::Error, fmt, io, path::PathBuf};

pub type MuncherResult<T> = Result<T, MuncherError>;

#[derive(Debug)]
pub enum MuncherError {
    /// The input could not be opened or stat'ed.
    Io { path: PathBuf, source: io::Error },
    /// The input was opened but could not be mapped into memory.
    Map { path: PathBuf, source: io::Error },
    /// Zero-length input. There are no bits to render.
    EmptyFile { path: PathBuf },
    /// Window or pixel surface creation failed.
    DisplayInit(String),
    /// Presenting a painted frame failed.
    Present(pixels::Error),
}

impl fmt::Display for MuncherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuncherError::Io { path, .. } => write!(f, "error opening {}", path.display()),
            MuncherError::Map { path, .. } => write!(f, "error mapping {}", path.display()),
            MuncherError::EmptyFile { path } => {
                write!(f, "{} is empty, nothing to render", path.display())
            }
            MuncherError::DisplayInit(reason) => {
                write!(f, "error initializing window: {}", reason)
            }
            MuncherError::Present(_) => write!(f, "error presenting frame"),
        }
    }
}

impl Error for MuncherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MuncherError::Io { source, .. } | MuncherError::Map { source, .. } => Some(source),
            MuncherError::Present(source) => Some(source),
            MuncherError::EmptyFile { .. } | MuncherError::DisplayInit(_) => None,
        }
    }
}

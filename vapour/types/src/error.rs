/*!
    Error types for the vapour crate ecosystem.
*/

use std::fmt;

/**
    Error type for the vapour crate ecosystem.

    Every variant is terminal for the stream instance it occurs on — there
    is no retry at this layer. A consumer wanting resilience must reopen a
    fresh stream.
*/
#[derive(Debug)]
pub enum Error {
    /// I/O error (file not found, write failure, etc.)
    Io(std::io::Error),
    /// The frame-generation definition failed to open or describe itself
    Init { message: String },
    /// A specific frame failed to decode
    Decode { frame: u32, message: String },
    /// Caller-side contract violation in the provided definition
    InvalidInput { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Init { message } => write!(f, "initialization error: {message}"),
            Self::Decode { frame, message } => {
                write!(f, "error decoding frame {frame}: {message}")
            }
            Self::InvalidInput { message } => write!(f, "invalid input: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(e) => e,
            other => std::io::Error::other(other),
        }
    }
}

impl Error {
    /**
        Create an initialization error with the given message.
    */
    pub fn init(message: impl Into<String>) -> Self {
        Self::Init {
            message: message.into(),
        }
    }

    /**
        Create a decode error for the given frame.
    */
    pub fn decode(frame: u32, message: impl Into<String>) -> Self {
        Self::Decode {
            frame,
            message: message.into(),
        }
    }

    /**
        Create an invalid input error with the given message.
    */
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /**
        Returns the index of the frame that failed to decode, if any.
    */
    pub fn failed_frame(&self) -> Option<u32> {
        match self {
            Self::Decode { frame, .. } => Some(*frame),
            _ => None,
        }
    }
}

/**
    Result type alias for the vapour crate ecosystem.
*/
pub type Result<T> = std::result::Result<T, Error>;

static_assertions::assert_impl_all!(Error: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn error_display() {
        let e = Error::init("no output node");
        assert_eq!(format!("{e}"), "initialization error: no output node");

        let e = Error::decode(7, "corrupted frame");
        assert_eq!(format!("{e}"), "error decoding frame 7: corrupted frame");

        let e = Error::invalid_input("empty script");
        assert_eq!(format!("{e}"), "invalid input: empty script");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(format!("{e}").contains("file not found"));
    }

    #[test]
    fn error_into_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let roundtripped: std::io::Error = Error::Io(io_err).into();
        assert_eq!(roundtripped.kind(), std::io::ErrorKind::NotFound);

        let wrapped: std::io::Error = Error::decode(3, "bad frame").into();
        assert!(wrapped.to_string().contains("frame 3"));
    }

    #[test]
    fn error_failed_frame() {
        assert_eq!(Error::decode(12, "oops").failed_frame(), Some(12));
        assert_eq!(Error::init("oops").failed_frame(), None);
    }

    #[test]
    fn error_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let e = Error::Io(io_err);
        assert!(StdError::source(&e).is_some());

        let e = Error::init("test");
        assert!(StdError::source(&e).is_none());
    }
}

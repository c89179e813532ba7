use std::io::{Error as IOError, ErrorKind};

/// Errors raised by the reader itself, as opposed to errors the script asked it to return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ScriptError {
    /// A queued payload did not fit in the buffer passed to `read`.
    #[error("destination buffer holds {available} bytes but the scripted read needs {needed}")]
    DestinationTooSmall { needed: usize, available: usize },
}

impl From<ScriptError> for IOError {
    fn from(err: ScriptError) -> Self {
        IOError::new(ErrorKind::InvalidInput, err)
    }
}

impl ScriptError {
    /// Recovers a [`ScriptError`] from an I/O error produced by this crate, if it is one.
    pub fn from_io(err: &IOError) -> Option<&ScriptError> {
        err.get_ref().and_then(|inner| inner.downcast_ref::<ScriptError>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_round_trips_through_inner() {
        let io_err: IOError = ScriptError::DestinationTooSmall { needed: 5, available: 2 }.into();
        assert_eq!(io_err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            ScriptError::from_io(&io_err),
            Some(&ScriptError::DestinationTooSmall { needed: 5, available: 2 })
        );
        assert_eq!(
            io_err.to_string(),
            "destination buffer holds 2 bytes but the scripted read needs 5"
        );
    }

    #[test]
    fn foreign_io_error_is_not_a_script_error() {
        let io_err = IOError::new(ErrorKind::InvalidInput, "something else");
        assert!(ScriptError::from_io(&io_err).is_none());
        assert!(ScriptError::from_io(&ErrorKind::Other.into()).is_none());
    }
}

use std::io::Error as IOError;

/// One queued read in a [`ScriptedReader`](crate::ScriptedReader) script.
#[derive(Debug)]
pub enum ScriptedRead {
    /// A successful read that delivers these bytes. An empty payload is a zero-length read, not EOF.
    Data(Box<[u8]>),
    /// A failed read that returns this error.
    Error(IOError),
    /// End of stream. Nothing queued after this is ever replayed.
    EndOfStream,
}
impl ScriptedRead {
    /// A successful read of a copy of `bytes`.
    pub fn data(bytes: impl AsRef<[u8]>) -> Self {
        Self::Data(bytes.as_ref().into())
    }
    /// A successful read of zero bytes.
    pub fn empty() -> Self {
        Self::Data(Box::default())
    }
    /// A failed read. Accepts anything convertible to [`std::io::Error`], including an [`ErrorKind`](std::io::ErrorKind).
    pub fn error(err: impl Into<IOError>) -> Self {
        Self::Error(err.into())
    }

    /// The byte count this entry reports when replayed: the payload length for data, 0 otherwise.
    pub fn reported_len(&self) -> usize {
        match self {
            Self::Data(payload) => payload.len(),
            Self::Error(_) | Self::EndOfStream => 0,
        }
    }
    /// Returns whether this entry ends the stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

/// The result of replaying one read.
#[derive(Debug)]
pub enum ReadOutcome {
    /// This many bytes were written to the start of the destination. May be 0.
    Success(usize),
    /// The read failed. Zero bytes were written.
    Error(IOError),
    /// The stream is exhausted. Zero bytes were written, and every later read will be this too.
    EndOfStream,
}
impl ReadOutcome {
    /// Number of bytes written to the destination.
    pub fn bytes_read(&self) -> usize {
        match self {
            Self::Success(n) => *n,
            Self::Error(_) | Self::EndOfStream => 0,
        }
    }
    /// Returns whether the read reported end-of-stream.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
    /// Collapses the outcome into the [`std::io::Read`] convention, where EOF is `Ok(0)`.
    pub fn into_io_result(self) -> std::io::Result<usize> {
        match self {
            Self::Success(n) => Ok(n),
            Self::Error(e) => Err(e),
            Self::EndOfStream => Ok(0),
        }
    }
}

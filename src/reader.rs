use std::collections::VecDeque;
use std::io::Read;
use std::io::Result as IOResult;
use std::iter::FromIterator;

use log::{debug, trace, warn};

use crate::error::ScriptError;
use crate::policy::{resolve_copy_len, UndersizedDest};
use crate::script::{ReadOutcome, ScriptedRead};

/// A reader that replays a queue of [`ScriptedRead`]s, one per call to `read`.
///
/// Results are replayed in the order they were added. Errors are returned once and the script moves on;
/// end-of-stream is sticky. Reading past the end of the script is end-of-stream too.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    queue: VecDeque<ScriptedRead>,
    // Number of entries fully consumed so far
    position: usize,
    latched: bool,
    undersized: UndersizedDest,
}
impl ScriptedReader {
    /// Instantiates a new [`ScriptedReader`] with an empty script, which reads as EOF until results are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful read that copies `bytes` into the caller's buffer.
    /// The bytes are copied now, so later changes to the source are not seen by the reader.
    #[must_use]
    pub fn add_good_read(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.push(ScriptedRead::data(bytes));
        self
    }
    /// Queues a successful read of zero bytes. Unlike EOF this does not end the script.
    #[must_use]
    pub fn add_empty_read(mut self) -> Self {
        self.push(ScriptedRead::empty());
        self
    }
    /// Queues a read that fails with `err`.
    #[must_use]
    pub fn add_error(mut self, err: impl Into<std::io::Error>) -> Self {
        self.push(ScriptedRead::error(err));
        self
    }
    /// Queues end-of-stream. Anything queued after this will never be read.
    #[must_use]
    pub fn add_eof(mut self) -> Self {
        self.push(ScriptedRead::EndOfStream);
        self
    }
    /// Sets how reads into a buffer too small for the queued payload are handled. Defaults to [`UndersizedDest::Reject`].
    #[must_use]
    pub fn with_undersized_dest(mut self, select: UndersizedDest) -> Self {
        self.undersized = select;
        self
    }

    /// Appends an entry to the end of the script.
    /// Has no effect on replay once end-of-stream has been delivered, including EOF from reading past the end of the script.
    pub fn push(&mut self, entry: ScriptedRead) -> &mut Self {
        self.queue.push_back(entry);
        self
    }

    /// Returns whether end-of-stream has been delivered. Once true, it stays true.
    pub fn is_at_eof(&self) -> bool {
        self.latched
    }
    /// Returns the number of entries consumed so far. A partially delivered [`UndersizedDest::Split`] entry does not count until its last byte is read.
    pub fn position(&self) -> usize {
        self.position
    }
    /// Returns the number of entries that can still be replayed before end-of-stream.
    pub fn remaining(&self) -> usize {
        if self.latched {
            return 0;
        }
        self.queue.iter().take_while(|entry| !entry.is_eof()).count()
    }
    /// Returns the policy for undersized destination buffers.
    pub fn undersized_dest(&self) -> UndersizedDest {
        self.undersized
    }

    /// Replays the next scripted result into `dest`.
    ///
    /// Unlike [`Read::read`], this keeps a zero-length successful read ([`ReadOutcome::Success`]`(0)`) apart from [`ReadOutcome::EndOfStream`].
    /// Payload bytes are written to the start of `dest`.
    ///
    /// If the next payload is larger than `dest`, the outcome depends on [`Self::undersized_dest`]:
    /// with [`UndersizedDest::Reject`] the read fails with [`ScriptError::DestinationTooSmall`] and the entry stays queued,
    /// so retrying with a larger buffer delivers it. This is the default, and it also applies through [`Read::read`], so std
    /// consumers that choose their own buffer (`read_to_end`, `BufReader`) need [`UndersizedDest::Split`] or payloads that fit.
    pub fn read_scripted(&mut self, dest: &mut [u8]) -> ReadOutcome {
        if self.latched {
            return ReadOutcome::EndOfStream;
        }
        // The EOF entry itself is left at the front of the queue
        if self.queue.front().map_or(true, ScriptedRead::is_eof) {
            self.latched = true;
            debug!("scripted reader reached EOF after {} reads", self.position);
            return ReadOutcome::EndOfStream;
        }
        match self.queue.pop_front() {
            Some(ScriptedRead::Data(payload)) => self.deliver(payload, dest),
            Some(ScriptedRead::Error(e)) => {
                self.position += 1;
                trace!("scripted read {}: error {}", self.position, e);
                ReadOutcome::Error(e)
            }
            // Ruled out by the front check above
            Some(ScriptedRead::EndOfStream) | None => ReadOutcome::EndOfStream,
        }
    }

    fn deliver(&mut self, payload: Box<[u8]>, dest: &mut [u8]) -> ReadOutcome {
        let needed = payload.len();
        let available = dest.len();
        let copy_len = match resolve_copy_len(self.undersized, needed, available) {
            Some(len) => len,
            None => {
                warn!("scripted read of {} bytes rejected: destination holds {}", needed, available);
                self.queue.push_front(ScriptedRead::Data(payload));
                return ReadOutcome::Error(ScriptError::DestinationTooSmall { needed, available }.into());
            }
        };
        dest[..copy_len].copy_from_slice(&payload[..copy_len]);
        if copy_len < needed {
            // Rest of the payload becomes the next read
            self.queue.push_front(ScriptedRead::Data(payload[copy_len..].into()));
            trace!("scripted read {}: {} of {} bytes", self.position + 1, copy_len, needed);
        } else {
            self.position += 1;
            trace!("scripted read {}: {} bytes", self.position, copy_len);
        }
        ReadOutcome::Success(copy_len)
    }
}

impl Read for ScriptedReader {
    /// Replays the next scripted result, reporting end-of-stream as `Ok(0)`.
    fn read(&mut self, buf: &mut [u8]) -> IOResult<usize> {
        self.read_scripted(buf).into_io_result()
    }
}

impl Extend<ScriptedRead> for ScriptedReader {
    fn extend<I: IntoIterator<Item = ScriptedRead>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}
impl FromIterator<ScriptedRead> for ScriptedReader {
    fn from_iter<I: IntoIterator<Item = ScriptedRead>>(iter: I) -> Self {
        let mut reader = Self::new();
        reader.extend(iter);
        reader
    }
}

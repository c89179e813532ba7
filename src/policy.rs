/// What a [`ScriptedReader`](crate::ScriptedReader) does when a queued payload is larger than the buffer passed to `read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UndersizedDest {
    /// Fail the read with [`ScriptError::DestinationTooSmall`](crate::ScriptError::DestinationTooSmall) and leave the entry queued.
    ///
    /// Std consumers pick their own buffer sizes: `read_to_end` on an empty `Vec` starts with a 32-byte probe,
    /// and `BufReader` reads into 8 KiB by default. Payloads larger than those buffers fail under this policy,
    /// so use [`UndersizedDest::Split`] when handing the reader to such code.
    Reject,
    /// Deliver as much as fits and keep the rest queued as the next read, like a short read from a real source.
    Split,
}
impl Default for UndersizedDest {
    #[inline]
    fn default() -> Self {
        Self::Reject
    }
}

/// How many payload bytes to copy into a destination of `available` bytes, or `None` if the read must be rejected.
#[inline(always)]
pub(crate) fn resolve_copy_len(select: UndersizedDest, needed: usize, available: usize) -> Option<usize> {
    if needed <= available {
        return Some(needed);
    }
    match select {
        UndersizedDest::Reject => None,
        UndersizedDest::Split => Some(available),
    }
}

//! A reader that replays a scripted sequence of read results, for exercising
//! code written against [`std::io::Read`] without a real I/O source.
//!
//! Each call to `read` consumes the next queued result, in the order the results were added:
//!  - A good read copies its bytes into the start of the caller's buffer and reports their length.
//!  - An empty read reports `Ok(0)` without being end-of-stream.
//!  - An error is returned verbatim. Errors do not stop the script; the next read moves on.
//!  - EOF is sticky. Once delivered, every later read is EOF, even if more results were queued after it.
//!
//! An empty script behaves as if it held a single EOF.
//!
//! ```
//! use std::io::{ErrorKind, Read};
//! use scripted_read::ScriptedReader;
//!
//! let mut reader = ScriptedReader::new()
//!     .add_good_read(b"ab")
//!     .add_error(ErrorKind::ConnectionReset)
//!     .add_good_read(b"cde")
//!     .add_eof();
//!
//! let mut buf = [0u8; 16];
//! assert_eq!(reader.read(&mut buf).unwrap(), 2);
//! assert_eq!(&buf[..2], b"ab");
//! assert_eq!(reader.read(&mut buf).unwrap_err().kind(), ErrorKind::ConnectionReset);
//! assert_eq!(reader.read(&mut buf).unwrap(), 3);
//! assert_eq!(reader.read(&mut buf).unwrap(), 0);
//! assert!(reader.is_at_eof());
//! ```
//!
//! Because `Ok(0)` means both "empty read" and "EOF" through the `Read` trait,
//! [`ScriptedReader::read_scripted`] returns a [`ReadOutcome`] that keeps the two apart.
//!
//! By default a payload larger than the caller's buffer fails the read ([`UndersizedDest::Reject`]).
//! Std helpers such as `read_to_end` and `BufReader` choose their own buffer sizes, so scripts with large payloads
//! should opt into [`UndersizedDest::Split`] before being handed to them:
//!
//! ```
//! use std::io::Read;
//! use scripted_read::{ScriptedReader, UndersizedDest};
//!
//! let mut reader = ScriptedReader::new()
//!     .with_undersized_dest(UndersizedDest::Split)
//!     .add_good_read([7u8; 40])
//!     .add_eof();
//! let mut out = Vec::new();
//! reader.read_to_end(&mut out).unwrap();
//! assert_eq!(out, [7u8; 40]);
//! ```
#![forbid(unsafe_code)]

mod error;
mod policy;
mod reader;
mod script;

pub(crate) mod dev_helpers;

pub use error::ScriptError;
pub use policy::UndersizedDest;
pub use reader::ScriptedReader;
pub use script::{ReadOutcome, ScriptedRead};

use std::io;
use std::os::unix::io::RawFd;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("fd {fd} is not a terminal")]
	NotATerminal { fd: RawFd },

	#[error("raw mode was never entered, nothing to restore")]
	NoSavedState,

	#[error("{op} on fd {fd}: {source}")]
	Io {
		op: &'static str,
		fd: RawFd,
		#[source]
		source: io::Error,
	},
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// Classify a failed termios call. `ENOTTY` becomes `NotATerminal`.
	pub(crate) fn os(op: &'static str, fd: RawFd, source: io::Error) -> Self {
		if source.raw_os_error() == Some(libc::ENOTTY) {
			Error::NotATerminal { fd }
		} else {
			Error::Io { op, fd, source }
		}
	}
}

impl From<Error> for io::Error {
	fn from(err: Error) -> io::Error {
		match err {
			Error::Io { source, .. } => source,
			Error::NotATerminal { .. } => io::Error::from_raw_os_error(libc::ENOTTY),
			Error::NoSavedState => io::Error::new(io::ErrorKind::NotFound, Error::NoSavedState),
		}
	}
}

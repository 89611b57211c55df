use std::fmt;
use std::os::unix::io::RawFd;
use std::str::FromStr;

use libc::c_int;
use termios::{TCSADRAIN, TCSAFLUSH, TCSANOW};

/// The descriptor whose terminal gets juggled.
///
/// Defaults to standard output. Raw mode governs how input is delivered, so
/// stdin is the conventional choice; stdout is kept as the default for the
/// process-wide `enter_raw_mode`/`exit_raw_mode` pair. When both streams are
/// the same tty the effect is identical, they only differ once one of them is
/// redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Target {
	Stdin,
	#[default]
	Stdout,
	Stderr,
	Fd(RawFd),
}

impl Target {
	pub fn fd(self) -> RawFd {
		match self {
			Target::Stdin => libc::STDIN_FILENO,
			Target::Stdout => libc::STDOUT_FILENO,
			Target::Stderr => libc::STDERR_FILENO,
			Target::Fd(fd) => fd,
		}
	}
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Target::Stdin => f.write_str("stdin"),
			Target::Stdout => f.write_str("stdout"),
			Target::Stderr => f.write_str("stderr"),
			Target::Fd(fd) => write!(f, "{}", fd),
		}
	}
}

impl FromStr for Target {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, String> {
		Ok(match s {
			"stdin" => Target::Stdin,
			"stdout" => Target::Stdout,
			"stderr" => Target::Stderr,
			_ => match s.parse::<RawFd>() {
				Ok(0) => Target::Stdin,
				Ok(1) => Target::Stdout,
				Ok(2) => Target::Stderr,
				Ok(fd) if fd >= 0 => Target::Fd(fd),
				_ => return Err(format!("expected stdin, stdout, stderr or a descriptor number, got {:?}", s)),
			},
		})
	}
}

/// When a `tcsetattr` takes effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum When {
	#[default]
	Now,
	/// After pending output has been written.
	Drain,
	/// After pending output has been written, discarding unread input.
	Flush,
}

impl When {
	pub fn action(self) -> c_int {
		match self {
			When::Now => TCSANOW,
			When::Drain => TCSADRAIN,
			When::Flush => TCSAFLUSH,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn named_targets() {
		assert_eq!("stdin".parse(), Ok(Target::Stdin));
		assert_eq!("stdout".parse(), Ok(Target::Stdout));
		assert_eq!("stderr".parse(), Ok(Target::Stderr));
	}

	#[test]
	fn numbered_targets() {
		assert_eq!("0".parse(), Ok(Target::Stdin));
		assert_eq!("1".parse(), Ok(Target::Stdout));
		assert_eq!("7".parse(), Ok(Target::Fd(7)));
		assert_eq!(Target::Fd(7).fd(), 7);
		assert!("-3".parse::<Target>().is_err());
		assert!("tty".parse::<Target>().is_err());
	}

	#[test]
	fn stdout_by_default() {
		assert_eq!(Target::default(), Target::Stdout);
		assert_eq!(Target::default().fd(), 1);
		assert_eq!(When::default().action(), TCSANOW);
	}

	#[test]
	fn display_parses_back() {
		for &t in &[Target::Stdin, Target::Stdout, Target::Stderr, Target::Fd(9)] {
			assert_eq!(t.to_string().parse(), Ok(t));
		}
	}
}

use termios::{tcsetattr, Termios};
use tracing::{debug, warn};

use crate::controller::Controller;
use crate::error::{Error, Result};
use crate::rawify::make_raw;
use crate::target::{Target, When};

pub(crate) fn snapshot(target: Target) -> Result<Termios> {
	let fd = target.fd();
	Termios::from_fd(fd).map_err(|e| Error::os("tcgetattr", fd, e))
}

pub(crate) fn apply(target: Target, when: When, term: &Termios) -> Result<()> {
	let fd = target.fd();
	tcsetattr(fd, when.action(), term).map_err(|e| Error::os("tcsetattr", fd, e))
}

/// Capture the current settings of `target`, switch it to raw, and hand back
/// what was captured. Nothing changes on the device unless this returns `Ok`.
pub(crate) fn rawify(target: Target, when: When) -> Result<Termios> {
	let old = snapshot(target)?;
	let mut raw = old;
	make_raw(&mut raw);
	apply(target, when, &raw)?;
	debug!(fd = target.fd(), "entered raw mode");
	Ok(old)
}

/// Raw mode for as long as this value lives.
///
/// The guard owns the settings captured on entry, so the only way back to
/// them is through the guard: `restore` it, or let it drop. Stacking guards on
/// one terminal is fine as long as they unwind in reverse order.
#[must_use = "the terminal leaves raw mode as soon as the guard is dropped"]
#[derive(Debug)]
pub struct TermJuggler {
	old: Termios,
	target: Target,
	restore_when: When,
	restored: bool,
}

impl TermJuggler {
	pub fn enter(target: Target) -> Result<Self> {
		Builder::new().target(target).enter()
	}
	pub fn builder() -> Builder {
		Builder::new()
	}
	pub fn target(&self) -> Target {
		self.target
	}
	/// Settings the terminal had before this guard switched it to raw.
	pub fn original(&self) -> &Termios {
		&self.old
	}
	pub fn restore(mut self) -> Result<()> {
		self.restored = true;
		self.put_back()
	}
	fn put_back(&self) -> Result<()> {
		apply(self.target, self.restore_when, &self.old)?;
		debug!(fd = self.target.fd(), "left raw mode");
		Ok(())
	}
}

impl Drop for TermJuggler {
	fn drop(&mut self) {
		if !self.restored {
			if let Err(e) = self.put_back() {
				warn!(fd = self.target.fd(), error = %e, "could not restore terminal");
			}
		}
	}
}

/// Target and timing for a `TermJuggler` or a `Controller`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Builder {
	target: Target,
	enter_when: When,
	restore_when: When,
}

impl Builder {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn target(mut self, target: Target) -> Self {
		self.target = target;
		self
	}
	pub fn enter_when(mut self, when: When) -> Self {
		self.enter_when = when;
		self
	}
	pub fn restore_when(mut self, when: When) -> Self {
		self.restore_when = when;
		self
	}
	pub fn enter(self) -> Result<TermJuggler> {
		let old = rawify(self.target, self.enter_when)?;
		Ok(TermJuggler {
			old,
			target: self.target,
			restore_when: self.restore_when,
			restored: false,
		})
	}
	pub fn controller(self) -> Controller {
		Controller::from_parts(self.target, self.enter_when, self.restore_when)
	}
}

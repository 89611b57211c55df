use std::sync::{Mutex, PoisonError};

use termios::Termios;
use tracing::debug;

use crate::error::{Error, Result};
use crate::target::{Target, When};
use crate::termjuggler::{apply, rawify};

/// Enter/exit raw mode with a single saved-settings slot.
///
/// Unlike `TermJuggler` this never restores on its own. Entering twice without
/// exiting in between overwrites the slot, so the following exit lands on the
/// first raw settings rather than the cooked ones.
#[derive(Debug, Default)]
pub struct Controller {
	saved: Option<Termios>,
	target: Target,
	enter_when: When,
	restore_when: When,
}

impl Controller {
	pub const fn new() -> Self {
		Self::from_parts(Target::Stdout, When::Now, When::Now)
	}
	pub const fn with_target(target: Target) -> Self {
		Self::from_parts(target, When::Now, When::Now)
	}
	pub(crate) const fn from_parts(target: Target, enter_when: When, restore_when: When) -> Self {
		Controller { saved: None, target, enter_when, restore_when }
	}
	pub fn target(&self) -> Target {
		self.target
	}
	pub fn saved(&self) -> Option<&Termios> {
		self.saved.as_ref()
	}

	pub fn enter_raw_mode(&mut self) -> Result<()> {
		self.saved = Some(rawify(self.target, self.enter_when)?);
		Ok(())
	}

	pub fn exit_raw_mode(&mut self) -> Result<()> {
		let old = self.saved.as_ref().ok_or(Error::NoSavedState)?;
		apply(self.target, self.restore_when, old)?;
		debug!(fd = self.target.fd(), "left raw mode");
		Ok(())
	}
}

static STDOUT: Mutex<Controller> = Mutex::new(Controller::new());

fn with_stdout<T>(f: impl FnOnce(&mut Controller) -> T) -> T {
	let mut ctl = STDOUT.lock().unwrap_or_else(PoisonError::into_inner);
	f(&mut ctl)
}

/// Put standard output's terminal into raw mode, remembering its previous
/// settings in a process-wide slot.
///
/// The slot holds one snapshot. Calling this twice before `exit_raw_mode`
/// loses the original settings. Nothing serializes access to the device
/// itself; callers sharing the terminal across threads must take turns.
pub fn enter_raw_mode() -> Result<()> {
	with_stdout(Controller::enter_raw_mode)
}

/// Restore whatever `enter_raw_mode` last saved.
pub fn exit_raw_mode() -> Result<()> {
	with_stdout(Controller::exit_raw_mode)
}

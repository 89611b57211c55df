//! Switch a terminal between cooked and raw mode.
//!
//! ```no_run
//! use termjuggler::{Target, TermJuggler};
//!
//! let juggler = TermJuggler::enter(Target::Stdin)?;
//! // keystrokes now arrive one byte at a time, unechoed
//! juggler.restore()?;
//! # Ok::<(), termjuggler::Error>(())
//! ```

mod controller;
mod error;
mod rawify;
mod target;
mod termjuggler;
pub mod util;

pub use controller::{enter_raw_mode, exit_raw_mode, Controller};
pub use error::{Error, Result};
pub use rawify::{is_raw, make_raw};
pub use target::{Target, When};
pub use termjuggler::{Builder, TermJuggler};
pub use termios::Termios;

// command line options for the termjuggler demo

use argh::FromArgs;
use termjuggler::{Builder, Target, When};

#[derive(FromArgs, Debug)]
/// put a terminal in raw mode and print every byte typed until the quit key.
pub struct Config {
	/// terminal to juggle: stdin, stdout, stderr or a descriptor number.
	#[argh(option, short = 't', default = "Target::Stdout")]
	pub target: Target,

	/// discard unread input when restoring.
	#[argh(switch, short = 'f')]
	pub flush: bool,

	/// byte that ends the session, 113 ('q') by default.
	#[argh(option, short = 'q', default = "b'q'")]
	pub quit: u8,
}

impl Config {
	pub fn builder(&self) -> Builder {
		let restore = if self.flush { When::Flush } else { When::Now };
		Builder::new().target(self.target).restore_when(restore)
	}
}

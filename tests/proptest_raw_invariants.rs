//! Property tests for the in-memory raw transformation.
//!
//! 1. Any starting flag words end up raw
//! 2. Flag bits outside the raw set pass through untouched
//! 3. The transformation is idempotent

use std::os::unix::io::AsRawFd;

use nix::pty::openpty;
use proptest::prelude::*;
use termios::*;
use termjuggler::{is_raw, make_raw};

const IFLAG_CLEARED: tcflag_t = IGNBRK | BRKINT | PARMRK | ISTRIP | INLCR | IGNCR | ICRNL | IXON;
const LFLAG_CLEARED: tcflag_t = ECHO | ECHONL | ICANON | ISIG | IEXTEN;

fn base() -> Termios {
	let pty = openpty(None, None).expect("openpty");
	Termios::from_fd(pty.slave.as_raw_fd()).expect("tcgetattr")
}

fn arb_flags() -> impl Strategy<Value = [tcflag_t; 4]> {
	any::<[u32; 4]>().prop_map(|f| [f[0] as tcflag_t, f[1] as tcflag_t, f[2] as tcflag_t, f[3] as tcflag_t])
}

fn with_flags(flags: [tcflag_t; 4], vmin: cc_t, vtime: cc_t) -> Termios {
	let mut term = base();
	term.c_iflag = flags[0];
	term.c_oflag = flags[1];
	term.c_cflag = flags[2];
	term.c_lflag = flags[3];
	term.c_cc[VMIN] = vmin;
	term.c_cc[VTIME] = vtime;
	term
}

proptest! {
	#[test]
	fn always_ends_raw(flags in arb_flags(), vmin in any::<u8>(), vtime in any::<u8>()) {
		let mut term = with_flags(flags, vmin as cc_t, vtime as cc_t);
		make_raw(&mut term);
		prop_assert!(is_raw(&term));
	}

	#[test]
	fn unrelated_bits_survive(flags in arb_flags()) {
		let mut term = with_flags(flags, 4, 1);
		make_raw(&mut term);
		prop_assert_eq!(term.c_iflag, flags[0] & !IFLAG_CLEARED);
		prop_assert_eq!(term.c_oflag, flags[1] & !OPOST);
		prop_assert_eq!(term.c_cflag, (flags[2] & !(CSIZE | PARENB)) | CS8);
		prop_assert_eq!(term.c_lflag, flags[3] & !LFLAG_CLEARED);
	}

	#[test]
	fn idempotent(flags in arb_flags()) {
		let mut once = with_flags(flags, 0, 0);
		make_raw(&mut once);
		let mut twice = once;
		make_raw(&mut twice);
		prop_assert_eq!(once, twice);
	}
}

#[test]
fn cooked_is_not_raw() {
	let term = base();
	assert!(!is_raw(&term));
	let mut raw = term;
	make_raw(&mut raw);
	assert!(is_raw(&raw));
	assert_eq!(raw.c_cc[VINTR], term.c_cc[VINTR]);
}

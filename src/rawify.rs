use termios::*;

/// Apply the POSIX raw transformation to `term` in memory.
pub fn make_raw(term: &mut Termios) {
	cfmakeraw(term);
	// read returns as soon as one byte is available
	term.c_cc[VMIN] = 1;
	term.c_cc[VTIME] = 0;
}

pub fn is_raw(term: &Termios) -> bool {
	term.c_lflag & (ECHO | ECHONL | ICANON | ISIG | IEXTEN) == 0
		&& term.c_iflag & (IGNBRK | BRKINT | PARMRK | ISTRIP | INLCR | IGNCR | ICRNL | IXON) == 0
		&& term.c_oflag & OPOST == 0
		&& term.c_cflag & (CSIZE | PARENB) == CS8
		&& term.c_cc[VMIN] == 1
		&& term.c_cc[VTIME] == 0
}

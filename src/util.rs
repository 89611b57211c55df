use std::io::{self, Read, Write};

/// Next byte from `input`, or `None` at end of input.
pub fn getch<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
	let mut buf = [0u8];
	loop {
		match input.read(&mut buf) {
			Ok(0) => return Ok(None),
			Ok(_) => return Ok(Some(buf[0])),
			Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
}

/// Describe a byte on one line. `\r\n` since raw mode turns off `OPOST`.
pub fn describe<W: Write>(out: &mut W, ch: u8) -> io::Result<()> {
	let shown = match ch {
		0x20..=0x7e => (ch as char).to_string(),
		0x1b => "ESC".to_string(),
		0x7f => "DEL".to_string(),
		0..=0x1f => format!("^{}", (ch + 0x40) as char),
		_ => String::new(),
	};
	write!(out, "{:3} 0x{:02x} {}\r\n", ch, ch, shown)?;
	out.flush()
}

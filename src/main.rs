mod config;

use std::error::Error;
use std::io;

use termjuggler::util::{describe, getch};
use tracing_subscriber::EnvFilter;

use config::Config;

const CTRL_C: u8 = 3;
const CTRL_D: u8 = 4;

fn main() -> Result<(), Box<dyn Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.init();

	let config: Config = argh::from_env();
	let juggler = config.builder().enter()?;
	print!("raw mode on {}, press {} to quit\r\n", juggler.target(), config.quit);

	let stdin = io::stdin();
	let mut sin = stdin.lock();
	let stdout = io::stdout();
	let mut sout = stdout.lock();
	while let Some(ch) = getch(&mut sin)? {
		describe(&mut sout, ch)?;
		if ch == config.quit || ch == CTRL_C || ch == CTRL_D {
			break
		}
	}
	drop(sout);
	juggler.restore()?;
	Ok(())
}

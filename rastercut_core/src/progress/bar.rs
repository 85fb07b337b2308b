//! Lightweight terminal progress bar without external dependencies.
//!
//! Features:
//! - message
//! - block bar
//! - pos/len and percentage
//! - rate (items/sec)

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

const BAR_WIDTH: u64 = 20;

struct Inner {
	message: String,
	len: u64,
	pos: u64,
	start: Instant,
	hidden: bool,
	finished: bool,
}

impl Inner {
	fn redraw(&self) {
		if self.hidden || self.finished {
			return;
		}
		let len = self.len.max(1); // avoid div by zero
		let pos = self.pos.min(len);

		let filled = (pos * BAR_WIDTH / len) as usize;
		let bar: String = "█".repeat(filled) + &" ".repeat(BAR_WIDTH as usize - filled);
		let percent = pos * 100 / len;

		let elapsed = self.start.elapsed().as_secs_f64();
		let rate = if elapsed > 0.0 { pos as f64 / elapsed } else { 0.0 };

		let mut line = String::new();
		let _ = write!(
			&mut line,
			"{}▕{}▏{}/{} ({:>3}%) {:.1}/s",
			self.message, bar, pos, len, percent, rate
		);

		let mut stderr = io::stderr();
		let _ = write!(stderr, "\r\x1b[2K{line}");
		let _ = stderr.flush();
	}
}

/// A terminal progress bar handle, cloneable and thread-safe.
#[derive(Clone)]
pub struct ProgressBar {
	inner: Arc<Mutex<Inner>>,
}

impl ProgressBar {
	/// Initializes the bar with a message and a maximum value.
	pub fn new(message: &str, max_value: u64) -> ProgressBar {
		let progress = ProgressBar {
			inner: Arc::new(Mutex::new(Inner {
				message: message.to_string(),
				len: max_value,
				pos: 0,
				start: Instant::now(),
				hidden: !io::stderr().is_terminal(),
				finished: false,
			})),
		};
		progress.inner.lock().unwrap().redraw();
		progress
	}

	/// Advances the position by `delta`.
	pub fn inc(&self, delta: u64) {
		let mut inner = self.inner.lock().unwrap();
		inner.pos = inner.pos.saturating_add(delta).min(inner.len);
		inner.redraw();
	}

	/// Sets the absolute position.
	pub fn set_position(&self, value: u64) {
		let mut inner = self.inner.lock().unwrap();
		inner.pos = value.min(inner.len);
		inner.redraw();
	}

	/// Completes the bar and moves to the next line.
	pub fn finish(&self) {
		let mut inner = self.inner.lock().unwrap();
		inner.pos = inner.len;
		inner.redraw();
		if !inner.hidden && !inner.finished {
			let _ = writeln!(io::stderr());
		}
		inner.finished = true;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positions_are_clamped() {
		let progress = ProgressBar::new("clamp", 5);
		progress.set_position(10);
		assert_eq!(progress.inner.lock().unwrap().pos, 5);
		progress.set_position(2);
		progress.inc(100);
		assert_eq!(progress.inner.lock().unwrap().pos, 5);
	}

	#[test]
	fn finish_is_idempotent() {
		let progress = ProgressBar::new("finish", 3);
		progress.inc(1);
		progress.finish();
		progress.finish();
		let inner = progress.inner.lock().unwrap();
		assert!(inner.finished);
		assert_eq!(inner.pos, 3);
	}

	#[test]
	fn zero_length_runs_do_not_panic() {
		let progress = ProgressBar::new("empty", 0);
		progress.inc(1);
		progress.finish();
	}
}

//! Interactive confirmation on the terminal.

use std::io::{self, BufRead, Write};

use folio_core::Confirm;

/// Asks on stdout and reads `y`/`yes` (any case) from stdin. Anything else,
/// including a read error or end of input, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
  fn confirm(&self, prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
      Ok(_) => is_yes(&line),
      Err(_) => false,
    }
  }
}

fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// `--yes` skips the prompt.
pub fn confirmer(yes: bool) -> Box<dyn Fn(&str) -> bool> {
  if yes {
    Box::new(|_: &str| true)
  } else {
    Box::new(|prompt: &str| StdinConfirm.confirm(prompt))
  }
}

//! Line-oriented yes/no prompt over any reader/writer pair.

use std::io::{BufRead, Write};

use crate::domain::ports::Confirmer;

/// Asks on `output`, reads answers from `input`.
///
/// Accepts `y`, `yes`, `n`, `no` (any case, surrounding whitespace ignored)
/// and asks again on anything else. End of input or a read error is a
/// decline.
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn ask(&mut self, prompt: &str) -> bool {
        loop {
            let _ = write!(self.output, "{} (y/n): ", prompt);
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    let _ = writeln!(self.output);
                    return false;
                }
                Ok(_) => {}
            }

            match parse_answer(&line) {
                Some(answer) => return answer,
                None => {
                    let _ = writeln!(self.output, "Invalid response. Please enter 'y' or 'n'.");
                }
            }
        }
    }
}

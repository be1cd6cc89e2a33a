use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use macroquad::prelude::{KeyCode, is_key_pressed};
use tracing::warn;

use crate::error::{ParseError, Result};
use crate::ui::Button;

/// Marks a physical line as continued on the next one
pub const CONTINUATION: char = '&';

/// Iterator adapter turning physical lines into logical lines.
///
/// A line ending in `&` (trailing whitespace ignored) is joined with the
/// following line; the `&` is dropped and a single space separates the parts.
pub struct LogicalLines<I> {
    inner: I,
}

impl<I: Iterator<Item = String>> LogicalLines<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: Iterator<Item = String>> Iterator for LogicalLines<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut logical: Option<String> = None;
        for physical in self.inner.by_ref() {
            let trimmed = physical.trim_end();
            let (part, continued) = match trimmed.strip_suffix(CONTINUATION) {
                Some(head) => (head.trim_end(), true),
                None => (trimmed, false),
            };
            let joined = logical.get_or_insert_with(String::new);
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(part);
            if !continued {
                return logical;
            }
        }
        logical
    }
}

/// Logical lines read from any buffered reader; read errors end the stream
pub fn logical_lines<R: BufRead>(reader: R) -> LogicalLines<impl Iterator<Item = String>> {
    LogicalLines::new(reader.lines().map_while(|line| {
        line.map_err(|err| warn!(%err, "stopped reading input"))
            .ok()
    }))
}

/// Parse a grid dimension line (a positive decimal integer)
pub fn parse_dimension(field: &'static str, line: &str) -> Result<usize> {
    let word = line.trim();
    match word.parse::<usize>() {
        Ok(n) if word.bytes().all(|b| b.is_ascii_digit()) => Ok(n),
        _ => Err(ParseError::InvalidNumber {
            field,
            value: word.to_owned(),
        }
        .into()),
    }
}

/// Feed logical lines from a reader through a channel on a background thread,
/// so the render loop can poll without blocking
pub fn spawn_reader<R: BufRead + Send + 'static>(reader: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in logical_lines(reader) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Command lines triggered by keys pressed this frame
pub fn keyboard_commands() -> Vec<&'static str> {
    let actions: [(KeyCode, &'static str); 3] = [
        (KeyCode::Space, "evolve 1 1"),
        (KeyCode::Enter, "evolve 10 1"),
        (KeyCode::Escape, "quit"),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Command lines triggered by buttons clicked this frame
pub fn button_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<&'static str> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command)
        .collect()
}

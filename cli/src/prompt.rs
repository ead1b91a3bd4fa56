use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::Range;

use gridgames_core::Coord;
use gridgames_core::chase::Direction;

/// Asks questions on `output` until `input` gives an acceptable answer.
///
/// Every `ask*` method returns `Ok(None)` once the input is closed.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn ask<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                log::debug!("input closed");
                return Ok(None);
            }

            let answer = self.line.trim();
            if let Some(value) = parse(answer) {
                return Ok(Some(value));
            }
            log::debug!("ignoring answer {:?} to {:?}", answer, question);
        }
    }

    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<Option<bool>> {
        self.ask(question, parse_yes_no)
    }

    /// Asks for a number in `range`, upper bound excluded
    pub fn ask_number(&mut self, question: &str, range: Range<Coord>) -> io::Result<Option<Coord>> {
        self.ask(question, |answer| {
            answer.parse().ok().filter(|number| range.contains(number))
        })
    }

    pub fn ask_direction(&mut self) -> io::Result<Option<Direction>> {
        self.ask(
            "Which direction (n, ne, e, se, s, sw, w, nw, p to pass, or keypad 1-9)? ",
            parse_direction,
        )
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Compass tokens, or digits laid out like a numeric keypad (`8` is north, `5` passes)
pub fn parse_direction(answer: &str) -> Option<Direction> {
    use Direction::*;

    let direction = match answer.to_ascii_lowercase().as_str() {
        "n" => North,
        "ne" => NorthEast,
        "e" => East,
        "se" => SouthEast,
        "s" => South,
        "sw" => SouthWest,
        "w" => West,
        "nw" => NorthWest,
        "p" => Pass,
        digit => {
            let digit: usize = digit.parse().ok().filter(|d| (1..=9).contains(d))?;
            let index = digit - 1;
            return Direction::from_keypad(2 - index / 3, index % 3);
        }
    };
    Some(direction)
}

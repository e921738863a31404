//! Text renditions of the game's views: menu, game board, the
//! end-of-round dialog, the preset table and the closing tally.
//!
//! Everything is written to the wrapped writer so the whole interaction can
//! be replayed against in-memory buffers.

use std::io::{self, Write};

use colored::*;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use guessr_common::game::difficulty::LOWER_BOUND;
use guessr_common::game::{Difficulty, GuessOutcome, RoundSummary};

use crate::terminal::{colors, print};

pub struct Screen<W> {
    out: W,
    /// Wipe the terminal when a new view is shown.
    clear: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    fn begin_view(&mut self) -> io::Result<()> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    pub fn menu(&mut self) -> io::Result<()> {
        self.begin_view()?;
        writeln!(self.out, "{}", print::rule("choose a difficulty"))?;
        writeln!(self.out)?;
        for (idx, difficulty) in Difficulty::ALL.iter().enumerate() {
            writeln!(
                self.out,
                "  {} {}",
                format!("[{}]", idx + 1).color(colors::ACCENT),
                difficulty.label().color(colors::DIFFICULTY[idx])
            )?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Type a number or name, `q` to quit.".dimmed())?;
        self.prompt("mode")
    }

    pub fn unknown_choice(&mut self, choice: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} `{}` is not a difficulty, pick 1, 2 or 3.",
            "!".color(colors::LOSS),
            choice
        )?;
        self.prompt("mode")
    }

    pub fn game(&mut self, difficulty: Difficulty, upper_bound: i64, remaining: Option<u32>) -> io::Result<()> {
        self.begin_view()?;
        writeln!(
            self.out,
            "{}  {}",
            difficulty.id().to_uppercase().color(colors::PRIMARY).bold(),
            attempts_line(remaining).color(colors::LIMIT)
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Guess the number between 1 and {upper_bound}.")?;
        writeln!(self.out, "{}", "`b` goes back to the menu, `q` quits.".dimmed())?;
        self.prompt("guess")
    }

    /// Feedback for an outcome that keeps the round going.
    pub fn hint(&mut self, outcome: GuessOutcome, remaining: Option<u32>) -> io::Result<()> {
        match outcome {
            GuessOutcome::TooHigh => {
                writeln!(self.out, "{}", "Too high! Go lower.".color(colors::HINT_HIGH))?
            }
            GuessOutcome::TooLow => {
                writeln!(self.out, "{}", "Too low! Go higher.".color(colors::HINT_LOW))?
            }
            GuessOutcome::InvalidInput => {
                writeln!(self.out, "{}", "Numbers only, please.".color(colors::LOSS))?;
                return self.prompt("guess");
            }
            GuessOutcome::Correct | GuessOutcome::OutOfAttempts => return Ok(()),
        }
        if remaining.is_some() {
            writeln!(self.out, "{}", attempts_line(remaining).color(colors::LIMIT))?;
        }
        self.prompt("guess")
    }

    pub fn dialog(&mut self, summary: &RoundSummary) -> io::Result<()> {
        let (title, leave) = match summary.score {
            Some(_) => ("You got it!".color(colors::WIN).bold(), "Press Enter to return to the menu "),
            None => ("Out of tries".color(colors::LOSS).bold(), "Press Enter to try again "),
        };
        let answer = format!("The answer was {}.", summary.target.to_string().bold());

        writeln!(self.out)?;
        writeln!(self.out, "{}", print::thick_rule())?;
        writeln!(self.out, "{}", print::centered(&title.to_string()))?;
        writeln!(self.out, "{}", print::centered(&answer))?;
        if let Some(score) = summary.score {
            let score = format!("Score: {}", score.to_string().color(colors::ACCENT).bold());
            writeln!(self.out, "{}", print::centered(&score))?;
            writeln!(self.out, "{}", print::centered(&format!("Tries: {}", summary.tries_used)))?;
        }
        writeln!(self.out, "{}", print::thick_rule())?;
        write!(self.out, "{}", leave.dimmed())?;
        self.out.flush()
    }

    /// One row per preset: id, range and attempt limit.
    pub fn modes(&mut self) -> io::Result<()> {
        let width = Difficulty::ALL.iter().map(|d| d.id().len()).max().unwrap_or(0);

        for (idx, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let range = format!("{:<9}", format!("{LOWER_BOUND}-{}", difficulty.upper_bound()));
            let tries: ColoredString = match difficulty.max_attempts() {
                Some(n) => format!("{n} tries").color(colors::LIMIT),
                None => "unlimited".color(colors::WIN),
            };
            writeln!(
                self.out,
                "{} {}{} {} {} {}",
                ">".color(colors::SEPARATOR),
                difficulty.id().color(colors::PRIMARY),
                format!("{}:", ".".repeat(width + 1 - difficulty.id().len())).color(colors::SEPARATOR),
                range.color(colors::DIFFICULTY[idx]),
                "·".color(colors::SEPARATOR),
                tries
            )?;
        }
        self.out.flush()
    }

    /// Closing lines once the player quits after finishing rounds.
    pub fn farewell(&mut self, won: u32, lost: u32, best_score: Option<u32>) -> io::Result<()> {
        let rounds = format!(
            "Rounds: {}, {}",
            format!("{won} won").green().bold(),
            format!("{lost} lost").red().bold()
        );

        writeln!(self.out)?;
        writeln!(self.out, "{}", print::thick_rule())?;
        writeln!(self.out, "{}", print::centered(&rounds))?;
        if let Some(best) = best_score {
            let best = format!("Best score: {}", best.to_string().color(colors::ACCENT).bold());
            writeln!(self.out, "{}", print::centered(&best))?;
        }
        writeln!(self.out, "{}", print::thick_rule())?;
        self.out.flush()
    }

    fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{} ", format!("{label} >").color(colors::SEPARATOR))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn attempts_line(remaining: Option<u32>) -> String {
    match remaining {
        Some(n) => format!("Attempts left: {n}"),
        None => String::from("Mode: unlimited tries"),
    }
}

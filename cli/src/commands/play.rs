use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use guessr_common::config::Config;
use guessr_common::game::{Difficulty, GuessOutcome};
use guessr_common::success;
use guessr_core::{GameSession, RandomTarget, TargetSource};
use tracing::debug;

use crate::terminal::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Menu,
    Game,
    Dialog,
    Quit,
}

/// Tally of the rounds finished before the player quit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub won: u32,
    pub lost: u32,
    pub best_score: Option<u32>,
}

impl Tally {
    fn record(&mut self, score: Option<u32>) {
        match score {
            Some(score) => {
                self.won += 1;
                self.best_score = self.best_score.max(Some(score));
            }
            None => self.lost += 1,
        }
    }

    pub fn played(&self) -> u32 {
        self.won + self.lost
    }
}

pub fn play(difficulty: Option<Difficulty>, cfg: &Config) -> anyhow::Result<()> {
    let source = match cfg.seed {
        Some(seed) => RandomTarget::seeded(seed),
        None => RandomTarget::from_entropy(),
    };

    let stdout = std::io::stdout();
    let clear = stdout.is_terminal() && cfg.quiet == 0;
    let mut driver = Driver::new(std::io::stdin().lock(), Screen::new(stdout.lock(), clear), source);
    driver.run(difficulty)?;

    let tally = driver.tally();
    if tally.played() == 0 {
        return Ok(());
    }
    match (cfg.quiet, tally.best_score) {
        (0, best) => driver.screen.farewell(tally.won, tally.lost, best)?,
        (_, Some(best)) => success!(won = tally.won, lost = tally.lost, best, "rounds finished"),
        (_, None) => success!(won = tally.won, lost = tally.lost, "rounds finished"),
    }
    Ok(())
}

/// Moves the player between the views and forwards their input to the
/// session. The session is only ever touched through its public calls.
pub struct Driver<R, W, S> {
    input: R,
    screen: Screen<W>,
    session: GameSession<S>,
    tally: Tally,
}

impl<R, W, S> Driver<R, W, S>
where
    R: BufRead,
    W: Write,
    S: TargetSource,
{
    pub fn new(input: R, screen: Screen<W>, source: S) -> Self {
        Self {
            input,
            screen,
            session: GameSession::new(source),
            tally: Tally::default(),
        }
    }

    pub fn run(&mut self, difficulty: Option<Difficulty>) -> anyhow::Result<()> {
        let mut view = match difficulty {
            Some(difficulty) => {
                self.session.start(difficulty);
                View::Game
            }
            None => View::Menu,
        };

        while view != View::Quit {
            debug!(?view, "entering view");
            view = match view {
                View::Menu => self.menu()?,
                View::Game => self.game()?,
                View::Dialog => self.dialog()?,
                View::Quit => View::Quit,
            };
        }
        Ok(())
    }

    fn menu(&mut self) -> anyhow::Result<View> {
        self.screen.menu()?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(View::Quit);
            };
            let choice = line.trim();
            if is_quit(choice) {
                return Ok(View::Quit);
            }
            if choice.is_empty() {
                continue;
            }
            match choice.parse::<Difficulty>() {
                Ok(difficulty) => {
                    self.session.start(difficulty);
                    return Ok(View::Game);
                }
                Err(_) => self.screen.unknown_choice(choice)?,
            }
        }
    }

    fn game(&mut self) -> anyhow::Result<View> {
        let (Some(difficulty), Some(upper_bound)) = (self.session.difficulty(), self.session.upper_bound()) else {
            return Ok(View::Menu);
        };
        self.screen.game(difficulty, upper_bound, self.session.remaining_attempts())?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(View::Quit);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if is_quit(trimmed) {
                return Ok(View::Quit);
            }
            if matches!(trimmed, "b" | "back") {
                return Ok(View::Menu);
            }

            let outcome = self.session.guess(&line)?;
            if outcome.ends_round() {
                return Ok(View::Dialog);
            }
            self.screen.hint(outcome, self.session.remaining_attempts())?;
            if outcome == GuessOutcome::InvalidInput {
                debug!(input = trimmed, "ignored non-numeric guess");
            }
        }
    }

    /// Shows the round's result and waits for acknowledgement before
    /// going back to the menu.
    fn dialog(&mut self) -> anyhow::Result<View> {
        let Some(summary) = self.session.summary() else {
            return Ok(View::Menu);
        };
        self.tally.record(summary.score);
        self.screen.dialog(&summary)?;

        match self.read_line()? {
            Some(_) => Ok(View::Menu),
            None => Ok(View::Quit),
        }
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        Ok((read > 0).then_some(line))
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.screen.into_inner()
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit" | "exit")
}

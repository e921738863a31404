pub mod modes;
pub mod play;

use clap::{ArgAction, Parser, Subcommand};
use guessr_common::game::Difficulty;

#[derive(Parser)]
#[command(name = "guessr")]
#[command(about = "Guess the secret number before your tries run out.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less decoration; repeat for less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More logging; `-v` also logs each round's target
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Seed for reproducible targets
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play rounds until you quit
    #[command(alias = "p")]
    Play {
        /// Skip the menu and start a round at this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },
    /// List the difficulty presets
    #[command(alias = "m")]
    Modes,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

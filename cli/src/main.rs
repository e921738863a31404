mod commands;
mod terminal;

use commands::{CommandLine, Commands, modes, play};
use guessr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        verbose: commands.verbose,
        seed: commands.seed,
    };

    logging::init_logging(&cfg)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Modes => {
            print::header("difficulty presets", cfg.quiet);
            modes::modes()
        }
        Commands::Play { difficulty } => {
            print::header("let's play", cfg.quiet);
            play::play(difficulty, &cfg)
        }
    }
}

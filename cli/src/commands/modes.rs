use anyhow::Context;

use crate::terminal::screen::Screen;

pub fn modes() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    Screen::new(stdout.lock(), false)
        .modes()
        .context("failed to write the preset table")
}

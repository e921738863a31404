use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          ____ _   _ _____ ____ ____  ____
         / ___| | | | ____/ ___/ ___||  _ \
        | |  _| | | |  _| \___ \___ \| |_) |
        | |_| | |_| | |___ ___) |__) |  _ <
         \____|\___/|_____|____/____/|_| \_\
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_cyan().bold()));
}

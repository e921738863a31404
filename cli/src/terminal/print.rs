//! Line builders shared by the log-routed banner and by [`Screen`].
//!
//! The banner and headers go out as events on [`PRINT_TARGET`], which the
//! log formatter writes verbatim. Views build the same rules and centered
//! lines here and write them to their own writer.
//!
//! [`Screen`]: crate::terminal::screen::Screen

use crate::terminal::{banner, colors};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 56;

/// Target of events that the log formatter renders verbatim.
pub const PRINT_TARGET: &str = "guessr::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ GUESSR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;
    let sep: ColoredString = "═".repeat(side).color(colors::SEPARATOR);

    print(&format!("{sep}{}{sep}", title.color(colors::PRIMARY).bold()));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level == 0 {
        print(&rule(msg));
    }
}

/// `───⟦ TITLE ⟧───` spanning [`TOTAL_WIDTH`].
pub fn rule(title: &str) -> String {
    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let dashes: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&label));
    let left: usize = dashes / 2;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        "─".repeat(dashes - left).color(colors::SEPARATOR)
    )
}

pub fn thick_rule() -> String {
    "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string()
}

/// Pads `msg` on the left so it sits in the middle of [`TOTAL_WIDTH`].
/// Color codes do not count toward the width.
pub fn centered(msg: &str) -> String {
    let pad: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    format!("{}{msg}", " ".repeat(pad))
}

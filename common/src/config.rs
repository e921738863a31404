pub struct Config {
    /// Skips the banner printed before the first view.
    pub no_banner: bool,
    /// Each level hides more of the decorative output (headers, hints).
    pub quiet: u8,
    /// Each level lowers the log filter one step, starting from `info`.
    ///
    /// At `1` the round's target is logged when it is drawn.
    pub verbose: u8,
    /// Seeds the target generator so rounds can be replayed.
    pub seed: Option<u64>,
}

impl Config {
    pub fn log_level(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (0, 0) => "info",
            (0, 1) => "warn",
            (0, _) => "error",
            (1, _) => "debug",
            _ => "trace",
        }
    }
}

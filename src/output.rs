//! Console output that honours `--quiet`.
//!
//! Progress and success lines are suppressed in quiet mode; response data
//! printed by resource commands never is.

/// Output handler that respects quiet mode.
///
/// Quiet mode is enabled if either `--quiet` is passed or `--json-errors` is used.
#[derive(Debug, Clone)]
pub struct Output {
    quiet: bool,
}

impl Output {
    #[must_use]
    pub const fn new(quiet: bool, json_errors: bool) -> Self {
        Self {
            quiet: quiet || json_errors,
        }
    }

    /// Print a progress message such as "Creating new Okta Organization, this may take a minute:".
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            // ast-grep-ignore: no-println
            println!("{msg}");
        }
    }

    /// Print a progress marker without a trailing newline.
    pub fn progress(&self, msg: impl std::fmt::Display) {
        use std::io::Write;

        if !self.quiet {
            // ast-grep-ignore: no-println
            print!("{msg}");
            let _ = std::io::stdout().flush();
        }
    }

    /// Print a confirmation such as the new org URL.
    pub fn success(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            // ast-grep-ignore: no-println
            println!("{msg}");
        }
    }

    /// Print requested data (never suppressed).
    pub fn data(&self, msg: impl std::fmt::Display) {
        // ast-grep-ignore: no-println
        println!("{msg}");
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

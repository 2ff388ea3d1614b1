use colored::Colorize;

/// Console sink for the three output streams the tool uses: report lines
/// (plain), errors (red), and discovery diagnostics (cyan, opt-in).
///
/// Everything goes to stdout; fatal errors are report content too, not
/// logging.
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    pub fn error(&self, message: &str) {
        println!("{}", message.red());
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            println!("{}", message.cyan());
        }
    }
}

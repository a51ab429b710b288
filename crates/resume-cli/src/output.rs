//! Output rendering for resume-cli

use std::time::Duration;

use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resume_client::Presenter;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 2-space indented JSON (default)
    Pretty,
    /// Single-line JSON (for scripting)
    Compact,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

/// Context for output rendering
///
/// Implements [`Presenter`], so the upload controller writes its state
/// transitions straight to the terminal: the in-flight status becomes a
/// spinner on stderr, the parsed result goes to stdout in the selected
/// format, and errors go to stderr.
#[allow(dead_code)]
pub struct OutputContext {
    pub format: OutputFormat,
    pub no_color: bool,
    pub quiet: bool,
    spinner: Option<ProgressBar>,
}

impl OutputContext {
    pub fn new(format: OutputFormat, no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self {
            format,
            no_color,
            quiet,
            spinner: None,
        }
    }

    /// Print an info message (unless in quiet mode)
    #[allow(dead_code)]
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", msg);
        }
    }

    /// Print an error message
    #[allow(dead_code)]
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Presenter for OutputContext {
    fn alert(&mut self, message: &str) {
        eprintln!("{}", message.yellow().bold());
    }

    fn show_status(&mut self, status: &str) {
        if self.quiet {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(80));
        pb.set_message(status.to_string());
        self.spinner = Some(pb);
    }

    fn show_result(&mut self, parsed: &serde_json::Value, pretty: &str) {
        self.clear_spinner();
        match self.format {
            OutputFormat::Pretty => println!("{}", pretty),
            OutputFormat::Compact => println!(
                "{}",
                serde_json::to_string(parsed).unwrap_or_else(|_| pretty.to_string())
            ),
        }
    }

    fn show_error(&mut self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_pretty() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
    }

    #[test]
    fn test_context_starts_without_spinner() {
        let ctx = OutputContext::new(OutputFormat::Compact, true, true);
        assert!(ctx.spinner.is_none());
        assert!(ctx.quiet);
    }
}

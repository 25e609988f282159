use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Interactive status output on stderr
pub struct ProgressReporter {
    term: Term,
    spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner: None,
        }
    }

    /// A reporter only when stderr is a terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn start_spinner(&mut self, message: String) {
        let pb = ProgressBar::new_spinner();
        // The template is a constant, so a parse failure leaves the default style
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            pb.set_style(spinner_style.tick_strings(SPINNER_FRAMES));
        }
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        self.spinner = Some(pb);
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
    }

    pub fn start_loading(&mut self, path: &Path) {
        self.start_spinner(format!("Reading requests from {}...", path.display()));
    }

    pub fn finish_loading(&mut self, requests: usize, buildings: usize) {
        self.clear_spinner();
        eprintln!(
            "{} Loaded {} {} across {} {}",
            style("✓").green(),
            style(requests).yellow().bold(),
            pluralize("request", requests),
            style(buildings).yellow().bold(),
            pluralize("building", buildings)
        );
    }

    pub fn start_resolution(&mut self) {
        self.start_spinner("Searching for swap groups...".to_string());
    }

    pub fn found_swap_group(&self, index: usize, size: usize) {
        if let Some(ref pb) = self.spinner {
            pb.set_message(format!(
                "Found swap group #{index} ({size} {})",
                pluralize("employee", size)
            ));
        }
    }

    pub fn finish_resolution(&mut self, groups: usize, unmatched: usize) {
        self.clear_spinner();
        if groups == 0 {
            eprintln!("{} No swap groups found", style("✗").red());
        } else {
            eprintln!(
                "{} Found {} swap {}",
                style("✓").green().bold(),
                style(groups).yellow().bold(),
                pluralize("group", groups)
            );
        }
        if unmatched > 0 {
            eprintln!(
                "{} {} {} cannot be matched",
                style("ℹ").blue(),
                style(unmatched).yellow(),
                pluralize("request", unmatched)
            );
        }
    }
}

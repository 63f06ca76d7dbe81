//! Probe options DTO

use std::path::PathBuf;

/// Options for a probe run over one or more files
#[derive(Debug, Clone, Default)]
pub struct ProbeOptions {
    /// Files to probe, in output order
    pub paths: Vec<PathBuf>,
    /// Pretty-print each JSON object
    pub pretty: bool,
    /// Report errors and continue with the remaining files
    pub keep_going: bool,
}

impl ProbeOptions {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Default::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}

//! Record of inputs skipped during a preparation run.

/// One input that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInput {
    /// File (or task label) the input came from.
    pub source: String,
    /// 1-based line number, when the problem is a single line.
    pub line: Option<usize>,
    pub reason: String,
}

/// Accumulates skipped inputs during a preparation pass.
#[derive(Debug, Default)]
pub struct PrepReport {
    skipped: Vec<SkippedInput>,
}

impl PrepReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped input. Preparation continues with the rest.
    pub fn record_skip(&mut self, source: &str, line: Option<usize>, reason: &str) {
        self.skipped.push(SkippedInput {
            source: source.to_string(),
            line,
            reason: reason.to_string(),
        });
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }

    pub fn skipped(&self) -> &[SkippedInput] {
        &self.skipped
    }

    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }
}

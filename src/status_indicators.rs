use crate::change::Change;
use crate::reviewer_votes::LabelVotes;
use crate::styling::Styling;

/// Width of the status indicator column, in terminal columns.
pub const INDICATOR_COLUMN_WIDTH: usize = 8;

/// A single-glyph summary of part of a change's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    /// Someone voted `Code-Review+2`.
    Approved,
    /// Someone voted `Code-Review-2`.
    Rejected,
    /// CI voted `Verified+1` (or better).
    Verified,
    /// CI voted `Verified-1` (or worse).
    VerificationFailed,
    WorkInProgress,
    Submittable,
}

impl StatusIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIndicator::Approved => "✓",
            StatusIndicator::Rejected => "✗",
            StatusIndicator::Verified | StatusIndicator::VerificationFailed => "●",
            StatusIndicator::WorkInProgress => "◐",
            StatusIndicator::Submittable => "★",
        }
    }

    pub fn paint(&self, styling: &Styling) -> String {
        let glyph = self.glyph();
        match self {
            StatusIndicator::Approved | StatusIndicator::Verified => styling.positive(glyph),
            StatusIndicator::Rejected | StatusIndicator::VerificationFailed => {
                styling.negative(glyph)
            }
            StatusIndicator::WorkInProgress => styling.dim(glyph),
            StatusIndicator::Submittable => styling.highlight(glyph),
        }
    }
}

/// Compute the status indicators for a change, in display order.
pub fn status_indicators(change: &Change, votes: &LabelVotes) -> Vec<StatusIndicator> {
    let mut indicators = Vec::new();

    if votes.code_review.iter().any(|vote| vote.value <= -2) {
        indicators.push(StatusIndicator::Rejected);
    } else if votes.code_review.iter().any(|vote| vote.value >= 2) {
        indicators.push(StatusIndicator::Approved);
    }

    if votes.verified.iter().any(|vote| vote.value < 0) {
        indicators.push(StatusIndicator::VerificationFailed);
    } else if votes.verified.iter().any(|vote| vote.value > 0) {
        indicators.push(StatusIndicator::Verified);
    }

    if change.work_in_progress {
        indicators.push(StatusIndicator::WorkInProgress);
    }

    if change.submittable {
        indicators.push(StatusIndicator::Submittable);
    }

    indicators
}

/// Render indicators as a left-aligned column of [`INDICATOR_COLUMN_WIDTH`] terminal columns.
pub fn format_indicator_column(indicators: &[StatusIndicator], styling: &Styling) -> String {
    let painted = indicators
        .iter()
        .map(|indicator| indicator.paint(styling))
        .collect::<Vec<_>>()
        .join(" ");
    // Every glyph is one column wide; escape codes take up none.
    let width = indicators
        .iter()
        .map(|indicator| indicator.glyph().chars().count())
        .sum::<usize>()
        + indicators.len().saturating_sub(1);
    let padding = INDICATOR_COLUMN_WIDTH.saturating_sub(width);
    format!("{painted}{}", " ".repeat(padding))
}

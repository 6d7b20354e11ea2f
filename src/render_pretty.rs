use std::io::Write;

use crate::change::Change;
use crate::format_votes::format_reviewer_votes;
use crate::reviewer_votes::extract_reviewer_votes;
use crate::status_indicators::format_indicator_column;
use crate::status_indicators::status_indicators;
use crate::styling::Styling;

const INDENT: &str = "    ";

/// Render changes for humans.
pub fn render_pretty(
    changes: &[Change],
    project: &str,
    styling: &Styling,
    out: &mut impl Write,
) -> std::io::Result<()> {
    if changes.is_empty() {
        writeln!(
            out,
            "{} No open changes for {project}",
            styling.positive("✓")
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        styling.bold(&format!(
            "Open changes for {project} ({})",
            changes.len()
        ))
    )?;
    writeln!(out)?;

    for change in changes {
        let votes = extract_reviewer_votes(change);
        let indicators = status_indicators(change, &votes);
        writeln!(
            out,
            "{} {}  {}",
            format_indicator_column(&indicators, styling),
            styling.highlight(&change.number.to_string()),
            change.subject
        )?;
        writeln!(out, "{INDENT}{}", format_reviewer_votes(&votes, styling))?;
        writeln!(
            out,
            "{INDENT}{}",
            styling.dim(&format!("by {} • {}", change.owner_name(), change.status))
        )?;
        writeln!(out)?;
    }

    Ok(())
}

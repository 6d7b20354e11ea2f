use std::borrow::Cow;
use std::io::Write;

use crate::change::Change;
use crate::format_votes::signed_value;
use crate::label::CODE_REVIEW;
use crate::label::VERIFIED;
use crate::reviewer_votes::extract_reviewer_votes;
use crate::reviewer_votes::ReviewerVote;

/// Render changes as an XML document.
///
/// Subjects are wrapped in CDATA sections; everything else is escaped.
pub fn render_xml(changes: &[Change], project: &str, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<changes project="{}" count="{}">"#,
        escape(project),
        changes.len()
    )?;

    for change in changes {
        let votes = extract_reviewer_votes(change);

        writeln!(out, "  <change>")?;
        writeln!(out, "    <number>{}</number>", change.number)?;
        writeln!(out, "    <subject>{}</subject>", cdata(&change.subject))?;
        writeln!(out, "    <status>{}</status>", change.status)?;
        writeln!(out, "    <owner>{}</owner>", escape(change.owner_name()))?;
        if let Some(updated) = &change.updated {
            writeln!(out, "    <updated>{}</updated>", escape(updated))?;
        }
        writeln!(out, "    <reviewers>")?;
        write_label(out, CODE_REVIEW, &votes.code_review, true)?;
        write_label(out, VERIFIED, &votes.verified, false)?;
        writeln!(out, "    </reviewers>")?;
        writeln!(out, "  </change>")?;
    }

    writeln!(out, "</changes>")
}

fn write_label(
    out: &mut impl Write,
    label: &str,
    votes: &[ReviewerVote],
    show_pending: bool,
) -> std::io::Result<()> {
    writeln!(out, r#"      <label name="{}">"#, escape(label))?;
    for vote in votes {
        let pending = if show_pending && vote.pending {
            r#" pending="true""#
        } else {
            ""
        };
        writeln!(
            out,
            r#"        <vote name="{}" value="{}"{pending}/>"#,
            escape(&vote.name),
            signed_value(vote.value),
        )?;
    }
    writeln!(out, "      </label>")
}

/// Wrap text in a CDATA section.
///
/// A literal `]]>` can't appear inside CDATA, so it's split across two sections.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

/// Escape text for use in element content or a double-quoted attribute.
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

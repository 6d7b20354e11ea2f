use std::cmp::Reverse;
use std::io::ErrorKind;
use std::io::Write;

use miette::Context;
use miette::IntoDiagnostic;

use crate::change::Change;
use crate::gerrit::ChangeSource;
use crate::gerrit_project::detect_remote;
use crate::gerrit_project::RemoteUrl;
use crate::gerrit_project::RemoteUrlSource;
use crate::gerrit_query::ChangeQuery;
use crate::render_json::render_json;
use crate::render_pretty::render_pretty;
use crate::render_xml::render_xml;
use crate::styling::Styling;

/// How to print the list of changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
    Xml,
}

impl OutputFormat {
    /// JSON wins if both JSON and XML are requested.
    pub fn from_flags(json: bool, xml: bool) -> Self {
        if json {
            Self::Json
        } else if xml {
            Self::Xml
        } else {
            Self::Pretty
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub limit: u32,
    pub format: OutputFormat,
    pub styling: Styling,
}

/// List the open changes for the project the `remote` points at.
///
/// `connect` builds a Gerrit client once we know which server the remote points at.
pub fn list_open_changes<S: ChangeSource>(
    remote: &impl RemoteUrlSource,
    connect: impl FnOnce(&RemoteUrl) -> miette::Result<S>,
    options: &ListOptions,
    out: &mut impl Write,
) -> miette::Result<()> {
    let remote = detect_remote(remote)?;
    let project = remote.project.as_str();

    let query = ChangeQuery::open_in_project(project, options.limit);
    tracing::debug!(%query, "Listing changes");

    let gerrit = connect(&remote)?;
    let mut changes = gerrit.list_changes(&query)?;
    sort_by_recency(&mut changes);

    let written = match options.format {
        OutputFormat::Json => render_json(&changes, project, out),
        OutputFormat::Xml => render_xml(&changes, project, out),
        OutputFormat::Pretty => render_pretty(&changes, project, &options.styling, out),
    };
    match written {
        // The reader went away, e.g. `gerrit-open | head`. Nothing left to do.
        Err(error) if error.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early");
            Ok(())
        }
        written => written.into_diagnostic().wrap_err("Failed to write output"),
    }
}

/// Sort changes so the most recently updated come first.
pub fn sort_by_recency(changes: &mut [Change]) {
    changes.sort_by_key(|change| Reverse(change.updated_at()));
}

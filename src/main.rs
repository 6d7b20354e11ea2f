mod author;
mod change;
mod change_number;
mod change_status;
mod cli;
mod endpoint;
mod format_votes;
mod gerrit;
mod gerrit_host;
mod gerrit_project;
mod gerrit_query;
mod git;
mod install_tracing;
mod label;
mod list_changes;
mod query_result;
mod render_json;
mod render_pretty;
mod render_xml;
mod reviewer_votes;
mod status_indicators;
mod styling;

use clap::Parser;
use cli::Opts;
use gerrit::Gerrit;
use gerrit_host::GerritHost;
use git::Git;
use install_tracing::install_tracing;
use list_changes::list_open_changes;
use list_changes::ListOptions;
use styling::Styling;

fn main() -> miette::Result<()> {
    let opts = Opts::parse();
    install_tracing(&opts.log)?;

    let options = ListOptions {
        limit: opts.limit,
        format: opts.output_format(),
        styling: Styling::from_choice(opts.color),
    };
    let remote = Git::new().remote(&opts.remote);

    list_open_changes(
        &remote,
        |remote_url| {
            let host = match &opts.url {
                Some(url) => GerritHost::from_base_url(url)?,
                None => GerritHost::from_remote(remote_url),
            };
            tracing::debug!(%host, "Connecting to Gerrit");
            Gerrit::new(host, opts.credentials())
        },
        &options,
        &mut std::io::stdout().lock(),
    )
}

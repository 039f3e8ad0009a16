use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use gitsource::cli::configure::{SectionUpdate, configure};
use gitsource::cli::link::{LinkTarget, web_link};
use gitsource::cli::utils::{parse_commit_file, write_err};
use gitsource::cli::{CliContext, remote_head, show};
use gitsource::consts::CONFIG_FILENAME;
use gitsource::{Commit, CommitFile, GitExecutor};

#[derive(Parser)]
#[clap(version, about = "Keeps the GitHub repository a build is sourced from")]
pub struct Cli {
    #[command(flatten)]
    verbose: Verbosity,

    /// Path to a config file other than gitsource.toml in the current directory
    #[clap(short = 'c', long, default_value = CONFIG_FILENAME, global = true)]
    pub config_file: PathBuf,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit one section of the repository configuration
    Configure {
        #[clap(subcommand)]
        section: ConfigureCommand,
    },
    /// Print the current repository configuration
    Show {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
    /// Print a GitHub web link for a commit, file or diff
    Link {
        #[clap(subcommand)]
        target: LinkCommand,
    },
    /// Print the commit the configured branch points to on the remote
    RemoteHead,
}

#[derive(Debug, Subcommand)]
pub enum ConfigureCommand {
    /// Where the repository is and which branch to build
    Repository {
        /// URL to clone the repository from
        #[clap(long)]
        url: Option<String>,
        /// Branch to build, defaults to master
        #[clap(long)]
        branch: Option<String>,
    },
    /// The repository's page on GitHub, used to link commits and files
    WebRepository {
        /// e.g. https://github.com/owner/repo, an empty value removes it
        #[clap(long)]
        url: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LinkCommand {
    /// Link to a commit, identified by the revision of its first file
    Commit {
        /// Files of the commit as REVISION:PATH, in commit order
        #[clap(long = "file", value_parser = parse_commit_file)]
        files: Vec<CommitFile>,
    },
    /// Link to a file at a revision
    File { revision: String, path: String },
    /// Link to a file at a revision
    Revision { revision: String, path: String },
    /// Link to the changes a revision made
    Diff { revision: String, path: String },
}

impl From<LinkCommand> for LinkTarget {
    fn from(command: LinkCommand) -> Self {
        match command {
            LinkCommand::Commit { files } => LinkTarget::Commit(Commit::new(files)),
            LinkCommand::File { revision, path } => {
                LinkTarget::File(CommitFile::new(revision, path))
            }
            LinkCommand::Revision { revision, path } => {
                LinkTarget::Revision(CommitFile::new(revision, path))
            }
            LinkCommand::Diff { revision, path } => {
                LinkTarget::Diff(CommitFile::new(revision, path))
            }
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let mut context = CliContext::new(&cli.config_file)?;
    match cli.command {
        Command::Configure { section } => {
            let update = match section {
                ConfigureCommand::Repository { url, branch } => {
                    SectionUpdate::Repository { url, branch }
                }
                ConfigureCommand::WebRepository { url } => SectionUpdate::WebRepository { url },
            };
            let errors = configure(&mut context, &update)?;
            if errors.has_any_errors() {
                eprint!("{errors}");
                bail!("Configuration was not saved");
            }
            println!(
                "{:?} configuration saved to {}",
                update.section(),
                context.config_file.display()
            );
        }
        Command::Show { json } => {
            println!("{}", show::render(&context.repository, json)?);
        }
        Command::Link { target } => {
            println!("{}", web_link(&context.repository, &target.into())?);
        }
        Command::RemoteHead => {
            let head = remote_head::resolve(
                &context.repository,
                &GitExecutor,
                &context.working_directory()?,
            )?;
            println!("{}", head.revision);
            if let Some(link) = head.link {
                println!("{link}");
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        let err: &(dyn std::error::Error + 'static) = e.as_ref();
        eprintln!("{}", write_err(err));
        std::process::exit(1);
    }
}

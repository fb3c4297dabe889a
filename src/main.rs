use anyhow::Result;
use clap::{Parser, Subcommand};

use codecept_scaffold::TemplateKind;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Bootstrap Codeception test workspaces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the test workspace layout, helpers and actors
    Init {
        /// Workspace directory (created if missing)
        #[arg(default_value = ".")]
        path: String,

        /// Scaffolding flow to run
        #[arg(short, long, value_enum, default_value = "bootstrap")]
        template: TemplateKind,

        /// Namespace for generated test classes
        #[arg(long, env = "CODECEPT_NAMESPACE")]
        namespace: Option<String>,

        /// Suffix for actor class names
        #[arg(long, env = "CODECEPT_ACTOR_SUFFIX")]
        actor: Option<String>,

        /// Only create the global config and directories (bootstrap flow)
        #[arg(long)]
        empty: bool,

        /// Answer every question with its default
        #[arg(short = 'n', long)]
        no_interaction: bool,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with scaffold output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            path,
            template,
            namespace,
            actor,
            empty,
            no_interaction,
            json,
        } => {
            commands::init::execute(commands::init::InitOptions {
                path,
                template,
                namespace,
                actor,
                empty,
                no_interaction,
                json,
            })?;
        }
    }

    Ok(())
}

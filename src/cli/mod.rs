mod commands;
pub mod error;
mod utils;


use clap::{Parser, Subcommand};

use crate::config::WikiConfig;
use crate::mcp::Dispatcher;

use error::CliResult;

#[derive(Parser)]
#[command(name = "wikijs")]
#[command(author, version, about = "Wiki.js tool client", long_about = None)]
pub struct Cli {
    /// Wiki.js base URL (default: WIKIJS_URL env)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Wiki.js API key (default: WIKIJS_API_KEY env)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available tools
    Tools {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Invoke a tool and print its result
    Call {
        /// Tool name, e.g. wiki_search
        name: String,
        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
}

/// Parse the command line and run the selected command.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tools { format } => {
            println!("{}", commands::tools::list_tools(&format)?);
        }
        Commands::Call { name, args } => {
            let config = WikiConfig::from_env()?.with_overrides(cli.url, cli.api_key);
            config.validate()?;
            let dispatcher = Dispatcher::new(config);
            let output = commands::call::call_tool(&dispatcher, &name, args.as_deref()).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

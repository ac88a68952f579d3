//! Command-line access to the Folio blog on Hashnode.
//!
//! ```text
//! hashnode posts [N]     latest N posts (default 10)
//! hashnode post <slug>   one post with content
//! hashnode tags          tags with post counts
//! ```
//!
//! Reads `HASHNODE_PUBLICATION_ID`, `HASHNODE_TOKEN` and `HASHNODE_ENDPOINT`
//! from the environment and prints JSON to stdout.

use std::process::ExitCode;

use folio_hashnode::{HashnodeClient, HashnodeConfig, HashnodeError};
use serde::Serialize;
use tracing::{error, info};

const USAGE: &str = "usage: hashnode <posts [N] | post <slug> | tags>";

enum Command {
    Posts(u32),
    Post(String),
    Tags,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [cmd] if cmd == "posts" => Some(Command::Posts(10)),
            [cmd, first] if cmd == "posts" => first.parse().ok().map(Command::Posts),
            [cmd, slug] if cmd == "post" => Some(Command::Post(slug.clone())),
            [cmd] if cmd == "tags" => Some(Command::Tags),
            _ => None,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), HashnodeError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(command: Command) -> Result<(), HashnodeError> {
    let config = HashnodeConfig::from_env()?;
    info!(publication = %config.publication_id, endpoint = %config.endpoint, "connecting");
    let client = HashnodeClient::from_config(config)?;

    match command {
        Command::Posts(first) => print_json(&client.posts(first).await?),
        Command::Post(slug) => match client.post(&slug).await? {
            Some(post) => print_json(&post),
            None => Err(HashnodeError::PostNotFound(slug)),
        },
        Command::Tags => print_json(&client.tags().await?),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_hashnode=info,hashnode=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

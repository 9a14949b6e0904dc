//! robots-txt: CLI tool for checking URLs against robots.txt files.

use clap::{Parser as ClapParser, Subcommand};
use robots_txt::fetch::{robots_url, FetchConfig, Parser};
use robots_txt::Document;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(ClapParser)]
#[command(name = "robots-txt")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Check URLs against robots.txt files", long_about = None)]
struct Cli {
    /// User-Agent header sent when downloading robots.txt
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tell whether a crawler may fetch the given URLs
    Check {
        /// Crawler name matched against User-agent lines
        #[arg(short, long)]
        agent: String,

        /// Read robots.txt from a local file instead of downloading it
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// URLs to check
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Parse a robots.txt file or URL and print it normalized
    Render {
        /// Local path or http(s) URL of a robots.txt file
        source: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = FetchConfig::default().with_timeout(Duration::from_secs(cli.timeout));
    if let Some(user_agent) = cli.user_agent {
        config = config.with_user_agent(user_agent);
    }
    let parser = Parser::with_config(config);

    let result = match cli.command {
        Commands::Check { agent, file, urls } => check(&parser, &agent, file.as_deref(), &urls),
        Commands::Render { source, json } => render(&parser, &source, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn check(parser: &Parser, agent: &str, file: Option<&Path>, urls: &[String]) -> CliResult<()> {
    let local = match file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    // One robots.txt per origin; `None` means it could not be fetched
    let mut documents: HashMap<String, Option<Document>> = HashMap::new();

    for raw in urls {
        let page = Url::parse(raw)?;
        let robots = robots_url(&page);

        let document = documents
            .entry(robots.to_string())
            .or_insert_with(|| match &local {
                Some(content) => Some(Document::parse(robots.clone(), content)),
                None => parser.try_parse(&robots),
            });

        let verdict = match document {
            Some(document) if document.disallows(agent, &page) => "disallowed",
            Some(_) => "allowed",
            None => "allowed (no robots.txt)",
        };
        println!("{}\t{}", verdict, page);
    }

    Ok(())
}

fn render(parser: &Parser, source: &str, json: bool) -> CliResult<()> {
    let document = match Url::parse(source) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => parser.parse(&url)?,
        _ => {
            let path = fs::canonicalize(source)?;
            let content = fs::read_to_string(&path)?;
            let url = Url::from_file_path(&path)
                .map_err(|_| format!("not an absolute path: {:?}", path))?;
            Document::parse(url, &content)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("{}", document);
    }

    Ok(())
}

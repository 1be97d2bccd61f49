use clap::Parser;
use color_eyre::Result;

mod config;
mod error;
mod formatter_url;
mod lookup;
mod suggest;

use error::SuggestError;
use formatter_url::{FormatterUrlResolver, HttpMetadataClient};
use lookup::HttpSearchClient;
use suggest::Suggester;

/// Suggestion lookup for external-id statements
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Suggestion lookup for external-id properties with per-term result caching"
)]
struct Args {
    /// Property whose identifiers to search (e.g. P214)
    property: String,

    /// Search term
    term: String,

    /// Print records as JSON instead of formatted lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(run(args, config_result.config))
}

async fn run(args: Args, config: config::Config) -> Result<()> {
    let resolver = FormatterUrlResolver::new(HttpMetadataClient::new(&config.metadata));
    let client = HttpSearchClient::new(&config.search, &args.property)?;

    let mut suggester =
        match Suggester::attach(client, &config.search, &resolver, &args.property).await {
            Ok(suggester) => suggester,
            Err(SuggestError::UnsupportedProperty(property)) => {
                println!("Suggestions are not enabled for property {}", property);
                return Ok(());
            }
        };

    let records = suggester.search(&args.term).await?.to_vec();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if suggester.not_found(&args.term) {
        println!("No matches for {:?}", args.term);
        return Ok(());
    }

    for record in &records {
        let mut line = format!("{}  {}", record.id, record.display_text());
        if let Some(description) = &record.description {
            if !description.is_empty() {
                line.push_str(" - ");
                line.push_str(description);
            }
        }
        if let Some(link) = suggester.link_to(&record.id) {
            line.push_str("  <");
            line.push_str(&link);
            line.push('>');
        }
        println!("{}", line);
    }

    Ok(())
}

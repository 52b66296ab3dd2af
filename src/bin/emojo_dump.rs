use anyhow::Result;
use clap::Parser;

use emojos::config::Config;
use emojos::fetcher::{EmojiSource, MastodonEmojiFetcher};
use emojos::parsers::DisplayOptions;
use emojos::pipeline;
use emojos::utils::http::create_client;

/// Print an instance's custom emoji, grouped the same way the web page shows them
#[derive(Parser, Debug)]
#[command(name = "emojo-dump", version)]
struct Args {
    /// Instance domain, e.g. mastodon.social
    domain: String,

    /// Include emoji hidden from the picker
    #[arg(long)]
    all: bool,

    /// Print animated image URLs instead of static ones
    #[arg(long)]
    animated: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emojos=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let fetcher = MastodonEmojiFetcher::new(create_client(&config)?);

    let records = fetcher.fetch(&args.domain).await?;
    let view = pipeline::run(
        records,
        &args.domain,
        DisplayOptions {
            show_all: args.all,
            show_animated: args.animated,
        },
    );

    for group in view.groups.iter() {
        println!("# {}", group.key);
        for emoji in &group.emojis {
            println!("{} {}", emoji, emoji.url());
        }
        println!();
    }

    Ok(())
}

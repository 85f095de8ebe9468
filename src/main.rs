use anyhow::Result;
use clap::{Parser, Subcommand};

use hashtagger::config::Config;
use hashtagger::dispatch::Dispatcher;
use hashtagger::output::terminal;
use hashtagger::tags::categories::CATEGORIES;
use hashtagger::tags::local::LocalGenerator;
use hashtagger::tags::sampler::SeededSampler;

/// Hashtagger: hashtag suggestions for any topic.
///
/// Uses the hashtag API when an API key is available and falls back to a
/// built-in generator otherwise.
#[derive(Parser)]
#[command(name = "hashtagger", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate hashtags for a topic
    Generate {
        /// The topic (e.g. travel, digital marketing, vegan cooking)
        #[arg(required = true)]
        topic: Vec<String>,

        /// How many hashtags to return (default: HASHTAGGER_COUNT or 30)
        #[arg(long)]
        count: Option<usize>,

        /// API key for the hashtag API (default: HASHTAGGER_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Seed the built-in generator so results are repeatable
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in tag categories
    Categories,

    /// Serve the single-page web tool
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hashtagger=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            topic,
            count,
            api_key,
            seed,
            json,
        } => {
            let config = Config::load()?;
            let topic = topic.join(" ");
            let count = count.unwrap_or(config.default_count);

            let mut dispatcher = Dispatcher::from_config(&config)?;
            if let Some(seed) = seed {
                dispatcher =
                    dispatcher.with_local(LocalGenerator::new(Box::new(SeededSampler::new(seed))));
            }

            let credential = api_key.as_deref().or_else(|| config.credential());
            let generation = dispatcher.generate(&topic, credential, count).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&generation)?);
            } else {
                terminal::display_generation(&topic, &generation);
            }
        }

        Commands::Categories => {
            terminal::display_categories(CATEGORIES);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let dispatcher = Dispatcher::from_config(&config)?;
            if config.credential().is_none() {
                tracing::info!(
                    "HASHTAGGER_API_KEY not set; requests without a key use the built-in generator"
                );
            }
            let state = hashtagger::web::AppState::new(config, dispatcher);
            hashtagger::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

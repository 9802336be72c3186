use breed_gallery::config::GalleryConfig;
use breed_gallery::utils::{logger, validation::Validate};
use breed_gallery::{BreedGateway, DogApiClient};
use clap::{Parser, Subcommand};

/// Runs one gateway operation against the upstream API and prints the result
#[derive(Parser)]
#[command(name = "breed-probe")]
#[command(about = "Query the Dog CEO API the same way the gallery does")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override upstream.base_url
    #[arg(long)]
    api_base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every breed display entry, one per line
    List,
    /// Print a random image URL for a breed, e.g. "hound afghan"
    Image { selection: String },
    /// Print a random image URL and the breed derived from it
    Random,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, None);

    let mut config = match &args.config {
        Some(path) => GalleryConfig::from_file(path)?,
        None => GalleryConfig::default(),
    };
    if let Some(url) = args.api_base_url {
        config.upstream.base_url = url;
    }
    config.validate()?;

    let gateway = BreedGateway::new(DogApiClient::from_config(&config)?);

    let outcome = match args.command {
        Command::List => gateway.fetch_breed_list().await.map(|breeds| {
            for breed in &breeds {
                println!("{}", breed);
            }
            tracing::info!("📋 {} breed entries", breeds.len());
        }),
        Command::Image { selection } => gateway
            .fetch_breed_image(&selection)
            .await
            .map(|url| println!("{}", url)),
        Command::Random => gateway
            .fetch_random_breed_image()
            .await
            .map(|image| println!("{}\t{}", image.breed_name, image.image_url)),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ {} (category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}

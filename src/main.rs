use clap::Parser;
use estate_scout::cli::{Cli, Command};
use estate_scout::{App, Config};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(source) = cli.catalog {
        config.catalog.source = source;
    }
    if let Some(path) = cli.state {
        config.state.path = path;
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &config.source {
        Some(path) => debug!("Loaded config from {}", path.display()),
        None => debug!("No config file, using defaults"),
    }
    debug!("Using catalog source {}", config.catalog.source);

    let mut app = App::open(config).await?;

    let output = match cli.command {
        Command::List(args) => {
            let filter = args.filter();
            if args.json {
                app.list_json(&filter)?
            } else {
                app.list(&filter)
            }
        }
        Command::Show { id } => app.show(&id)?,
        Command::Favorite { id } => app.toggle_favorite(&id)?,
        Command::Unfavorite { id } => app.remove_favorite(&id),
        Command::Favorites => app.favorites(),
        Command::Contact(args) => app.contact(&args.id, args.form())?,
        Command::Profile => app.profile(),
    };

    println!("{}", output.trim_end());

    app.persist().await?;

    Ok(())
}

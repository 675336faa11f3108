use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spot2yt::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a Spotify track URL into a YouTube share link
    Convert(ConvertOptions),

    /// Show or store the Spotify API credentials
    Credentials(CredentialsOptions),

    /// Show or change settings
    Settings(SettingsOptions),

    /// Convert every new track URL read from standard input
    Watch,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertOptions {
    /// Spotify track URL, e.g. https://open.spotify.com/track/<id>
    pub url: String,

    /// Open the YouTube link in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CredentialsOptions {
    /// Spotify API client id
    #[clap(long)]
    pub client_id: Option<String>,

    /// Spotify API client secret
    #[clap(long)]
    pub client_secret: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Show or change settings")]
pub struct SettingsOptions {
    /// Enable or disable auto mode (bare link output in `watch`)
    #[clap(long, value_name = "BOOL")]
    pub auto_clipboard: Option<bool>,

    /// Print the config folder location
    #[clap(long, conflicts_with = "auto_clipboard")]
    pub path: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,spot2yt=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Command::Convert(opt) => cli::convert(opt.url, opt.open).await,
        Command::Credentials(opt) => cli::credentials(opt.client_id, opt.client_secret).await,
        Command::Settings(opt) => cli::settings(opt.auto_clipboard, opt.path).await,
        Command::Watch => cli::watch().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

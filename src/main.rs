use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use deezex::{cli, config, deezer::ApiClient, error};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Export every playlist of a user, one CSV per playlist
    User(UserOptions),

    /// Export a single playlist as CSV
    Playlist(PlaylistOptions),

    /// Export an album's track list as CSV
    Album(AlbumOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct UserOptions {
    /// User id or profile URL
    pub input: String,

    /// Skip the per-track album detail lookup (release date, genre)
    #[clap(long)]
    pub skip_album_details: bool,

    /// Output directory for the CSV files
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist id or URL
    pub input: String,

    /// Skip the per-track album detail lookup (release date, genre)
    #[clap(long)]
    pub skip_album_details: bool,

    /// Output directory for the CSV file
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Album id or URL
    pub input: String,

    /// Output directory for the CSV file
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn build_client() -> ApiClient {
    match ApiClient::new() {
        Ok(client) => client,
        Err(e) => error!("Cannot initialize HTTP client. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::User(opt) => {
            cli::export_user(&build_client(), &opt.input, opt.skip_album_details, opt.output).await
        }
        Command::Playlist(opt) => {
            cli::export_playlist(&build_client(), &opt.input, opt.skip_album_details, opt.output)
                .await
        }
        Command::Album(opt) => cli::export_album(&build_client(), &opt.input, opt.output).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

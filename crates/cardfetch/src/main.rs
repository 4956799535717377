use crate::prelude::*;
use cardfetch_core::variant::ResponseKind;
use clap::Parser;

mod assembly;
mod client;
mod config;
mod error;
mod lookup;
mod prelude;

#[cfg(test)]
mod test_support;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Resolve card names against Scryfall into chat attachments"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Card database API base URL (overrides SCRYFALL_BASE_URL)
    #[clap(long, global = true)]
    base_url: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "CARDFETCH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Card name, type line and rules text
    Text(crate::lookup::LookupOptions),

    /// Card name and image
    Image(crate::lookup::LookupOptions),

    /// Card name and marketplace price links
    Price(crate::lookup::LookupOptions),

    /// Full-text search listing up to 25 printings
    Search(crate::lookup::LookupOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    let (kind, options) = match app.command {
        SubCommands::Text(options) => (ResponseKind::Text, options),
        SubCommands::Image(options) => (ResponseKind::Image, options),
        SubCommands::Price(options) => (ResponseKind::Price, options),
        SubCommands::Search(options) => (ResponseKind::Multi, options),
    };

    crate::lookup::run(kind, options, app.global).await
}

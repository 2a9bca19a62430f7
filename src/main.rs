mod app;
mod auth;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as ClapApp, Arg};
use config::Config;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("sweet")
        .version(crate_version!())
        .about("A terminal shell for the sweet filmmaking project manager")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("path")
                .short("p")
                .long("path")
                .value_name("PATH")
                .help("Opens the view at the given path, e.g. / or /dashboard")
                .default_value("/")
                .takes_value(true),
        )
        .get_matches();

    let log_rx = logger::init(LevelFilter::Debug)?;
    let mut config = Config::new();
    config.load(matches.value_of("config"));

    App::start(config, matches.value_of("path").unwrap_or("/"), log_rx).await?;
    Ok(())
}

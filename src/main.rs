use clap::Parser;
use podview::core::config::{self, PodviewConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "podview", about = "Terminal podcast catalog browser")]
struct Args {
    /// Override the catalog API base URL
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to podview.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("podview.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({e}), falling back to defaults");
        PodviewConfig::default()
    });
    let resolved = config::resolve(&file_config, args.api_base.as_deref());

    log::info!("Podview starting up, catalog at {}", resolved.api_base_url);

    podview::tui::run(resolved)
}

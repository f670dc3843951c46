use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use brook::core::config;
use brook::tui;

#[derive(Parser)]
#[command(name = "brook", about = "Terminal chat client for a streaming chat backend")]
struct Args {
    /// Backend base URL (overrides config file and BROOK_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Fetch the whole response at once instead of streaming
    #[arg(long)]
    no_stream: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to brook.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("brook.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("brook: {e}");
            std::process::exit(2);
        }
    };
    let resolved = config::resolve(file_config, args.base_url, args.no_stream);

    log::info!(
        "Brook starting up against {} (streaming: {})",
        resolved.base_url,
        resolved.streaming
    );

    tui::run(resolved)
}

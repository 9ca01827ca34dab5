use clap::Parser;
use page_signals::analysis::PreviewAnalyzer;
use page_signals::{Scraper, ScraperConfig};
use std::error::Error;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Scrape of {} failed: {}", args.url, e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    let config = args.apply_overrides(config);

    let scraper = Scraper::new(config)?;
    let start_time = std::time::Instant::now();
    let page = scraper.scrape(&args.url).await?;
    ::log::info!(
        "Scraped {} in {:.2} seconds",
        page.url,
        start_time.elapsed().as_secs_f64()
    );

    let value = if args.preview {
        let preview = PreviewAnalyzer::new().preview(&page);
        serde_json::json!({ "page": page, "preview": preview })
    } else {
        serde_json::to_value(&page)?
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}

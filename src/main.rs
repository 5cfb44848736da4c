use clap::Parser;
use league_calendar::utils::{logger, validation::Validate};
use league_calendar::{CalendarEngine, CliArgs, LocalStorage, SchedulePipeline};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting league-calendar");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration resolution failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // Paths arrive fully formed from the config, so the storage root is
    // empty.
    let storage = LocalStorage::default();
    let pipeline = SchedulePipeline::new(storage, config);
    let engine = CalendarEngine::new_with_monitoring(pipeline, args.monitor);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Calendar built successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Calendar build failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

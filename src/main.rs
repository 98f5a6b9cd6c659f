use anyhow::Context;
use clap::Parser;
use hello_basics::utils::error::ErrorSeverity;
use hello_basics::utils::{logger, validation::Validate};
use hello_basics::{CliConfig, DemoConfig, DemoError, Showcase, WriterSink};

fn run(config: &CliConfig) -> anyhow::Result<usize> {
    let demo_config = match &config.config {
        Some(path) => {
            tracing::info!("Loading showcase inputs from {}", path.display());
            DemoConfig::from_file(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?
        }
        None => DemoConfig::default(),
    };
    demo_config.validate().context("invalid showcase config")?;

    let showcase = Showcase::new(demo_config.into_inputs());
    tracing::debug!("Showcase inputs: {:?}", showcase.inputs());

    Ok(showcase.run(WriterSink::stdout())?)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let err = match run(&config) {
        Ok(lines) => {
            tracing::debug!("Done, {} lines written", lines);
            return Ok(());
        }
        Err(err) => err,
    };

    let Some(e) = err.downcast_ref::<DemoError>() else {
        return Err(err);
    };

    if e.severity() == ErrorSeverity::Low {
        tracing::warn!("Showcase stopped early: {:#}", err);
        return Ok(());
    }

    tracing::error!(
        "Showcase failed: {:#} (Category: {:?}, Severity: {:?})",
        err,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

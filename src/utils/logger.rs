use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset or unparsable.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "hello_basics=debug"
    } else {
        "hello_basics=warn"
    }
}

fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Stdout carries only showcase lines; logs always go to stderr.
pub fn init_cli_logger(verbose: bool) {
    let stderr_is_tty = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_tty)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

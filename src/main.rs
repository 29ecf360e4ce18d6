use clap::Parser;
use jan_samasya::cli::Cli;
use jan_samasya::error::FaqError;
use jan_samasya::runner::{Outcome, run};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    match real_main() {
        Ok(Outcome::Success) => {}
        Ok(Outcome::NoMatch) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn real_main() -> Result<Outcome, FaqError> {
    let cli = Cli::parse();
    run(&cli)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

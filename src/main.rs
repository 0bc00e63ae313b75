use clap::Parser;
use tracing_subscriber::EnvFilter;

use assembly_annotator::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("assembly_annotator=debug,info")
    } else {
        EnvFilter::new("assembly_annotator=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match &cli.command {
        cli::Commands::Annotate(args) => {
            cli::annotate::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}

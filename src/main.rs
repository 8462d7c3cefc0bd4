use clap::Parser;
use feature_vote::cli::Cli;
use feature_vote::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    init_tracing();
    feature_vote::ui::run(config)
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gbmflow::config::Cli;
use gbmflow::visualisations::report::{json_report, text_report};
use gbmflow::visualisations::visualisations::plot_price_paths;
use gbmflow::{entropy_rng, seeded_rng, simulate, summarize_paths};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.parameters()?;
    let mode = cli.output_mode()?;

    let mut rng = match cli.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };
    let paths = simulate(&params, mode, &mut rng)?;

    if !cli.no_chart {
        plot_price_paths(&paths, mode, &cli.chart)?;
    }

    let stats = summarize_paths(&paths)?;
    if cli.json {
        println!("{}", json_report(params.steps(), params.scenarios(), &stats)?);
    } else {
        print!("{}", text_report(params.scenarios(), &stats));
    }

    Ok(())
}

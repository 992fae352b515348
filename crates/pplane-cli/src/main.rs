use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use pplane_dot::DotConfig;
use pplane_geom::IncidencePlane;

use output::OutputFormat;

mod output;
mod validate;

#[derive(Parser, Debug)]
#[command(
    name = "pplane",
    about = "Builds the projective plane of a prime order and renders it as a graph"
)]
struct Cli {
    /// Order of the plane; must be a prime at most 100.
    #[arg(long)]
    order: u64,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output syntax.
    #[arg(long, value_enum, default_value = "dot")]
    format: OutputFormat,
    /// Name of the emitted graph in DOT output.
    #[arg(long, default_value = "K")]
    graph_name: String,
    /// Skip the color annotation on path statements.
    #[arg(long)]
    no_color: bool,
    /// Check the incidence axioms after construction (quadratic in the
    /// number of lines).
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    validate::validate_order(cli.order)?;
    let plane = IncidencePlane::build(cli.order)?;
    if cli.verify {
        plane.verify_invariants()?;
    }

    let dot_config = DotConfig {
        graph_name: cli.graph_name,
        colored: !cli.no_color,
    };
    let rendered = output::render(&plane, cli.format, &dot_config)?;
    output::write_artifact(cli.out.as_deref(), &rendered)?;

    if let Some(path) = &cli.out {
        eprintln!(
            "graph of the order-{} plane written to {}",
            plane.order(),
            path.display()
        );
    }
    Ok(())
}

use clap::Parser;
use depgraph_viz::application::dto::{LayoutEngine, OutputFormat};
use std::path::PathBuf;

/// Visualize the dependency graph of a Debian package
#[derive(Parser, Debug)]
#[command(name = "depgraph-viz")]
#[command(version)]
#[command(
    about = "Visualize the dependency graph of a package from a Debian Packages index",
    long_about = None
)]
pub struct Args {
    /// Package whose dependencies are drawn
    pub package: String,

    /// Path to the package index (Packages or Packages.gz)
    #[arg(short, long, value_name = "PATH")]
    pub index: PathBuf,

    /// Output file path; the format extension is appended when missing
    /// (defaults to <PACKAGE>_dependencies)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Graphviz layout engine: dot, neato, fdp, sfdp, circo, twopi, osage or patchwork
    #[arg(short, long)]
    pub engine: Option<LayoutEngine>,

    /// Output format: png, svg, pdf, dot or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Graphviz executable to run instead of `dot` from PATH
    #[arg(long, value_name = "PATH")]
    pub graphviz_bin: Option<PathBuf>,

    /// Config file path (defaults to ./depgraph-viz.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, Settings};
use depgraph_viz::prelude::*;
use std::process;

fn main() {
    // Invalid arguments exit with code 2 inside clap
    let args = Args::parse_args();

    match run(args) {
        Ok(()) => process::exit(ExitCode::Success.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(&args, config.as_ref())?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    progress_reporter.report(&RendererFactory::progress_message(
        settings.format,
        settings.engine,
    ));

    let use_case = VisualizeDependenciesUseCase::new(FileSystemIndexReader::new(), progress_reporter);
    let mut renderer =
        RendererFactory::create(settings.format, settings.engine, settings.graphviz_bin);
    let request = VisualizeRequest::new(args.package, args.index, settings.output_path);

    let response = use_case.visualize(request, renderer.as_mut())?;

    println!("{}", response.output_path.display());
    Ok(())
}

use super::cli::Cli;
use super::error::CliError;
use super::io;
use adsorb::{AdsorbateJob, GraphBuilder, GraphOptions};
use indicatif::{ProgressBar, ProgressStyle};

pub fn run(args: Cli) -> Result<(), CliError> {
    let job = AdsorbateJob::load_from_file(&args.input)?;

    let graph_options = if args.graph.serial {
        GraphOptions::serial()
    } else {
        GraphOptions {
            parallel_threshold: args.graph.parallel_threshold,
        }
    };
    let builder = GraphBuilder::new().with_options(graph_options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Enumerating configurations ({})...", job.describe()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = job.run(&builder);

    pb.finish_and_clear();
    let outcome = result?;

    let source_name = args.input.display().to_string();
    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &job,
        &outcome,
        &args.output.format,
        args.output.precision,
        &source_name,
    )?;

    Ok(())
}

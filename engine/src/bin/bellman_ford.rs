use anyhow::Context;
use bellman_ford_engine::{
    cli::Args,
    io::read_graph,
    report::{format_distances, measure, report_time, SolveReport, Timer},
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    let args = Args::parse();
    let timer = Timer::new();

    let graph = report_time("graph import", || read_graph(&args.graph, args.skip, args.is_weighted()))?;
    let solver = args.algorithm.solver(args.parallel_config());

    let (distances, elapsed) = measure(|| solver.solve(&graph, args.source));
    let distances = distances.with_context(|| format!("{} Bellman-Ford from vertex {} failed", args.algorithm, args.source))?;

    if args.json {
        println!("{}", SolveReport::new(args.algorithm, &graph, args.source, &distances, elapsed).to_json()?);
    } else {
        println!("{}", format_distances(&distances));
        println!("Elapsed time: {}", elapsed.as_secs_f64());
    }
    timer.report_passed_ms("total");

    Ok(())
}

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use hub_sssp::input::RouteInput;
use hub_sssp::report;
use hub_sssp::{HubRouter, RevisitPolicy, RouterConfig, SolverKind};

/// Answers shortest-path queries that must pass through a hub node.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with `u v w` edge lines and `s e` query lines
    #[arg(short, long)]
    input: PathBuf,
    /// Hub node every route passes through
    #[arg(long, default_value = "a")]
    hub: String,
    /// Single-source solver run from the hub
    #[arg(short, long, value_enum, default_value = "auto")]
    solver: SolverArg,
    /// Path reuse policy
    #[arg(short, long, value_enum, default_value = "both")]
    policy: PolicyArg,
    /// Answer queries and build pair tables with rayon
    #[arg(long)]
    parallel: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, ValueEnum, Clone, Copy)]
enum SolverArg {
    Dijkstra,
    BellmanFord,
    Auto,
}

impl From<SolverArg> for SolverKind {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Dijkstra => SolverKind::Dijkstra,
            SolverArg::BellmanFord => SolverKind::BellmanFord,
            SolverArg::Auto => SolverKind::Auto,
        }
    }
}

#[derive(Debug, ValueEnum, Clone, Copy)]
enum PolicyArg {
    Revisits,
    NoRevisits,
    Both,
}

impl PolicyArg {
    fn policies(self) -> Vec<RevisitPolicy> {
        match self {
            PolicyArg::Revisits => vec![RevisitPolicy::AllowRevisits],
            PolicyArg::NoRevisits => vec![RevisitPolicy::NoRevisits],
            PolicyArg::Both => vec![RevisitPolicy::AllowRevisits, RevisitPolicy::NoRevisits],
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let input = RouteInput::from_path(&args.input)?;
    let graph = input.build_graph();
    log::info!(
        "Graph has {} nodes and {} edges, {} queries, hub '{}'",
        graph.node_count(),
        input.edges.len(),
        input.queries.len(),
        args.hub
    );

    let config = RouterConfig::default()
        .with_solver(args.solver.into())
        .with_parallel(args.parallel);
    let mut router = HubRouter::with_config(&graph, &args.hub, config)?;

    let mut reports = Vec::new();
    let mut timings = Vec::new();

    for policy in args.policy.policies() {
        let start = Instant::now();
        // Timed from the hub solve
        router.solve()?;
        let outcomes = router.answer_all(&input.queries, policy)?;
        let elapsed = start.elapsed();

        reports.extend(report::build_reports(&input.queries, &args.hub, policy, outcomes));
        timings.push((policy, elapsed));
    }

    let rendered = if args.json {
        report::to_json(&reports)?
    } else {
        let mut text = report::render_text(&reports);
        for (policy, elapsed) in &timings {
            text.push_str(&format!(
                "//** running time ({}) **//\nRunning-time: {} microseconds\n\n",
                policy.name(),
                elapsed.as_micros()
            ));
        }
        text
    };

    print!("{}", rendered);
    if let Some(path) = &args.output {
        fs::write(path, &rendered)?;
    }

    Ok(())
}

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use mst_compare::{
    generate::{generate_batch, GeneratorConfig},
    io::{read_graphs, write_graphs, write_results},
    ComparisonReport, Edge, Graph, Kruskal, MstBuilder, MstComparator, MstResult, Prim, RunTimings,
};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;
use std::time::{Duration, Instant};

type Weight = u32;

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Box<dyn Error>> {
    matches
        .value_of(name)
        .ok_or_else(|| format!("missing argument {}", name).into())
}

/// Parses an optional flag; a value that is present but does not parse is an error.
fn optional<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Display,
{
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| format!("invalid value '{}' for --{}: {}", value, name, e).into()),
    }
}

fn build_all<B: MstBuilder<Weight>>(builder: &B, graphs: &[Graph<Weight>]) -> Vec<MstResult<Weight>> {
    graphs
        .iter()
        .filter_map(|graph| match builder.build(graph) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("{}: skipping graph {}: {}", builder.name(), graph.id, e);
                None
            }
        })
        .collect()
}

fn time_builder<B: MstBuilder<Weight>>(builder: &B, graphs: &[Graph<Weight>]) -> Duration {
    let start = Instant::now();
    for graph in graphs {
        let _ = std::hint::black_box(builder.build(graph));
    }
    start.elapsed()
}

fn handle_build<B: MstBuilder<Weight>>(builder: B, matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graphs: Vec<Graph<Weight>> = read_graphs(required(matches, "INPUT")?)?;
    let results = build_all(&builder, &graphs);
    for result in &results {
        println!(
            "Graph {}: total weight {} ({} edges)",
            result.graph_id,
            result.total_weight,
            result.edge_count()
        );
        for edge in &result.mst_edges {
            println!("    {}", edge);
        }
    }
    write_results(required(matches, "OUTPUT")?, &results)?;
    Ok(())
}

const FULL_EDGE_LIST: usize = 10;
const EDGE_PREVIEW: usize = 5;

/// Renders a tree's edges, all of them for small trees, otherwise the first few.
fn edge_preview(edges: &[Edge<Weight>]) -> String {
    let shown = if edges.len() <= FULL_EDGE_LIST {
        edges
    } else {
        &edges[..EDGE_PREVIEW]
    };
    let list = shown
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if shown.len() < edges.len() {
        format!("[showing first {} of {}] [{}]", shown.len(), edges.len(), list)
    } else {
        format!("[{}]", list)
    }
}

/// Absolute gap between the two timings and which builder came out ahead.
fn speed_difference(timings: &RunTimings) -> String {
    let (gap, verdict) = match timings.kruskal.cmp(&timings.prim) {
        Ordering::Less => (timings.prim - timings.kruskal, "Kruskal faster"),
        Ordering::Greater => (timings.kruskal - timings.prim, "Prim faster"),
        Ordering::Equal => (Duration::ZERO, "no difference"),
    };
    format!("{:.3} ms ({})", gap.as_secs_f64() * 1e3, verdict)
}

fn print_report(report: &ComparisonReport<Weight>, timings: &RunTimings, runs: u32) {
    println!("Graph-by-Graph Analysis:");
    println!("{}", "-".repeat(80));
    for c in &report.comparisons {
        println!("Graph {}:", c.graph_id);
        println!(
            "  MST Weight: Kruskal={}, Prim={} {}",
            c.kruskal.total_weight,
            c.prim.total_weight,
            if c.weights_match { "ok" } else { "MISMATCH" }
        );
        println!(
            "  Edge Count: Kruskal={}, Prim={} {}",
            c.kruskal.edge_count(),
            c.prim.edge_count(),
            if c.edge_counts_match { "ok" } else { "MISMATCH" }
        );
        println!("  Kruskal MST Edges: {}", edge_preview(&c.kruskal.mst_edges));
        println!("  Prim MST Edges:    {}", edge_preview(&c.prim.mst_edges));
        println!();
    }
    for failure in &report.failures {
        println!("Graph {}: FAILED ({})", failure.graph_id, failure.error);
    }

    let summary = &report.summary;
    let total = summary.graphs_processed + summary.failed;
    println!();
    println!("Average performance ({} runs):", runs);
    println!("  Kruskal: {:.3} ms", timings.kruskal.as_secs_f64() * 1e3);
    println!("  Prim:    {:.3} ms", timings.prim.as_secs_f64() * 1e3);
    println!("  Difference: {}", speed_difference(timings));
    println!("Summary:");
    println!("  Total graphs processed: {}", total);
    println!("  Perfect matches: {}/{}", summary.perfect_matches, total);
    println!("  Average vertices per graph: {:.1}", summary.average_vertices);
    println!("  Average edges per graph: {:.1}", summary.average_edges);
    match summary.performance_ratio {
        Some(ratio) => println!("  Performance ratio: {:.2} (Kruskal/Prim)", ratio),
        None => println!("  Performance ratio: n/a"),
    }
}

fn handle_compare(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graphs: Vec<Graph<Weight>> = read_graphs(required(matches, "INPUT")?)?;
    let runs = value_t!(matches, "runs", u32).unwrap_or_else(|e| e.exit());
    if runs == 0 {
        return Err("--runs must be at least 1".into());
    }

    let comparator = MstComparator::new();
    let report = if matches.is_present("parallel") {
        comparator.compare_par(&graphs)
    } else {
        comparator.compare(&graphs)
    };

    let mut total = RunTimings::default();
    for run in 1..=runs {
        let kruskal = time_builder(&Kruskal, &graphs);
        let prim = time_builder(&Prim, &graphs);
        info!("run #{}: kruskal {:?}, prim {:?}", run, kruskal, prim);
        total.kruskal += kruskal;
        total.prim += prim;
    }
    let average = RunTimings {
        kruskal: total.kruskal / runs,
        prim: total.prim / runs,
    };
    let report = report.with_timings(average);
    print_report(&report, &average, runs);

    if matches.is_present("strict") && !report.all_match() {
        return Err(format!(
            "builders disagree on graphs {:?}",
            report.summary.mismatched_graph_ids
        )
        .into());
    }
    Ok(())
}

fn handle_generate(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let defaults = GeneratorConfig::default();
    let config = GeneratorConfig {
        num_graphs: optional(matches, "graphs")?.unwrap_or(defaults.num_graphs),
        min_vertices: optional(matches, "min-vertices")?.unwrap_or(defaults.min_vertices),
        max_vertices: optional(matches, "max-vertices")?.unwrap_or(defaults.max_vertices),
        seed: optional(matches, "seed")?,
        ..defaults
    };
    let graphs = generate_batch(&config)?;
    write_graphs(required(matches, "OUTPUT")?, &graphs)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let build_args = [
        Arg::with_name("INPUT").required(true).help("Graph batch (JSON)"),
        Arg::with_name("OUTPUT").required(true).help("Result file (JSON)"),
    ];
    let matches = App::new("mst-compare")
        .about("Minimum spanning trees with Kruskal and Prim")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("kruskal")
                .about("Build MSTs with Kruskal's algorithm")
                .args(&build_args),
        )
        .subcommand(
            SubCommand::with_name("prim")
                .about("Build MSTs with Prim's algorithm")
                .args(&build_args),
        )
        .subcommand(
            SubCommand::with_name("compare")
                .about("Run both algorithms and compare their trees")
                .arg(Arg::with_name("INPUT").required(true))
                .arg(
                    Arg::with_name("runs")
                        .long("runs")
                        .takes_value(true)
                        .default_value("3"),
                )
                .arg(Arg::with_name("parallel").long("parallel"))
                .arg(
                    Arg::with_name("strict")
                        .long("strict")
                        .help("Exit with an error if any graph mismatches"),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Write a batch of random connected graphs")
                .arg(Arg::with_name("OUTPUT").required(true))
                .arg(Arg::with_name("graphs").long("graphs").takes_value(true))
                .arg(
                    Arg::with_name("min-vertices")
                        .long("min-vertices")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("max-vertices")
                        .long("max-vertices")
                        .takes_value(true),
                )
                .arg(Arg::with_name("seed").long("seed").takes_value(true)),
        )
        .get_matches();

    match matches.subcommand() {
        ("kruskal", Some(m)) => handle_build(Kruskal, m),
        ("prim", Some(m)) => handle_build(Prim, m),
        ("compare", Some(m)) => handle_compare(m),
        ("generate", Some(m)) => handle_generate(m),
        _ => Ok(()),
    }
}

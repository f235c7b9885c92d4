use algolab::{
    fs::{LoadError, load_json, parse_json},
    graph::{AdjacencyMap, EdgeDensity, Point, SparseGraph, random_dense_graph},
    heap::{
        MinOrder, NoTrace, SwapObserver, TracingObserver, build_heap, descending_keys, heap_sort,
    },
    sorting::{hybrid_sort, insertion_sort, merge_sort, quick_sort},
    statistics::{ComparisonStats, CorrelationError, PairedSamples, synthetic_pairs},
};
use clap::{Args, Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{path::PathBuf, process::ExitCode, time::Instant};
use thiserror::Error;
use tqdm::tqdm;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const INSERTION_SAMPLE: [i64; 13] = [6, 5, 4, 3, 2, 1, 23, 6236, 2623, 1, 21, 241, 141];
const MERGE_SAMPLE: [i64; 21] = [
    3, 12, 4, 21, 5, 21, 4, 12, 41, 24, 124, 54372, 0, 23462, 34, 23426, 34, 34623, 4, 236236, 12,
];
const DUPLICATES_SAMPLE: [i64; 10] = [5, 3, 8, 3, 9, 1, 5, 3, 2, 8];
const STONES: [[i64; 2]; 6] = [[0, 0], [0, 1], [1, 0], [1, 2], [2, 1], [2, 2]];
const CORRELATION_X: [f64; 5] = [2.5, 3.4, 5.6, 6.7, 7.9];
const CORRELATION_Y: [f64; 5] = [10.2, 11.8, 13.7, 19.7, 20.6];

/// Textbook sorting, heap, graph and statistics routines
#[derive(Parser, Debug)]
#[command(name = "algolab")]
#[command(about = "Runs classic algorithms on sample inputs and prints what they did", long_about = None)]
struct Cli {
    /// Log at debug level (swap traces, loaded inputs, per-node distances)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SequenceInput {
    /// Sequence to use instead of the built-in sample, as a JSON array (e.g. "[3,1,2]")
    #[arg(long, conflicts_with = "input")]
    values: Option<String>,

    /// JSON file holding the sequence
    #[arg(long)]
    input: Option<PathBuf>,
}

impl SequenceInput {
    fn resolve(&self, sample: &[i64]) -> Result<Vec<i64>, LoadError> {
        match (&self.values, &self.input) {
            (Some(text), _) => parse_json(text),
            (None, Some(path)) => load_json(path),
            (None, None) => Ok(sample.to_vec()),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build min-heaps from [n, n-1, ..., 1] for n = 1..=max-size and count key comparisons
    HeapBuild {
        #[arg(long, default_value_t = 10)]
        max_size: usize,

        /// Log every swap and the resulting array
        #[arg(long)]
        trace: bool,
    },
    /// Heap sort a sequence
    HeapSort(SequenceInput),
    /// Insertion sort a sequence
    Insertion(SequenceInput),
    /// Merge sort a sequence
    Merge(SequenceInput),
    /// Quicksort a sequence (defaults to 99 down to 1) and count comparisons
    Quick(SequenceInput),
    /// Merge sort with insertion-sorted halves below a threshold
    Hybrid {
        #[command(flatten)]
        input: SequenceInput,

        /// Largest half length handed to insertion sort
        #[arg(long, default_value_t = 2)]
        threshold: usize,
    },
    /// Link points sharing a row or column and report what each one reaches
    Stones {
        /// JSON file with points as [[row, col], ...]
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Pearson correlation of two sample sequences
    Correlate {
        /// JSON file with {"x": [...], "y": [...]}
        #[arg(long, conflicts_with = "synthetic")]
        input: Option<PathBuf>,

        /// Generate this many noisy samples along y = 2x + 1 instead
        #[arg(long)]
        synthetic: Option<usize>,

        /// Standard deviation of the synthetic noise
        #[arg(long, default_value_t = 1.0)]
        noise: f64,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Compare Dijkstra over an array queue and a binary heap queue
    Dijkstra {
        #[arg(long, default_value_t = 60)]
        nodes: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Walk graph sizes 100..=1000 instead of a single run
        #[arg(long)]
        sweep: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Correlation(#[from] CorrelationError),
    #[error("a graph needs at least one node")]
    EmptyGraph,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_heap_build(max_size: usize, trace: bool) {
    let mut observer: Box<dyn SwapObserver<i64>> = if trace {
        Box::new(TracingObserver)
    } else {
        Box::new(NoTrace)
    };

    for size in 1..=max_size {
        let mut heap: Vec<i64> = descending_keys(size);
        // fresh counters for every measured run
        let mut stats = ComparisonStats::new();
        build_heap(&mut heap, &MinOrder, Some(&mut stats), observer.as_mut());
        println!(
            "num key comparisons {:?}: {}",
            heap,
            stats.get_comparisons()
        );
    }
}

fn run_stones(input: Option<PathBuf>) -> Result<(), CliError> {
    let points: Vec<Point> = match input {
        Some(path) => load_json(&path)?,
        None => STONES.into_iter().map(Point::from).collect(),
    };

    let adjacency = AdjacencyMap::build(&points);
    println!("{adjacency}");

    for &point in adjacency.points() {
        let mut reached: Vec<Point> = adjacency.reachable_from(point).into_iter().collect();
        reached.sort();
        let listed: Vec<String> = reached.iter().map(Point::to_string).collect();
        println!("{point} reaches {{{}}}", listed.join(", "));
    }

    let components = adjacency.connected_components().len();
    println!(
        "{} distinct points in {} connected component(s), {} removable",
        adjacency.len(),
        components,
        adjacency.len() - components
    );
    Ok(())
}

fn run_correlate(
    input: Option<PathBuf>,
    synthetic: Option<usize>,
    noise: f64,
    seed: u64,
) -> Result<(), CliError> {
    let samples = match (input, synthetic) {
        (Some(path), _) => load_json::<PairedSamples>(&path)?,
        (None, Some(n)) => synthetic_pairs(n, 2.0, 1.0, noise, seed)?,
        (None, None) => PairedSamples {
            x: CORRELATION_X.to_vec(),
            y: CORRELATION_Y.to_vec(),
        },
    };
    debug!(samples = samples.x.len(), "computing correlation");

    let correlation = samples.correlation()?;
    println!("{}", correlation.numerator);
    println!("{}", correlation.denominator);
    println!("{}", correlation.coefficient);
    Ok(())
}

fn run_dijkstra(nodes: usize, seed: u64, sweep: bool) -> Result<(), CliError> {
    let mut rng = StdRng::seed_from_u64(seed);

    if sweep {
        println!("nodes,edges,array_comparisons,heap_comparisons,array_ns,heap_ns");
        for n in tqdm((100..=1000).step_by(100)).desc(Some("dijkstra sweep")) {
            let dense = random_dense_graph(n, EdgeDensity::Medium.extra_edges(n), &mut rng);
            let sparse = SparseGraph::from(&dense);
            let source = rng.random_range(0..n);

            let start = Instant::now();
            let array = dense.dijkstra(source);
            let array_ns = start.elapsed().as_nanos();

            let start = Instant::now();
            let heap = sparse.dijkstra(source);
            let heap_ns = start.elapsed().as_nanos();

            println!(
                "{},{},{},{},{},{}",
                n,
                sparse.edge_count(),
                array.stats.get_comparisons(),
                heap.stats.get_comparisons(),
                array_ns,
                heap_ns
            );
        }
        return Ok(());
    }

    if nodes == 0 {
        return Err(CliError::EmptyGraph);
    }
    for density in [EdgeDensity::Dense, EdgeDensity::Sparse, EdgeDensity::Medium] {
        let dense = random_dense_graph(nodes, density.extra_edges(nodes), &mut rng);
        let source = rng.random_range(0..nodes);

        let array = dense.dijkstra(source);
        let heap = SparseGraph::from(&dense).dijkstra(source);
        info!(?density, nodes, source, "ran both queue strategies");

        for (node, (distance, predecessor)) in array
            .distances
            .iter()
            .zip(&array.predecessors)
            .enumerate()
        {
            debug!(node, ?distance, ?predecessor, "shortest path");
        }

        println!(
            "{:?} graph, {} edges, source {}: array queue {} key comparisons, heap queue {}",
            density,
            dense.edge_count() / 2,
            source,
            array.stats.get_comparisons(),
            heap.stats.get_comparisons()
        );
    }
    Ok(())
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::HeapBuild { max_size, trace } => run_heap_build(max_size, trace),
        Command::HeapSort(input) => {
            let mut values = input.resolve(&DUPLICATES_SAMPLE)?;
            let stats = heap_sort(&mut values);
            println!("{values:?}");
            info!(comparisons = stats.get_comparisons(), "heap sort done");
        }
        Command::Insertion(input) => {
            let mut values = input.resolve(&INSERTION_SAMPLE)?;
            println!("{:?}", insertion_sort(&mut values));
        }
        Command::Merge(input) => {
            let values = input.resolve(&MERGE_SAMPLE)?;
            println!("{:?}", merge_sort(&values));
        }
        Command::Quick(input) => {
            let reversed: Vec<i64> = (1..100).rev().collect();
            let mut values = input.resolve(&reversed)?;
            let stats = quick_sort(&mut values);
            println!("{values:?}");
            println!("comparisons: {}", stats.get_comparisons());
        }
        Command::Hybrid { input, threshold } => {
            let values = input.resolve(&DUPLICATES_SAMPLE)?;
            println!("{:?}", hybrid_sort(&values, threshold));
        }
        Command::Stones { input } => run_stones(input)?,
        Command::Correlate {
            input,
            synthetic,
            noise,
            seed,
        } => run_correlate(input, synthetic, noise, seed)?,
        Command::Dijkstra { nodes, seed, sweep } => run_dijkstra(nodes, seed, sweep)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let traced_heap = matches!(cli.command, Command::HeapBuild { trace: true, .. });
    init_logging(cli.verbose || traced_heap);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

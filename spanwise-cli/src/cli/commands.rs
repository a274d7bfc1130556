//! Command implementations and argument parsing for the spanwise CLI.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::SmallRng};
use spanwise_core::{
    AdjacencyDisplay, Benchmark, BenchmarkBuilder, BenchmarkError, BenchmarkReport,
    GenerationReport, Graph, GraphError, LoadError, MatrixDisplay, MstAlgorithm,
    STANDARD_REPETITIONS, SpanningTree, standard_suite, write_edge_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Compare Prim's and Kruskal's MST algorithms over matrix and list graph storage."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load an edge-list file and print both representations.
    Show(ShowCommand),
    /// Load an edge-list file and print minimum spanning trees.
    Mst(MstCommand),
    /// Generate a random connected graph as an edge list.
    Generate(GenerateCommand),
    /// Time the four engines on generated graphs.
    Bench(BenchCommand),
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Edge-list file to load.
    pub path: PathBuf,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Edge-list file to load.
    pub path: PathBuf,

    /// Engine to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::All)]
    pub algorithm: AlgorithmChoice,
}

/// Engine selection for the `mst` command.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Prim's algorithm over the matrix.
    PrimMatrix,
    /// Prim's algorithm over the adjacency list.
    PrimList,
    /// Kruskal's algorithm over matrix-harvested edges.
    KruskalMatrix,
    /// Kruskal's algorithm over list-harvested edges.
    KruskalList,
    /// Every engine in turn.
    All,
}

impl AlgorithmChoice {
    fn algorithms(self) -> &'static [MstAlgorithm] {
        match self {
            Self::PrimMatrix => &[MstAlgorithm::PrimMatrix],
            Self::PrimList => &[MstAlgorithm::PrimList],
            Self::KruskalMatrix => &[MstAlgorithm::KruskalMatrix],
            Self::KruskalList => &[MstAlgorithm::KruskalList],
            Self::All => &MstAlgorithm::ALL,
        }
    }
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices.
    #[arg(long)]
    pub vertices: usize,

    /// Target density in `[0.0, 1.0]`.
    #[arg(long)]
    pub density: f64,

    /// Seed for reproducible output (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the edge list here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options accepted by the `bench` command.
#[derive(Debug, Args, Clone)]
pub struct BenchCommand {
    /// Number of vertices per generated graph.
    #[arg(long, required_unless_present = "standard", conflicts_with = "standard")]
    pub vertices: Option<usize>,

    /// Target density of every generated graph.
    #[arg(long, required_unless_present = "standard", conflicts_with = "standard")]
    pub density: Option<f64>,

    /// Graphs generated per configuration.
    #[arg(long, default_value_t = STANDARD_REPETITIONS, conflicts_with = "standard")]
    pub repetitions: usize,

    /// Run the full grid of standard sizes and densities.
    #[arg(long)]
    pub standard: bool,

    /// Seed for the graph generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing an output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// `bench` was given neither a full configuration nor `--standard`.
    #[error("bench needs --vertices and --density, or --standard")]
    IncompleteBenchmark,
    /// Loading an edge list failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Graph construction or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The benchmark harness failed.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::IncompleteBenchmark => "CLI_INCOMPLETE_BENCHMARK",
            Self::Load(err) => err.code().as_str(),
            Self::Graph(err) => err.code().as_str(),
            Self::Benchmark(err) => err.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A loaded graph to display.
    Show {
        /// The loaded graph.
        graph: Graph,
    },
    /// Spanning trees computed over a loaded graph.
    Mst {
        /// One tree per selected engine, in engine order.
        trees: Vec<SpanningTree>,
    },
    /// A generated graph.
    Generate {
        /// The generated graph.
        graph: Graph,
        /// Generator statistics.
        report: GenerationReport,
        /// Seed that reproduces the graph.
        seed: u64,
        /// File the edge list was written to, if any.
        output: Option<PathBuf>,
    },
    /// Benchmark timings, one report per configuration.
    Bench {
        /// Reports in execution order.
        reports: Vec<BenchmarkReport>,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation, benchmarking or writing
/// an output file fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, ExecutionSummary, MstCommand, AlgorithmChoice, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n0 1 4\n1 2 2\n0 2 9\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         algorithm: AlgorithmChoice::KruskalList,
///     }),
/// };
/// let ExecutionSummary::Mst { trees } = run_cli(cli)? else {
///     unreachable!("mst yields an mst summary");
/// };
/// assert_eq!(trees[0].total_weight(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Show(command) => {
            span.record("command", field::display("show"));
            run_show(&command)
        }
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(&command)
        }
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command)
        }
        Command::Bench(command) => {
            span.record("command", field::display("bench"));
            run_bench(&command)
        }
    }
}

#[instrument(name = "cli.show", err, skip(command), fields(path = %command.path.display()))]
pub(super) fn run_show(command: &ShowCommand) -> Result<ExecutionSummary, CliError> {
    let graph = Graph::from_edge_list_path(&command.path)?;
    Ok(ExecutionSummary::Show { graph })
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = %command.path.display(), algorithm = ?command.algorithm),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<ExecutionSummary, CliError> {
    let graph = Graph::from_edge_list_path(&command.path)?;
    let trees: Vec<SpanningTree> = command
        .algorithm
        .algorithms()
        .iter()
        .map(|algorithm| algorithm.run(&graph))
        .collect();
    info!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        trees = trees.len(),
        "spanning trees computed"
    );
    Ok(ExecutionSummary::Mst { trees })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        vertices = command.vertices,
        density = command.density,
        seed = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let GenerateCommand {
        vertices,
        density,
        seed,
        output,
    } = command;
    let seed = seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);

    let mut graph = Graph::new(vertices)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let report = graph.generate_random(density, &mut rng)?;
    if let Some(path) = &output {
        write_graph_file(&graph, path)?;
        info!(path = %path.display(), edge_count = graph.edge_count(), "edge list written");
    }
    Ok(ExecutionSummary::Generate {
        graph,
        report,
        seed,
        output,
    })
}

#[instrument(
    name = "cli.bench",
    err,
    skip(command),
    fields(standard = command.standard, seed = command.seed),
)]
pub(super) fn run_bench(command: &BenchCommand) -> Result<ExecutionSummary, CliError> {
    let benchmarks = benchmarks_for(command)?;
    let mut reports = Vec::with_capacity(benchmarks.len());
    for benchmark in &benchmarks {
        reports.push(benchmark.run()?);
    }
    Ok(ExecutionSummary::Bench { reports })
}

pub(super) fn benchmarks_for(command: &BenchCommand) -> Result<Vec<Benchmark>, CliError> {
    if command.standard {
        return Ok(standard_suite(command.seed));
    }
    let (Some(vertices), Some(density)) = (command.vertices, command.density) else {
        return Err(CliError::IncompleteBenchmark);
    };
    let benchmark = BenchmarkBuilder::new()
        .with_vertex_count(vertices)
        .with_density(density)
        .with_repetitions(command.repetitions)
        .with_seed(command.seed)
        .build()?;
    Ok(vec![benchmark])
}

fn write_graph_file(graph: &Graph, path: &Path) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    write_edge_list(graph, BufWriter::new(file)).map_err(io_error)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// `generate` without `--output` renders the edge list itself so the output
/// can be redirected straight into a file that `show` and `mst` accept.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{ExecutionSummary, render_summary};
/// # use spanwise_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::new(2)?;
/// graph.add_edge(0, 1, 3)?;
/// let summary = ExecutionSummary::Mst {
///     trees: vec![graph.run_prim_matrix()],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "prim-matrix:\n0 - 1\t3\ntotal weight: 3\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Show { graph } => {
            writeln!(
                writer,
                "vertices: {}, edges: {}, density: {:.4}",
                graph.vertex_count(),
                graph.edge_count(),
                graph.density()
            )?;
            writeln!(writer, "\nmatrix representation:")?;
            write!(writer, "{}", MatrixDisplay::new(graph))?;
            writeln!(writer, "\nadjacency list representation:")?;
            write!(writer, "{}", AdjacencyDisplay::new(graph))?;
        }
        ExecutionSummary::Mst { trees } => {
            for (index, tree) in trees.iter().enumerate() {
                if index > 0 {
                    writeln!(writer)?;
                }
                writeln!(writer, "{tree}")?;
            }
        }
        ExecutionSummary::Generate {
            graph,
            report,
            seed,
            output,
        } => match output {
            Some(path) => writeln!(
                writer,
                "wrote {} edges over {} vertices to {} (density {:.4}, seed {seed})",
                graph.edge_count(),
                graph.vertex_count(),
                path.display(),
                report.achieved_density,
            )?,
            None => write_edge_list(graph, &mut writer)?,
        },
        ExecutionSummary::Bench { reports } => {
            for report in reports {
                write!(writer, "{report}")?;
            }
        }
    }
    Ok(())
}

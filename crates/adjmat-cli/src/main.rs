use adjmat::{Cost, Graph, GraphOptions, Script, Step, VertexRemoval};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Graph(adjmat::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Graph(err) => write!(f, "error: {err}"),
        }
    }
}

impl From<adjmat::Error> for CliError {
    fn from(value: adjmat::Error) -> Self {
        Self::Graph(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Show,
    Vertices,
    Edges,
    Matrix,
    Steps,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    specs: Vec<String>,
    directed: bool,
    cascade: bool,
    default_cost: Option<Cost>,
    removals: Vec<(String, String)>,
    unbinds: Vec<String>,
    verbose: bool,
}

fn usage() -> &'static str {
    "adjmat\n\
\n\
USAGE:\n\
  adjmat [show|vertices|edges|matrix|steps] [--directed] [--cascade] [--default-cost <n>] [--remove <a-b>]... [--unbind <label>]... [--verbose] <spec>...\n\
\n\
SPECS:\n\
  a        vertex a\n\
  a-b      undirected edge, default cost\n\
  a>b      directed edge, default cost\n\
  a-b:10   edge with cost 10 (also a>b:10)\n\
\n\
NOTES:\n\
  - Vertices are bound to slots in sorted label order, then edges are set in argument order.\n\
  - --directed makes a-b specs directed as well.\n\
  - --remove and --unbind run after the graph is built, in argument order.\n\
  - --cascade clears an unbound vertex's edges instead of leaving them in the matrix.\n\
  - ADJMAT_LOG=<trace|debug|info|warn|error> overrides the log level (logs go to stderr).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "show" => args.command = Command::Show,
            "vertices" => args.command = Command::Vertices,
            "edges" => args.command = Command::Edges,
            "matrix" => args.command = Command::Matrix,
            "steps" => args.command = Command::Steps,
            "--directed" => args.directed = true,
            "--cascade" => args.cascade = true,
            "--verbose" | "-v" => args.verbose = true,
            "--default-cost" => {
                let Some(cost) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.default_cost =
                    Some(cost.parse::<Cost>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--remove" => {
                let Some(pair) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let Some((v, w)) = pair.split_once('-') else {
                    return Err(CliError::Usage(usage()));
                };
                let (v, w) = (v.trim(), w.trim());
                if v.is_empty() || w.is_empty() {
                    return Err(CliError::Usage(usage()));
                }
                args.removals.push((v.to_string(), w.to_string()));
            }
            "--unbind" => {
                let Some(label) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.unbinds.push(label.trim().to_string());
            }
            "--" => {
                args.specs.extend(it.by_ref().cloned());
            }
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
            spec => args.specs.push(spec.to_string()),
        }
    }

    if args.specs.is_empty() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn log_level(verbose: bool) -> Level {
    if let Some(level) = std::env::var("ADJMAT_LOG")
        .ok()
        .and_then(|raw| Level::from_str(raw.trim()).ok())
    {
        return level;
    }
    if verbose { Level::DEBUG } else { Level::WARN }
}

fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a global tracing subscriber is already installed");
    }
}

fn build(args: &Args) -> Result<(Graph, Script), CliError> {
    let mut script = Script::from_specs(&args.specs, args.directed)?;
    for (source, target) in &args.removals {
        script.push(Step::RemoveEdge {
            source: source.clone(),
            target: target.clone(),
        });
    }
    for label in &args.unbinds {
        script.push(Step::UnbindVertex {
            label: label.clone(),
        });
    }

    let mut options = GraphOptions::default();
    if let Some(cost) = args.default_cost {
        options.default_cost = cost;
    }
    if args.cascade {
        options.vertex_removal = VertexRemoval::Cascade;
    }

    let mut graph = script.graph_with(options)?;
    let applied = script.run(&mut graph)?;
    tracing::info!(applied, capacity = graph.capacity(), "graph built");
    Ok((graph, script))
}

fn render_vertices(graph: &Graph) -> String {
    let mut out = graph.vertices().collect::<Vec<_>>().join(" ");
    out.push('\n');
    out
}

fn render_edges(graph: &Graph) -> String {
    let mut out = String::new();
    for e in graph.edges() {
        let _ = writeln!(out, "{} {} {}", e.source, e.target, e.cost);
    }
    out
}

fn render_matrix(graph: &Graph) -> String {
    let headers: Vec<&str> = graph
        .slots()
        .iter()
        .map(|l| l.as_deref().unwrap_or("_"))
        .collect();
    let cells: Vec<Vec<String>> = graph
        .raw_matrix()
        .rows()
        .map(|row| {
            row.iter()
                .map(|c| c.map_or_else(|| ".".to_string(), |cost| cost.to_string()))
                .collect()
        })
        .collect();

    let label_width = headers.iter().map(|h| h.len()).max().unwrap_or(0);
    let cell_width = cells
        .iter()
        .flatten()
        .map(String::len)
        .chain(headers.iter().map(|h| h.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:label_width$}", "");
    for h in &headers {
        let _ = write!(out, " {h:>cell_width$}");
    }
    out.push('\n');
    for (h, row) in headers.iter().zip(&cells) {
        let _ = write!(out, "{h:<label_width$}");
        for c in row {
            let _ = write!(out, " {c:>cell_width$}");
        }
        out.push('\n');
    }
    out
}

fn render_steps(script: &Script) -> String {
    let mut out = String::new();
    for (i, step) in script.history().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {step}", i + 1);
    }
    out
}

fn run(args: Args) -> Result<(), CliError> {
    let (graph, script) = build(&args)?;
    let text = match args.command {
        Command::Vertices => render_vertices(&graph),
        Command::Edges => render_edges(&graph),
        Command::Matrix => render_matrix(&graph),
        Command::Steps => render_steps(&script),
        Command::Show => format!(
            "vertices: {}\n{}\nedges:\n{}",
            render_vertices(&graph).trim_end(),
            render_matrix(&graph),
            render_edges(&graph)
        ),
    };
    print!("{text}");
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(log_level(args.verbose));

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

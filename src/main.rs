// Algotty: Time-Travel Algorithm Visualizer for the Terminal

mod algos;
mod input;
mod playback;
mod session;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algos::graph::{BreadthFirst, DepthFirst, GraphState};
use algos::queue::{QueueOps, QueueState};
use algos::two_pointer::{
    ArrayState, ContainerBruteForce, ContainerTwoPointer, TrapBruteForce, TrapTwoPointer,
};
use algos::TraceGenerator;
use input::{GraphParams, QueueOp};
use playback::autoplay::Speed;
use session::Session;
use trace::view::DisplayState;
use ui::App;

const DEFAULT_TRAP: &str = "0,1,0,2,1,0,1,3,2,1,2,1";
const DEFAULT_CONTAINER: &str = "1,8,6,2,5,4,8,3,7";
const DEFAULT_GRAPH: &str = "nodes: a b c d e f; edges: a-b a-c b-d c-e d-f; start: a";
const DEFAULT_QUEUE: &str = "enqueue 5, enqueue 3, dequeue, enqueue 7, enqueue 1, dequeue";

fn usage(program_name: &str) {
    eprintln!("Usage: {} <algorithm> [input]", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    eprintln!("  trap        Trapping rain water        input: comma-separated heights");
    eprintln!("  container   Container with most water  input: comma-separated heights");
    eprintln!("  graph       Graph traversal (BFS/DFS)  input: nodes: ..; edges: ..; start: ..");
    eprintln!("  queue       FIFO queue replay          input: enqueue N / dequeue, comma-separated");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} trap", program_name);
    eprintln!("  {} container \"1,8,6,2,5,4,8,3,7\"", program_name);
    eprintln!("  {} graph \"nodes: a b c; edges: a-b b-c; start: a\"", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("algotty")
        .to_string();

    let Some(algorithm) = args.get(1) else {
        eprintln!("Error: no algorithm selected");
        eprintln!();
        usage(&program_name);
        std::process::exit(1);
    };

    let raw_input = args.get(2).cloned();

    match algorithm.as_str() {
        "trap" => {
            let variants: Vec<Box<dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>>> =
                vec![Box::new(TrapTwoPointer), Box::new(TrapBruteForce)];
            let session = Session::new(input::parse_heights, variants, Speed::Medium);
            run(
                session,
                "Trapping Rain Water",
                raw_input.as_deref().unwrap_or(DEFAULT_TRAP),
            )
        }
        "container" => {
            let variants: Vec<Box<dyn TraceGenerator<Params = Vec<i64>, State = ArrayState>>> =
                vec![Box::new(ContainerTwoPointer), Box::new(ContainerBruteForce)];
            let session = Session::new(input::parse_heights, variants, Speed::Medium);
            run(
                session,
                "Container With Most Water",
                raw_input.as_deref().unwrap_or(DEFAULT_CONTAINER),
            )
        }
        "graph" => {
            let variants: Vec<Box<dyn TraceGenerator<Params = GraphParams, State = GraphState>>> =
                vec![Box::new(BreadthFirst), Box::new(DepthFirst)];
            let session = Session::new(input::parse_graph, variants, Speed::Medium);
            run(
                session,
                "Graph Traversal",
                raw_input.as_deref().unwrap_or(DEFAULT_GRAPH),
            )
        }
        "queue" => {
            let variants: Vec<Box<dyn TraceGenerator<Params = Vec<QueueOp>, State = QueueState>>> =
                vec![Box::new(QueueOps)];
            let session = Session::new(input::parse_queue_ops, variants, Speed::Medium);
            run(
                session,
                "Queue Operations",
                raw_input.as_deref().unwrap_or(DEFAULT_QUEUE),
            )
        }
        other => {
            eprintln!("Error: unknown algorithm '{}'", other);
            eprintln!();
            usage(&program_name);
            std::process::exit(1);
        }
    }
}

fn run<P, S: DisplayState>(
    mut session: Session<P, S>,
    title: &str,
    raw: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate and generate before touching the terminal, so a rejected
    // input prints a plain diagnostic instead of garbling the screen
    eprintln!("Validating input...");
    if let Err(e) = session.load(raw) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    eprintln!(
        "Generated {} snapshots with the '{}' variant.",
        session.trace_len(),
        session.variant_name()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, title);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

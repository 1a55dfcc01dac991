use clap::Parser;
use pasci::ast::Node;
use pasci::errors::PasResult;
use pasci::interpreter::GlobalStore;
use pasci::semantic::SymbolTable;
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interpreter for a small Pascal subset",
    long_about = "Interpreter for a small Pascal subset.\n\
                 The source is tokenized, parsed into a syntax tree, checked\n\
                 against its declarations, and executed by walking the tree.\n\
                 The resulting symbol table and variable values are printed.\n\
                 \n\
                 Example usage:\n\
                 pasci input.pas                   # Interpret a program\n\
                 pasci input.pas --show-tokens     # Print the token stream\n\
                 pasci input.pas --show-ast        # Display abstract syntax tree\n\
                 pasci input.pas --verbose         # Verbose stage output\n\
                 pasci input.pas --timing          # Show per-stage timing"
)]
struct Cli {
    // The path to the file to interpret
    path: PathBuf,

    // Print the token stream before parsing
    #[arg(long)]
    show_tokens: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show interpretation timing
    #[arg(short, long)]
    timing: bool,
}

// Per-stage timing for performance analysis
#[derive(Debug, Default)]
struct InterpretationStats {
    parse_time: f64,
    analysis_time: f64,
    eval_time: f64,
    total_time: f64,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Parse the source into its syntax tree
fn parsing_phase(
    source: &str,
    stats: &mut InterpretationStats,
    verbose: bool,
) -> PasResult<pasci::ast::Program> {
    let parser_start = Instant::now();
    let program = pasci::parse(source)?;
    stats.parse_time = parser_start.elapsed().as_secs_f64();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parse_time);
    }

    Ok(program)
}

// Check declarations and references, producing the symbol table
fn analysis_phase(
    program: &pasci::ast::Program,
    stats: &mut InterpretationStats,
    verbose: bool,
) -> PasResult<SymbolTable> {
    let analysis_start = Instant::now();
    let table = pasci::analyze(program)?;
    stats.analysis_time = analysis_start.elapsed().as_secs_f64();

    if verbose {
        println!("Semantic analysis completed in {:.3}s", stats.analysis_time);
        println!("  {} symbols", table.len());
    }

    Ok(table)
}

// Walk the tree, producing the final variable store
fn evaluation_phase(
    program: &pasci::ast::Program,
    stats: &mut InterpretationStats,
    verbose: bool,
) -> PasResult<GlobalStore> {
    let eval_start = Instant::now();
    let store = pasci::run(program)?;
    stats.eval_time = eval_start.elapsed().as_secs_f64();

    if verbose {
        println!("Evaluation completed in {:.3}s", stats.eval_time);
        println!("  {} variables assigned", store.len());
    }

    Ok(store)
}

// Main interpretation pipeline
fn interpret(
    input_path: &PathBuf,
    args: &Cli,
) -> PasResult<(SymbolTable, GlobalStore, InterpretationStats)> {
    let start_time = Instant::now();
    let mut stats = InterpretationStats::default();

    if args.verbose {
        println!("Interpreting: {}", input_path.display());
    }

    let source = pasci::read(input_path)?;
    if args.verbose {
        println!("Read {} bytes from input file", source.len());
    }

    if args.show_tokens {
        println!("\nToken stream:");
        for (token, line) in pasci::tokenize(&source)? {
            println!("  {:>4}  {}", line, token);
        }
    }

    let program = parsing_phase(&source, &mut stats, args.verbose)?;

    if args.show_ast {
        println!("\nAbstract Syntax Tree:");
        program.print();
    }

    let table = analysis_phase(&program, &mut stats, args.verbose)?;
    let store = evaluation_phase(&program, &mut stats, args.verbose)?;

    stats.total_time = start_time.elapsed().as_secs_f64();

    Ok((table, store, stats))
}

// Print detailed timing statistics
fn print_stats(stats: &InterpretationStats) {
    println!("\nInterpretation Statistics:");
    println!("  Parsing:           {:>8.3}s", stats.parse_time);
    println!("  Semantic analysis: {:>8.3}s", stats.analysis_time);
    println!("  Evaluation:        {:>8.3}s", stats.eval_time);
    println!("  Total:             {:>8.3}s", stats.total_time);
}

// Print the final variable store sorted by name
fn print_store(store: &GlobalStore) {
    let mut names: Vec<&String> = store.keys().collect();
    names.sort();
    for name in names {
        println!("{} = {}", name, store[name]);
    }
}

fn main() {
    let args = Cli::parse();

    match interpret(&args.path, &args) {
        Ok((table, store, stats)) => {
            println!("\nSymbol table:");
            table.print_symbols();

            println!("\nVariables:");
            print_store(&store);

            if args.timing {
                print_stats(&stats);
            }

            if args.verbose {
                println!("Interpretation successful!");
            }
        }
        Err(e) => fatal(&format!("Interpretation failed: {}", e)),
    }
}

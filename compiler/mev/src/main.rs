use std::io::{self, Read, Write};

use clap::Parser as _;
use log::{debug, LevelFilter};
use mev::{lex, Error, Evaluator, Node};
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(
    name = "mev",
    version,
    about = "Evaluate arithmetic expressions with variables and functions",
    long_about = "mev parses and evaluates an arithmetic expression.\n\n\
        Operators: + - * / % and ^ (also **), with unary minus and parentheses.\n\
        Variables are uppercase names, written bare or as {NAME}.\n\
        Functions are lowercase names: min, max, floor, round and random.\n\n\
        EXAMPLES:\n\
        \n  mev '1 + 2 * 3'                        Evaluate an expression\n\
        \n  mev --var FOUR=4 '(1+2)+(3+FOUR*4)'    Bind a variable\n\
        \n  mev --ast '2 ^ 3 ^ 2'                  Show how it was grouped\n\
        \n  echo 'max(1, 2)' | mev                 Read the expression from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Bind a variable, e.g. --var FOUR=4 (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Print the token list before evaluating
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree before evaluating
    #[arg(long)]
    ast: bool,

    /// Print the result, and the tree, as JSON
    #[arg(long)]
    json: bool,

    /// Expression to evaluate (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expr: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    expression: &'a str,
    value: f64,
    tree: &'a Node,
}

fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(format!("variable names are uppercase letters, got '{name}'"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for {name}: {err}"))?;
    Ok((name.to_string(), value))
}

fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose > 0 {
        builder.filter_level(match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    let _ = builder.try_init();
}

fn evaluator(cli: &Cli) -> Evaluator {
    let mut evaluator = Evaluator::new().func("random", |_| rand::random::<f64>());
    for (name, value) in &cli.vars {
        evaluator.set_var(name.as_str(), *value);
    }
    evaluator
}

fn read_expression(cli: &Cli) -> io::Result<String> {
    match &cli.expr {
        Some(expr) => Ok(expr.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

/// Runs one evaluation, writing results to `out` and diagnostics to `err`.
/// Returns the process exit code.
fn run(cli: &Cli, source: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<i32> {
    let evaluator = evaluator(cli);

    if cli.tokens {
        match lex(source) {
            Ok(tokens) => {
                for token in &tokens {
                    writeln!(out, "{token}")?;
                }
            }
            Err(e) => {
                writeln!(err, "{}", Error::from(e).render(source))?;
                return Ok(1);
            }
        }
    }

    let tree = match evaluator.parse(source) {
        Ok(tree) => tree,
        Err(e) => {
            writeln!(err, "{}", e.render(source))?;
            return Ok(1);
        }
    };
    debug!("evaluating {tree}");

    if cli.ast && !cli.json {
        writeln!(out, "{tree}")?;
    }

    let value = tree.evaluate();
    if cli.json {
        let report = Report {
            expression: source,
            value,
            tree: &tree,
        };
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{value}")?;
    }
    Ok(0)
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match read_expression(&cli) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&cli, &source, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}

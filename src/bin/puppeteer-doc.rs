use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "puppeteer-doc", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a formula, print its canonical form and value.
    Eval(EvalArgs),
    /// Decode every frame of a model document and report the first error.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Formula text, e.g. "2 * height + 1".
    formula: String,

    /// Variable binding `name=value` (repeatable).
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, f64)>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input model document (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Variable binding `name=value` (repeatable); refreshes matching
    /// variable leaves before decoding.
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, f64)>,

    /// Print the decoded frames as JSON.
    #[arg(long)]
    json: bool,

    /// Write the document (with refreshed variables) to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_var(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{s}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value for '{name}': {e}"))?;
    Ok((name.to_owned(), value))
}

fn make_env(vars: Vec<(String, f64)>) -> puppeteer_doc::VarEnv {
    vars.into_iter().collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let env = make_env(args.vars);
    let expr = puppeteer_doc::compile(&args.formula, &env)
        .with_context(|| format!("compile '{}'", args.formula))?;
    let value = puppeteer_doc::evaluate_checked(&expr)
        .with_context(|| format!("evaluate '{expr}'"))?;

    println!("{expr}");
    println!("= {}", puppeteer_doc::format_compact(value));
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let doc = puppeteer_doc::Document::load(&args.in_path)
        .with_context(|| format!("load model '{}'", args.in_path.display()))?;

    let env = make_env(args.vars);
    if !env.is_empty() {
        let updated = doc.update_variables(&env);
        eprintln!("refreshed {updated} variable value(s)");
    }

    let frames = puppeteer_doc::load_model_frames(&doc)
        .with_context(|| format!("check model '{}'", args.in_path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        for f in &frames {
            println!(
                "{} <- {}: {} dof, mass {}, {} visual(s)",
                f.name,
                f.parent,
                f.joint.dof_count(),
                puppeteer_doc::format_compact(f.body.mass),
                f.visuals.len()
            );
        }
        eprintln!("{} frame(s) ok", frames.len());
    }

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        doc.save(out)
            .with_context(|| format!("write model '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use ferrule::compiler::{Compiler, Options};
use ferrule::errors::print_error;
use ferrule::render::IndentStyle;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ferrule")]
#[command(about = "Render and type-check a serialised syntax tree", long_about = None)]
struct Args {
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Type-check the program before rendering
    #[arg(long)]
    check: bool,

    /// Only type-check, do not print the program
    #[arg(long, requires = "check")]
    no_render: bool,

    /// Indent with N spaces per level instead of tabs
    #[arg(long, value_name = "N")]
    spaces: Option<usize>,
}

fn run(args: &Args) -> Result<()> {
    let options = Options {
        indent: args.spaces.map_or(IndentStyle::Tabs, IndentStyle::Spaces),
        check: args.check,
        render: !args.no_render,
    };

    let compiler = Compiler::new(args.input.clone(), options)?;
    let mut text = compiler.compile()?;
    if !text.is_empty() {
        text.push('\n');
    }

    match &args.output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::Write::write_all(&mut std::io::stdout(), text.as_bytes())?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(&args) {
        print_error(&args.input, &err);
        std::process::exit(1);
    }
}

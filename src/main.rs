//! shapec — command-line front end.
//!
//! Reads one source file, checks it, and prints the generated Scheme (`-s`)
//! or Prolog (`-p`) code after a short banner.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use shapec::config::Config;
use shapec::dsl::{Compiler, LexMode};
use shapec::emit::Target;

const USAGE: &str = "usage: shapec <file> -s|-p (s for Scheme, p for Prolog)";

#[derive(Parser)]
#[command(name = "shapec", version, about = "Compile point/shape test programs to Scheme or Prolog")]
struct Cli {
    /// Source file to compile
    file: PathBuf,

    /// Output mode: -s for Scheme, -p for Prolog
    #[arg(allow_hyphen_values = true)]
    mode: Option<String>,

    /// Configuration file (default: ~/.shapec/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Require a word boundary after keywords
    #[arg(long)]
    strict_keywords: bool,

    /// Report emitter fallbacks on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the banner lines
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("shapec: {e}");
            process::exit(1);
        }
    };

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("shapec: cannot read {}: {e}", cli.file.display());
            process::exit(1);
        }
    };

    let mode = if cli.strict_keywords {
        LexMode::Strict
    } else {
        config.lex_mode()
    };
    let compiler = Compiler::with_mode(mode);

    // The program is checked before the mode is looked at.
    let tokens = match compiler.check(&source) {
        Ok(t) => t,
        Err(e) => {
            println!("{e}");
            process::exit(1);
        }
    };

    let target = match cli.mode.as_deref() {
        Some(flag) => match Target::from_flag(flag) {
            Some(t) => t,
            None => {
                println!("Invalid flag, {USAGE}");
                process::exit(2);
            }
        },
        None => match config.default_target {
            Some(t) => t,
            None => {
                println!("Missing parameter, {USAGE}");
                process::exit(2);
            }
        },
    };

    let compiled = Compiler::emit(&tokens, target);

    if config.banner && !cli.no_banner {
        let file_name = cli.file.display().to_string();
        for line in target.banner(&file_name) {
            println!("{line}");
        }
    }
    for line in &compiled.lines {
        println!("{line}");
    }

    if cli.verbose || config.verbose {
        for entry in compiled.fallbacks.entries() {
            eprintln!("note: {entry}");
        }
        if compiled.fallbacks.dropped() > 0 {
            eprintln!("note: {} earlier fallbacks not shown", compiled.fallbacks.dropped());
        }
    }
}

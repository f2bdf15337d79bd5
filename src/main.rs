// rdcheck: scanner and recognizer for the begin/end assignment language

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser as ClapParser, Subcommand};
use crossterm::style::{style, Color, Stylize};
use crossterm::tty::IsTty;

use rdcheck::{Parser, SymbolTable, Tokens};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each line as `(code, text)`
    Lex(InputArgs),
    /// Check each line against the grammar
    Parse(InputArgs),
}

#[derive(ClapArgs, Debug)]
struct InputArgs {
    /// Input file; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Disable colored verdicts
    #[arg(long)]
    no_color: bool,
}

fn read_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("can't read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("can't read stdin")?;
            Ok(text)
        }
    }
}

/// Split input into lines with trailing `\r`/`\n` removed. Empty input is
/// still one (empty) line.
fn source_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    text.lines()
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .collect()
}

fn paint(text: &str, color: Color, styled: bool) -> String {
    if styled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

fn run_lex(lines: &[&str], symbols: &SymbolTable, out: &mut impl Write) -> Result<()> {
    for line in lines {
        for token in Tokens::new(line, symbols) {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}

fn run_parse(
    lines: &[&str],
    symbols: &SymbolTable,
    styled: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let mut all_valid = true;
    for line in lines {
        let mut parser = Parser::new(line, symbols);
        match parser.parse() {
            Ok(()) => writeln!(out, "{}", paint("success", Color::Green, styled))?,
            Err(err) => {
                log::info!("{:?}: {}", line, err);
                all_valid = false;
                writeln!(out, "{}", paint("error", Color::Red, styled))?;
                writeln!(out, "{}", err.tag())?;
            }
        }
    }
    Ok(all_valid)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let symbols = SymbolTable::shared();
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut out = stdout.lock();

    match args.command {
        Commands::Lex(input) => {
            let text = read_source(input.input.as_ref())?;
            run_lex(&source_lines(&text), symbols, &mut out)?;
        }
        Commands::Parse(input) => {
            let text = read_source(input.input.as_ref())?;
            let all_valid = run_parse(
                &source_lines(&text),
                symbols,
                styled && !input.no_color,
                &mut out,
            )?;
            out.flush()?;
            if !all_valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_lines() {
        assert_eq!(source_lines(""), vec![""]);
        assert_eq!(source_lines("begin\r\n"), vec!["begin"]);
        assert_eq!(source_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_run_parse_output() {
        let mut out = Vec::new();
        let lines = ["begin x:=1 end $", "begin x:=1 end"];
        let all_valid = run_parse(&lines, SymbolTable::shared(), false, &mut out).unwrap();
        assert!(!all_valid);
        assert_eq!(String::from_utf8(out).unwrap(), "success\nerror\nno $\n");
    }

    #[test]
    fn test_run_lex_output() {
        let mut out = Vec::new();
        run_lex(&["x := 10;"], SymbolTable::shared(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(2, 'x')\n(25, :=)\n(3, 10)\n(32, ;)\n");
    }
}

//! CLI tool for seqgrid - lays out lines of text on a grid
//!
//! Usage:
//!   seqgrid_cli <input.txt> 3                          # Vertical, 3 columns
//!   seqgrid_cli <input.txt> 3 --direction horizontal   # Row by row
//!   seqgrid_cli - 4 --expand columns                   # stdin, 4 rows
//!   seqgrid_cli <input.txt> 3 --json                   # JSON snapshot
//!   seqgrid_cli <input.txt> 3 --cell 2,1               # Single value
//!
//! Set `RUST_LOG=debug` to see layout decisions on stderr.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Read};

use seqgrid::{Coord, Direction, Expand, Grid, GridError, GridOptions};

const USAGE: &str = "Usage: seqgrid_cli <input.txt|-> <n> [--direction horizontal|vertical] \
[--expand rows|columns] [--options <json>] [--json] [--cell <row,col>]";

#[derive(Debug)]
struct CliArgs {
    input: String,
    n: usize,
    options: GridOptions,
    json: bool,
    cell: Option<Coord>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut direction: Option<Direction> = None;
    let mut expand: Option<Expand> = None;
    let mut options = GridOptions::default();
    let mut json = false;
    let mut cell = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--direction" => {
                direction = Some(flag_value(&mut iter, arg)?.parse().map_err(describe)?);
            }
            "--expand" => {
                expand = Some(flag_value(&mut iter, arg)?.parse().map_err(describe)?);
            }
            "--options" => {
                options = GridOptions::from_json(flag_value(&mut iter, arg)?).map_err(describe)?;
            }
            "--cell" => cell = Some(flag_value(&mut iter, arg)?.parse().map_err(describe)?),
            "--json" => json = true,
            _ => positional.push(arg.as_str()),
        }
    }

    // Explicit flags win over --options.
    if let Some(direction) = direction {
        options = options.with_direction(direction);
    }
    if let Some(expand) = expand {
        options = options.with_expand(expand);
    }

    let [input, n] = positional.as_slice() else {
        return Err("expected <input> and <n>".to_string());
    };
    let n: usize = n
        .parse()
        .map_err(|_| format!("<n> must be a positive integer, got '{n}'"))?;

    Ok(CliArgs {
        input: (*input).to_string(),
        n,
        options,
        json,
        cell,
    })
}

fn flag_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

#[allow(clippy::needless_pass_by_value)]
fn describe(err: GridError) -> String {
    err.to_string()
}

fn run(cli: &CliArgs) -> seqgrid::Result<String> {
    let text = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let lines = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string);

    let grid = Grid::with_options(lines, cli.n, cli.options)?;

    if let Some(coord) = cli.cell {
        return Ok(grid.cell(coord.row, coord.column)?.clone());
    }

    if cli.json {
        return Ok(serde_json::to_string_pretty(&grid)?);
    }

    Ok(grid.render())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| (*arg).to_string()).collect()
    }

    /// Write `contents` to a per-test file under the system temp directory.
    fn input_file(name: &str, contents: &str) -> String {
        let path = env::temp_dir().join(format!("seqgrid_cli_{}_{name}.txt", std::process::id()));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults() {
        let cli = parse_args(&args(&["letters.txt", "3"])).unwrap();
        assert_eq!(cli.input, "letters.txt");
        assert_eq!(cli.n, 3);
        assert_eq!(cli.options, GridOptions::default());
        assert!(!cli.json);
        assert!(cli.cell.is_none());
    }

    #[test]
    fn test_explicit_flags_override_options() {
        let cli = parse_args(&args(&[
            "in.txt",
            "4",
            "--options",
            r#"{"direction":"horizontal","expand":"rows"}"#,
            "--direction",
            "vertical",
        ]))
        .unwrap();
        assert_eq!(cli.options.direction, Direction::Vertical);
        assert_eq!(cli.options.expand, Expand::Rows);

        // Order on the command line does not matter
        let cli = parse_args(&args(&[
            "--expand",
            "columns",
            "--options",
            r#"{"expand":"rows"}"#,
            "in.txt",
            "4",
        ]))
        .unwrap();
        assert_eq!(cli.options.expand, Expand::Columns);
    }

    #[test]
    fn test_cell_flag() {
        let cli = parse_args(&args(&["in.txt", "2", "--cell", "2,1", "--json"])).unwrap();
        assert_eq!(cli.cell, Some(Coord::new(2, 1)));
        assert!(cli.json);
    }

    #[test]
    fn test_missing_flag_value() {
        let err = parse_args(&args(&["in.txt", "2", "--direction"])).unwrap_err();
        assert_eq!(err, "--direction needs a value");
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = parse_args(&args(&["in.txt", "three"])).unwrap_err();
        assert_eq!(err, "<n> must be a positive integer, got 'three'");

        let err = parse_args(&args(&["in.txt"])).unwrap_err();
        assert_eq!(err, "expected <input> and <n>");

        let err = parse_args(&args(&["in.txt", "2", "--direction", "diagonal"])).unwrap_err();
        assert!(err.contains("invalid direction"));

        let err = parse_args(&args(&["in.txt", "2", "--cell", "B2"])).unwrap_err();
        assert_eq!(err, "invalid coordinate: B2");
    }

    #[test]
    fn test_run_missing_file_is_io_error() {
        let cli = parse_args(&args(&["/nonexistent/seqgrid/input.txt", "2"])).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }

    #[test]
    fn test_run_outputs() {
        let path = input_file("outputs", "A\nB\n\nC\nD  \n");

        let cli = parse_args(&args(&[path.as_str(), "2"])).unwrap();
        let text = run(&cli).unwrap();
        assert!(text.ends_with("(1, 1) A\t(1, 2) C\n(2, 1) B\t(2, 2) D"));

        let cli = parse_args(&args(&[path.as_str(), "2", "--cell", "(1, 2)"])).unwrap();
        assert_eq!(run(&cli).unwrap(), "C");

        let cli = parse_args(&args(&[path.as_str(), "2", "--json"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(json["num_rows"], 2);
        assert_eq!(json["cells"][1]["value"], "C");

        let cli = parse_args(&args(&[path.as_str(), "1"])).unwrap();
        assert!(matches!(
            run(&cli).unwrap_err(),
            GridError::DimensionTooSmall { .. }
        ));

        fs::remove_file(&path).unwrap();
    }
}

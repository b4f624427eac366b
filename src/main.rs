mod debug_report;

use lithoage::{dataset, normalize_verbose};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

const DEFAULT_SOURCE_FIELD: &str = "AgeRange";
const DEFAULT_TARGET_FIELD: &str = "Age";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match config.mode {
        Mode::Text { input } => {
            let report = normalize_verbose(&input);
            debug_report::print_run(&report, config.color);
        }
        Mode::Dataset { input, output, source_field, target_field } => {
            match dataset::augment_file(&input, &output, &source_field, &target_field) {
                Ok(stats) => {
                    println!(
                        "{}: {} features, {} parsed, {} without a value -> {}",
                        input.display(),
                        stats.features,
                        stats.parsed,
                        stats.missing,
                        output.display()
                    );
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
    }
}

enum Mode {
    Text { input: String },
    Dataset { input: PathBuf, output: PathBuf, source_field: String, target_field: String },
}

struct CliConfig {
    mode: Mode,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut text: Option<String> = None;
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut source_field = DEFAULT_SOURCE_FIELD.to_string();
    let mut target_field = DEFAULT_TARGET_FIELD.to_string();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    let set_text = |slot: &mut Option<String>, value: String| -> Result<(), String> {
        if slot.is_some() {
            return Err("error: input text provided multiple times".to_string());
        }
        *slot = Some(value);
        Ok(())
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("lithoage {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--text" | "-t" => {
                let value = args.next().ok_or_else(|| "error: --text expects a value".to_string())?;
                set_text(&mut text, value)?;
            }
            "--input" => {
                let value = args.next().ok_or_else(|| "error: --input expects a path".to_string())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args.next().ok_or_else(|| "error: --output expects a path".to_string())?;
                output_path = Some(PathBuf::from(value));
            }
            "--field" => {
                source_field = args.next().ok_or_else(|| "error: --field expects a name".to_string())?;
            }
            "--target-field" => {
                target_field = args.next().ok_or_else(|| "error: --target-field expects a name".to_string())?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_text(&mut text, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--text=") => {
                let value = arg.trim_start_matches("--text=").to_string();
                set_text(&mut text, value)?;
            }
            _ if arg.starts_with("--input=") => {
                input_path = Some(PathBuf::from(arg.trim_start_matches("--input=")));
            }
            _ if arg.starts_with("--output=") => {
                output_path = Some(PathBuf::from(arg.trim_start_matches("--output=")));
            }
            _ if arg.starts_with("--field=") => {
                source_field = arg.trim_start_matches("--field=").to_string();
            }
            _ if arg.starts_with("--target-field=") => {
                target_field = arg.trim_start_matches("--target-field=").to_string();
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_text(&mut text, rest)?;
                break;
            }
        }
    }

    if let Some(input) = input_path {
        if text.is_some() {
            return Err("error: --input and input text are mutually exclusive".to_string());
        }
        let output = output_path.ok_or_else(|| "error: --input requires --output".to_string())?;
        return Ok(CliConfig { mode: Mode::Dataset { input, output, source_field, target_field }, color });
    }
    if output_path.is_some() {
        return Err("error: --output requires --input".to_string());
    }

    let input = match text {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { mode: Mode::Text { input }, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end().to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "lithoage {version}

Geological age-text normalizer CLI.

Usage:
  lithoage [OPTIONS] [--] <age text...>
  lithoage [OPTIONS] --input <in.json> --output <out.json>

With age text (or stdin), prints a stage-by-stage rewrite report. With
--input/--output, augments a GeoJSON FeatureCollection: every feature gets a
new integer property parsed from its free-text age field.

Options:
  -t, --text <text>          Age text to normalize. If omitted, reads remaining
                             args or stdin when no args are provided.
  --input <path>             GeoJSON FeatureCollection to augment.
  --output <path>            Where to write the augmented collection.
  --field <name>             Property holding the age text. Default: {source}
  --target-field <name>      Property to write the parsed year to. Default: {target}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Processing error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        source = DEFAULT_SOURCE_FIELD,
        target = DEFAULT_TARGET_FIELD
    )
}

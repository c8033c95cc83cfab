use std::{env, fs::read_to_string, process::ExitCode};

use colored::Colorize;

use minitriangle::{
    errors::errors::{Error, ErrorReporter, Phase},
    run_frontend, Position,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <source-file>", args[0]);
        return ExitCode::FAILURE;
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{} cannot read {}: {}", "error:".red().bold(), file_path, err);
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = ErrorReporter::new();
    run_frontend(&source, &mut reporter);

    for error in reporter.errors() {
        display_error(error, file_path, &source);
    }
    for diagnostic in reporter.internal_diagnostics() {
        eprintln!("{} {}", "internal:".yellow().bold(), diagnostic);
    }

    if reporter.has_errors() {
        let count = reporter.errors().len();
        let noun = if count == 1 { "error" } else { "errors" };
        eprintln!("{} {} {}", "rejected with".red().bold(), count, noun);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn display_error(error: &Error, file_path: &str, source: &str) {
    /*
        error: types do not match: expected Integer, found Char
        -> demo.mt:2:20
           |
         2 | let x: Integer in x := 'a'
           | -------------------^
    */

    let phase = match error.phase() {
        Phase::Lexical => "lexical error:",
        Phase::Syntax => "syntax error:",
        Phase::Semantic => "semantic error:",
        Phase::Internal => "internal error:",
    };
    eprintln!("{} {}", phase.red().bold(), error.get_kind());

    let position = *error.get_position();
    if position.is_null() {
        eprintln!("-> {}", file_path);
        return;
    }
    eprintln!("-> {}:{}", file_path, position);

    let Some(line_text) = line_at(source, position) else {
        return;
    };
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let trimmed = line_text.trim_start();
    let stripped = line_text.len() - trimmed.len();

    eprintln!("{:>padding$}", "|");
    eprintln!("{} | {}", line_str, trimmed.trim_end());

    // Column is 1-based; account for the stripped indentation.
    let arrows = (position.column as usize).saturating_sub(stripped).max(1);
    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn line_at(source: &str, position: Position) -> Option<&str> {
    source
        .lines()
        .nth(position.line.saturating_sub(1) as usize)
}

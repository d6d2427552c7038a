use std::process;

use colored::Colorize;

use boink::interpreter::Interpreter;
use boink::source::{analyze_source, prepare_source, program_name};

use crate::shared::{print_errors, print_section, read_file};

pub(super) fn cmd_run(file: &str, show_tree: bool, show_analysis: bool) {
    let text = match read_file(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e.red());
            process::exit(1);
        }
    };

    let source = prepare_source(&text);
    let analyzed = analyze_source(&program_name(file), &source);

    if show_tree {
        print_section("Parsed Program", &analyzed.program.to_string());
    }
    if show_analysis {
        print_section("Semantic Analysis", &analyzed.log.join("\n"));
    }

    if !analyzed.is_runnable() {
        print_errors(&analyzed.errors, &source);
        process::exit(1);
    }

    if let Err(e) = Interpreter::new(&analyzed.program) {
        eprintln!("{}", e.to_string().red());
        process::exit(1);
    }
}

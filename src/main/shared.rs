use std::fs;

use colored::Colorize;

use boink::diagnostics::ErrorHandler;

pub(super) fn read_file(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|_| format!("File '{}' not found.", path))
}

pub(super) fn print_section(title: &str, body: &str) {
    println!("{}\n", format!("------- {} -------", title).cyan());
    println!("{}", body);
    println!("{}", "------------- End -----------".cyan());
}

pub(super) fn print_errors(errors: &ErrorHandler, source: &str) {
    eprintln!("{}", "ERRORS:".red().bold());
    for line in errors.describe(source) {
        eprintln!("{}", line.red());
    }
}

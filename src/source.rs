use std::path::Path;

use crate::ast::Program;
use crate::diagnostics::ErrorHandler;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::types::checker::Analyzer;

/// Output of the front half of the pipeline for one source file.
#[derive(Debug)]
pub struct Analyzed {
    pub program: Program,
    pub errors: ErrorHandler,
    /// Definitions, assignments and calls seen by the analyzer.
    pub log: Vec<String>,
}

impl Analyzed {
    /// Interpretation may only start when nothing was reported.
    pub fn is_runnable(&self) -> bool {
        self.errors.is_empty()
    }
}

/// File text as the pipeline expects it: always newline-terminated, so the
/// last statement has a boundary.
pub fn prepare_source(text: &str) -> String {
    let mut source = String::with_capacity(text.len() + 1);
    source.push_str(text);
    source.push('\n');
    source
}

/// Program name for a source path: its file name.
pub fn program_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Lex, parse and analyze `text` against one shared error sink.
pub fn analyze_source(program_name: &str, text: &str) -> Analyzed {
    let mut errors = ErrorHandler::new();
    let mut program = Parser::new(Lexer::new(text), &mut errors).parse(program_name);

    let mut analyzer = Analyzer::new(&mut errors);
    analyzer.visit(&mut program);
    let log = analyzer.into_log();

    Analyzed {
        program,
        errors,
        log,
    }
}

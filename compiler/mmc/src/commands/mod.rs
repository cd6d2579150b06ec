//! `mmc` subcommands.
//!
//! Each command returns the text to print, so the binary stays a thin
//! argument parser.

use std::fmt::Write;

use mm_diagnostic::{Diagnostic, ErrorCode, ErrorDocs};
use mm_lattice::EulerDiagram;
use mm_predicate::{
    intersect, is_subset_of, to_normal_predicate, to_predicate, NormalPredicate, PredicateError,
};

/// Failure of a single command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Predicate(#[from] PredicateError),
    #[error("Unknown error code: {0}")]
    UnknownCode(String),
    #[error("No documentation available for {0}")]
    Undocumented(ErrorCode),
}

impl CommandError {
    /// Text for stderr.
    pub fn render(&self) -> String {
        match self {
            CommandError::Predicate(err) => err.to_diagnostic().render(),
            CommandError::UnknownCode(_) => format!(
                "{self}\n\nCodes have the format EXXXX (errors) or WXXXX (warnings).\n\
                 Examples: E1001, E2003, E3001, W2001\n"
            ),
            CommandError::Undocumented(_) => format!("{self}\n"),
        }
    }

    /// The diagnostic behind a predicate error.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            CommandError::Predicate(err) => Some(err.to_diagnostic()),
            _ => None,
        }
    }
}

pub type CommandResult = Result<String, CommandError>;

pub fn normalize(pattern: &str) -> CommandResult {
    Ok(to_normal_predicate(pattern)?.to_string())
}

pub fn identify(pattern: &str) -> CommandResult {
    Ok(to_predicate(pattern)?.identifier().to_owned())
}

/// The captures bound when `pattern` matches `discriminant`, one per line.
pub fn match_discriminant(pattern: &str, discriminant: &str) -> CommandResult {
    let predicate = to_predicate(pattern)?;
    let Some(captures) = predicate.matches(discriminant) else {
        return Ok("no match".to_owned());
    };
    if captures.is_empty() {
        return Ok("match".to_owned());
    }
    let mut out = String::new();
    for (name, value) in captures.iter() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{name} = {value}");
    }
    Ok(out)
}

pub fn subset(sub: &str, sup: &str) -> CommandResult {
    let sub = to_normal_predicate(sub)?;
    let sup = to_normal_predicate(sup)?;
    Ok(is_subset_of(sub, sup).to_string())
}

pub fn intersection(a: &str, b: &str) -> CommandResult {
    let a = to_normal_predicate(a)?;
    let b = to_normal_predicate(b)?;
    Ok(intersect(a, b).to_string())
}

/// The Euler diagram over `patterns`, synthetic nodes in brackets.
pub fn lattice<S: AsRef<str>>(patterns: &[S]) -> CommandResult {
    let predicates = patterns
        .iter()
        .map(|p| to_normal_predicate(p.as_ref()))
        .collect::<Result<Vec<NormalPredicate>, _>>()?;
    let diagram = EulerDiagram::new(predicates);
    Ok(diagram.render().trim_end().to_owned())
}

pub fn explain(code: &str) -> CommandResult {
    let Ok(parsed) = code.parse::<ErrorCode>() else {
        return Err(CommandError::UnknownCode(code.to_owned()));
    };
    match ErrorDocs::get(parsed) {
        Some(doc) => Ok(doc.trim_end().to_owned()),
        None => Err(CommandError::Undocumented(parsed)),
    }
}

#[cfg(test)]
mod tests;

pub mod codegen;

use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info};

use codegen::ProductCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Code generation error: {0}")]
    Code(#[from] codegen::CodeError),
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct CodeReport<'a> {
    name: &'a str,
    code: String,
    #[serde(flatten)]
    parts: ProductCode,
}

pub fn run(names: Vec<String>, json: bool) -> Result<(), AppError> {
    let names = if names.is_empty() {
        read_names_from_stdin()?
    } else {
        names
    };

    for name in &names {
        let parts = ProductCode::derive(name)?;
        let code = parts.to_string();
        debug!("generated {} for {:?}", code, name);

        if json {
            let report = CodeReport {
                name: name.as_str(),
                code,
                parts,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}\t{}", code, name);
        }
    }

    info!("generated {} product code(s)", names.len());
    Ok(())
}

// Blank lines in piped input are skipped.
fn read_names_from_stdin() -> Result<Vec<String>, AppError> {
    let mut names = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        names.push(line);
    }
    Ok(names)
}

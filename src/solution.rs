use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use regex::Regex;

use crate::out::Console;
use crate::paths::resolve_relative;

/// Extract the project worklist from a solution file.
///
/// Matches declarations of the form
/// `Project("{...}") = "Name", "rel\path\Name.csproj", "{guid}"` and resolves
/// each path against the solution's directory, in declaration order. Lines
/// that do not match (solution-folder pseudo-entries, globals) are skipped.
pub fn parse(solution_file: &Path, out: &Console) -> Result<Vec<PathBuf>> {
    if !solution_file.exists() {
        bail!("Solution file not found");
    }

    let text = std::fs::read_to_string(solution_file)?;
    let base = solution_file.parent().unwrap_or(Path::new(""));

    extract_projects(&text, base, out)
}

fn extract_projects(text: &str, base: &Path, out: &Console) -> Result<Vec<PathBuf>> {
    // Matches lines like:
    //   Project("{FAE04EC0-...}") = "App", "App\App.csproj", "{9A19...}"
    let re = Regex::new(r#"Project\([^)]*\)\s*=\s*"([^"]+)"\s*,\s*"([^"]+\.csproj)""#)?;

    let mut projects = Vec::new();
    for caps in re.captures_iter(text) {
        out.debug(&format!("Solution Project {}, {}", &caps[1], &caps[2]));
        projects.push(resolve_relative(base, &caps[2]));
    }

    Ok(projects)
}

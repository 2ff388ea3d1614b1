//! `license-overview` — third-party license report for a Visual Studio solution.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Extract the project worklist from the solution file ([`solution`]).
//! 3. Walk projects, following legacy project references, and collect the
//!    deduplicated package list ([`project`]).
//! 4. Per package, sequentially: NuGet search lookup ([`registry`]), license
//!    text classification ([`license`]), report section ([`report`]).
//! 5. Exit `0` (report printed), `1` (usage), or `2` (fatal failure).

mod cli;
mod license;
mod models;
mod out;
mod paths;
mod project;
mod registry;
mod report;
mod solution;

use std::path::Path;

use anyhow::{ensure, Result};
use clap::Parser;

use cli::Cli;
use out::Console;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let out = Console::new(cli.verbose);

    let Some(solution_file) = cli.solution else {
        out.error("Incorrect usage");
        println!("Usage: license-overview <SolutionFile>");
        std::process::exit(1);
    };

    if let Err(err) = run(&solution_file, &out).await {
        out.error(&err.to_string());
        std::process::exit(2);
    }
}

async fn run(solution_file: &Path, out: &Console) -> Result<()> {
    ensure!(solution_file.exists(), "Solution file not found");
    out.info(&format!(
        "# 3rd Party Licenses for {}",
        solution_file.display()
    ));

    let mut projects = solution::parse(solution_file, out)?;
    let mut packages = project::collect_packages(&mut projects, out)?;

    // One client for the whole run, lookups strictly one at a time so each
    // section prints as soon as its package resolves.
    let client = reqwest::Client::new();
    for package in &mut packages {
        registry::lookup(&client, package).await?;

        if let Some(url) = package.license_url.clone() {
            if !url.is_empty() {
                package.license_label = license::recognize(&client, &url).await?;
            }
        }

        report::render(package, out);
    }

    Ok(())
}

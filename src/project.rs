use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::models::{Package, ProjectDialect};
use crate::out::Console;
use crate::paths::resolve_relative;

const MSBUILD_2003_NS: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Walk the project worklist and collect every declared package.
///
/// The worklist only grows: legacy-dialect projects append their (unseen)
/// `<ProjectReference>` targets behind the read index, and traversal ends
/// when the index catches up. The seen-set keys on the lexically resolved
/// path, so a reference cycle cannot grow the list forever.
///
/// Packages dedup on name alone — the first version seen anywhere wins.
pub fn collect_packages(projects: &mut Vec<PathBuf>, out: &Console) -> Result<Vec<Package>> {
    let mut packages: Vec<Package> = Vec::new();
    let mut names: HashSet<String> = HashSet::new();
    let mut seen: HashSet<PathBuf> = projects.iter().cloned().collect();

    let mut index = 0;
    while index < projects.len() {
        let project = projects[index].clone();
        let scan = scan_project(&project)?;

        match scan.dialect {
            ProjectDialect::PackagesConfig => {
                let base = project.parent().unwrap_or(Path::new(""));
                for include in &scan.project_refs {
                    let resolved = resolve_relative(base, include);
                    if seen.insert(resolved.clone()) {
                        out.debug(&format!("Add project reference {}", resolved.display()));
                        projects.push(resolved);
                    }
                }
                for (id, version) in sidecar_packages(&project)? {
                    push_unique(&mut packages, &mut names, id, version);
                }
            }
            ProjectDialect::InlineReferences => {
                for (name, version) in scan.package_refs {
                    push_unique(&mut packages, &mut names, name, version);
                }
            }
            // Not fatal, unlike a missing packages.config.
            ProjectDialect::Unknown => {
                out.error(&format!("Unknown project format {}", project.display()));
            }
        }

        index += 1;
    }

    Ok(packages)
}

fn push_unique(
    packages: &mut Vec<Package>,
    names: &mut HashSet<String>,
    name: String,
    version: String,
) {
    if names.insert(name.clone()) {
        packages.push(Package::new(name, version));
    }
}

/// Single-pass scan of one project file.
#[derive(Debug)]
pub struct ProjectScan {
    pub dialect: ProjectDialect,
    /// Raw `<ProjectReference Include>` values (legacy dialect only).
    pub project_refs: Vec<String>,
    /// `(name, version)` from inline `<PackageReference>` (modern dialect only).
    pub package_refs: Vec<(String, String)>,
}

pub fn scan_project(path: &Path) -> Result<ProjectScan> {
    let content = std::fs::read_to_string(path)?;
    Ok(scan_project_text(&content))
}

/// The root element decides the dialect: the VS2003 msbuild `xmlns` means
/// packages.config plus explicit project references, anything else means
/// inline package references. No root element at all means unknown.
fn scan_project_text(content: &str) -> ProjectScan {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut dialect = ProjectDialect::Unknown;
    let mut saw_root = false;
    let mut project_refs = Vec::new();
    let mut package_refs = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                if !saw_root {
                    saw_root = true;
                    dialect = if attr_value(e, "xmlns").as_deref() == Some(MSBUILD_2003_NS) {
                        ProjectDialect::PackagesConfig
                    } else {
                        ProjectDialect::InlineReferences
                    };
                } else if tag == "ProjectReference" && dialect == ProjectDialect::PackagesConfig {
                    if let Some(include) = attr_value(e, "Include") {
                        project_refs.push(include);
                    }
                } else if tag == "PackageReference" && dialect == ProjectDialect::InlineReferences {
                    let name = attr_value(e, "Include").unwrap_or_default();
                    let version = attr_value(e, "Version").unwrap_or_default();
                    if !name.is_empty() {
                        package_refs.push((name, version));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    ProjectScan {
        dialect,
        project_refs,
        package_refs,
    }
}

/// Read the side-car `packages.config` next to a legacy-dialect project.
/// The project is unusable without it, so a missing file aborts the run.
pub fn sidecar_packages(project_file: &Path) -> Result<Vec<(String, String)>> {
    let base = project_file.parent().unwrap_or(Path::new(""));
    let config = base.join("packages.config");
    if !config.exists() {
        bail!(
            "Packages.config not found for project {}",
            project_file.display()
        );
    }
    let content = std::fs::read_to_string(&config)?;
    Ok(parse_packages_config(&content))
}

/// Parse `<package id="..." version="..." />` entries.
fn parse_packages_config(content: &str) -> Vec<(String, String)> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut packages = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let tag = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                if tag == "package" {
                    let id = attr_value(e, "id").unwrap_or_default();
                    let version = attr_value(e, "version").unwrap_or_default();
                    if !id.is_empty() {
                        packages.push((id, version));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    packages
}

fn attr_value(e: &BytesStart, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Some(attr.unescape_value().unwrap_or_default().into_owned());
        }
    }
    None
}

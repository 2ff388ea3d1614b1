/// A third-party package discovered in a project, enriched in place as the
/// run progresses: collection fills `name`/`version`, the registry lookup
/// fills `summary`/`authors`/`license_url`, the license classifier fills
/// `license_label`.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub authors: String,
    pub license_url: Option<String>,
    pub license_label: String,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            summary: None,
            authors: String::new(),
            license_url: None,
            license_label: "NOT FOUND".to_string(),
        }
    }
}

/// Dependency-declaration dialect of a project file.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectDialect {
    /// VS2003-namespace project: dependencies live in a side-car
    /// `packages.config`, project links are `<ProjectReference>` elements.
    PackagesConfig,
    /// SDK-style project with inline `<PackageReference>` elements.
    InlineReferences,
    /// No parseable root element.
    Unknown,
}

use anyhow::{bail, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::models::Package;

const SEARCH_ENDPOINT: &str = "https://api-v2v3search-0.nuget.org/query";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub id: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub license_url: Option<String>,
}

/// Look a package up on the NuGet search endpoint and enrich it in place.
///
/// A non-success status aborts the whole run; a response without an exact
/// name match only annotates the package and the run continues.
pub async fn lookup(client: &Client, package: &mut Package) -> Result<()> {
    let url = format!(
        "{}?q={}&SemVer={}",
        SEARCH_ENDPOINT, package.name, package.version
    );

    let response = client
        .get(&url)
        .header("User-Agent", "license-overview/0.1.0")
        .send()
        .await?;

    if !response.status().is_success() {
        bail!("Can't obtain information for {} package.", package.name);
    }

    let search: SearchResponse = response.json().await?;
    apply(package, &search);
    Ok(())
}

/// Scan `data` linearly for the first entry whose `id` equals the package
/// name exactly (case-sensitive). The search endpoint does fuzzy matching,
/// so near-misses are expected and must not count.
pub fn apply(package: &mut Package, search: &SearchResponse) {
    match search.data.iter().find(|entry| entry.id == package.name) {
        Some(entry) => {
            package.summary = entry.summary.clone();
            package.authors = entry.authors.join(", ");
            package.license_url = entry.license_url.clone();
        }
        None => package.name.push_str("- THIS PACKAGE IS NOT FOUND!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_exact_match_enriches() {
        let search = response(
            r#"{"data":[
                {"id":"Newtonsoft.Json.Bson","authors":["James Newton-King"]},
                {"id":"Newtonsoft.Json","summary":"Json.NET is a popular JSON framework",
                 "authors":["James Newton-King"],
                 "licenseUrl":"https://licenses.nuget.org/MIT"}
            ]}"#,
        );
        let mut package = Package::new("Newtonsoft.Json", "12.0.1");
        apply(&mut package, &search);

        assert_eq!(package.name, "Newtonsoft.Json");
        assert_eq!(package.authors, "James Newton-King");
        assert_eq!(
            package.license_url.as_deref(),
            Some("https://licenses.nuget.org/MIT")
        );
        assert_eq!(
            package.summary.as_deref(),
            Some("Json.NET is a popular JSON framework")
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let search = response(r#"{"data":[{"id":"foo","authors":[]}]}"#);
        let mut package = Package::new("Foo", "1.0");
        apply(&mut package, &search);
        assert_eq!(package.name, "Foo- THIS PACKAGE IS NOT FOUND!");
    }

    #[test]
    fn test_no_match_annotates_name() {
        let search = response(r#"{"data":[]}"#);
        let mut package = Package::new("Foo", "1.0");
        apply(&mut package, &search);

        assert_eq!(package.name, "Foo- THIS PACKAGE IS NOT FOUND!");
        assert_eq!(package.version, "1.0");
        assert!(package.license_url.is_none());
    }

    #[test]
    fn test_authors_joined_with_comma() {
        let search = response(r#"{"data":[{"id":"Foo","authors":["A","B","C"]}]}"#);
        let mut package = Package::new("Foo", "1.0");
        apply(&mut package, &search);
        assert_eq!(package.authors, "A, B, C");
    }

    #[test]
    fn test_missing_optional_fields() {
        let search = response(r#"{"data":[{"id":"Foo"}]}"#);
        let mut package = Package::new("Foo", "1.0");
        apply(&mut package, &search);
        assert_eq!(package.authors, "");
        assert!(package.summary.is_none());
        assert!(package.license_url.is_none());
    }
}

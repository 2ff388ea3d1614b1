use anyhow::Result;
use reqwest::Client;

type Fingerprint = fn(&str) -> bool;

/// Ordered license fingerprints, evaluated top to bottom, first match wins.
///
/// The list reproduces the original tool's rules verbatim, including the
/// `"MIT License"` row that the bare `"MIT"` row already covers — keep the
/// order intact.
const RULES: &[(Fingerprint, &str)] = &[
    (|text| text.contains("MIT License"), "MIT"),
    (|text| text.contains("MIT"), "MIT"),
    (|text| text.contains("The BSD License"), "BSD License"),
    (|text| text.contains("Apache License 2.0"), "Apache License 2.0"),
    (
        |text| text.contains("Apache License") && text.contains("Version 2.0"),
        "Apache License 2.0",
    ),
    (|text| text.contains("Apache-2.0"), "Apache License 2.0"),
    (
        |text| text.contains("MICROSOFT SOFTWARE LICENSE"),
        "MICROSOFT SOFTWARE LICENSE",
    ),
    (
        |text| text.contains("BSD-3-Clause") || text.contains("BSD 3-Clause"),
        "BSD-3-Clause",
    ),
    (|text| text.contains("MS-PL"), "MS-PL"),
    (
        |text| text.contains("GNU LESSER GENERAL PUBLIC LICENSE"),
        "LGPL",
    ),
];

/// Fetch a license document and classify it.
///
/// A non-success response is degraded output, not an error: the HTTP reason
/// phrase becomes the label.
pub async fn recognize(client: &Client, license_url: &str) -> Result<String> {
    let response = client
        .get(license_url)
        .header("User-Agent", "license-overview/0.1.0")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Ok(status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()));
    }

    let body = response.text().await?;
    Ok(classify(&body).to_string())
}

/// Classify a license body by substring fingerprint.
pub fn classify(text: &str) -> &'static str {
    for (matches, label) in RULES {
        if matches(text) {
            return label;
        }
    }
    "UNKNOWN"
}

use crate::models::Package;
use crate::out::Console;

/// Format one resolved package as its report section. Pure formatting; the
/// final empty string is the blank separator line.
pub fn lines(package: &Package) -> Vec<String> {
    let mut lines = vec![
        format!("## {} ({})", package.name, package.version),
        format!(
            "- License: [{}]({})",
            package.license_label,
            package.license_url.as_deref().unwrap_or("")
        ),
        format!("- Authors: {}", package.authors),
    ];

    if let Some(summary) = &package.summary {
        if !summary.trim().is_empty() {
            lines.push(format!("- Summary: {}", summary));
        }
    }

    lines.push(String::new());
    lines
}

pub fn render(package: &Package, out: &Console) {
    for line in lines(package) {
        out.info(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> Package {
        Package {
            name: "Newtonsoft.Json".to_string(),
            version: "12.0.1".to_string(),
            summary: Some("Json.NET is a popular JSON framework".to_string()),
            authors: "James Newton-King".to_string(),
            license_url: Some("https://licenses.nuget.org/MIT".to_string()),
            license_label: "MIT".to_string(),
        }
    }

    #[test]
    fn test_full_section() {
        assert_eq!(
            lines(&resolved()),
            vec![
                "## Newtonsoft.Json (12.0.1)",
                "- License: [MIT](https://licenses.nuget.org/MIT)",
                "- Authors: James Newton-King",
                "- Summary: Json.NET is a popular JSON framework",
                "",
            ]
        );
    }

    #[test]
    fn test_blank_summary_suppressed() {
        let mut package = resolved();
        package.summary = Some("   ".to_string());
        assert!(!lines(&package).iter().any(|l| l.starts_with("- Summary")));

        package.summary = None;
        assert_eq!(lines(&package).len(), 4);
    }

    #[test]
    fn test_missing_url_rendered_empty() {
        let mut package = resolved();
        package.license_url = None;
        package.license_label = "NOT FOUND".to_string();
        assert_eq!(lines(&package)[1], "- License: [NOT FOUND]()");
    }

    #[test]
    fn test_not_found_heading() {
        let mut package = Package::new("Foo", "1.0");
        package.name.push_str("- THIS PACKAGE IS NOT FOUND!");
        assert_eq!(
            lines(&package)[0],
            "## Foo- THIS PACKAGE IS NOT FOUND! (1.0)"
        );
    }
}

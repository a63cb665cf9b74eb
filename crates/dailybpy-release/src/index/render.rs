//! Static page rendering for the simple repository index

use html_escape::encode_quoted_attribute;

use super::wheel::WheelLink;

fn page(title: &str, body: &[String]) -> String {
    let title = encode_quoted_attribute(title);
    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "  <meta charset='utf-8'>".to_string(),
        format!("  <title>{title}</title>"),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("  <h1>{title}</h1>"),
    ];
    lines.extend(body.iter().cloned());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    let mut html = lines.join("\n");
    html.push('\n');
    html
}

/// `<a href='URL'>TEXT</a><br/>`; `href` must already be percent-encoded
fn anchor(href: &str, text: &str) -> String {
    format!(
        "  <a href='{}'>{}</a><br/>",
        href,
        encode_quoted_attribute(text)
    )
}

/// Package page: one anchor per wheel, in the given order
pub fn render_package_page(package_name: &str, wheels: &[WheelLink]) -> String {
    let links: Vec<String> = wheels
        .iter()
        .map(|wheel| anchor(&wheel.url, &wheel.filename))
        .collect();
    page(&format!("Links for {package_name}"), &links)
}

/// Root page linking each `(normalized name, display name)` package directory
pub fn render_root_page(packages: &[(String, String)]) -> String {
    let links: Vec<String> = packages
        .iter()
        .map(|(normalized, display)| anchor(&format!("{normalized}/"), display))
        .collect();
    page("Simple Index", &links)
}

/// Usage document for people pointing an installer at the index
pub fn render_readme(package_name: &str, index_name: &str, index_url: &str) -> String {
    format!(
        r#"# PEP 503 Simple Repository Index

This directory contains a PEP 503 compliant simple repository index for custom {package_name} builds.

## Usage

Install {package_name} using this index:

```bash
# With uv
uv pip install {package_name} --extra-index-url {index_url}

# With pip
pip install {package_name} --extra-index-url {index_url}
```

## Configuration

Add to your `pyproject.toml`:

```toml
[[tool.uv.index]]
name = "{index_name}"
url = "{index_url}"
```

Then simply:

```bash
uv pip install {package_name}
```

This index is automatically generated from GitHub Releases.
"#
    )
}

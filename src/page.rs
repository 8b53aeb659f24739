//! HTML rendering of the facts page.

use std::fmt::Write;

use serde_json::Value;

use crate::limit::Limit;
use crate::sources::FactRecord;

/// Message shown when the cat facts API could not be reached.
pub const CAT_FACTS_ERROR: &str = "Failed to fetch cat facts. Please try again.";

/// Everything the page is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    /// Facts to list, in API order.
    pub cat_facts: Vec<FactRecord>,
    /// Dog picture URL, if one was fetched.
    pub dog_image: Option<String>,
    /// User-facing error banner.
    pub error: Option<String>,
    /// Limit the form is pre-filled with.
    pub limit: Limit,
}

impl PageContext {
    /// The page before any form submission.
    pub fn initial() -> Self {
        Self {
            cat_facts: Vec::new(),
            dog_image: None,
            error: None,
            limit: Limit::DEFAULT,
        }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut body = String::new();

        if let Some(error) = &self.error {
            let _ = writeln!(body, r#"    <p class="error">{}</p>"#, escape(error));
        }

        if !self.cat_facts.is_empty() {
            body.push_str("    <h2>Cat facts</h2>\n    <ul class=\"facts\">\n");
            for record in &self.cat_facts {
                let _ = writeln!(body, "      <li>{}</li>", escape(&fact_text(record)));
            }
            body.push_str("    </ul>\n");
        }

        if let Some(url) = &self.dog_image {
            let _ = writeln!(
                body,
                r#"    <h2>A dog</h2>
    <img class="dog" src="{}" alt="Random dog">"#,
                escape(url)
            );
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cat Facts</title>
    <style>
        body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
        .error {{ color: #b00020; }}
        img.dog {{ max-width: 100%; }}
    </style>
</head>
<body>
    <h1>Cat Facts</h1>
    <form method="post" action="/">
        <label for="limit">Number of facts (1-10):</label>
        <input type="number" id="limit" name="limit" min="{min}" max="{max}" value="{limit}">
        <button type="submit">Get facts</button>
    </form>
{body}</body>
</html>
"#,
            min = Limit::MIN,
            max = Limit::MAX,
            limit = self.limit,
        )
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::initial()
    }
}

/// Text shown for one fact record: its `fact` field, a bare string, or
/// compact JSON for anything else.
fn fact_text(record: &FactRecord) -> String {
    match record {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("fact") {
            Some(Value::String(fact)) => fact.clone(),
            _ => record.to_string(),
        },
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

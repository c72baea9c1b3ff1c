//! Markdown renderer — one section per extracted enum.
//!
//! Output format: a `##` heading (linked to the declaration line when the
//! repository URL is known), the description paragraph, and a
//! Name/Value/Description table. Pure text composition; table-breaking
//! characters inside descriptions are passed through untouched.

use crate::model::EnumDoc;

/// Render a single enum as a Markdown block.
///
/// Rows follow member declaration order; no sorting or deduplication.
pub fn render_enum(e: &EnumDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(heading(e));
    lines.push(String::new());

    if !e.description.is_empty() {
        lines.push(e.description.clone());
        lines.push(String::new());
    }

    lines.push("| Name | Value | Description |".to_string());
    lines.push("| ---- | ----- | ----------- |".to_string());
    for v in &e.values {
        lines.push(format!("| `{}` | {} | {} |", v.name, v.number, v.description));
    }

    lines.join("\n")
}

/// Heading line, anchored to the declaration when a repo URL is present.
fn heading(e: &EnumDoc) -> String {
    match &e.repo_url {
        Some(url) => format!("## [{}]({}#L{})", e.name, url, e.line),
        None => format!("## {}", e.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumValue;

    fn sample() -> EnumDoc {
        EnumDoc {
            name: "Side".to_string(),
            description: "Side of an order.".to_string(),
            values: vec![
                EnumValue {
                    name: "BUY".to_string(),
                    number: 0,
                    description: "buyer".to_string(),
                },
                EnumValue {
                    name: "SELL".to_string(),
                    number: 1,
                    description: String::new(),
                },
            ],
            file: "common.proto".to_string(),
            line: 12,
            repo_url: Some("https://github.com/example/proto/blob/main/common.proto".to_string()),
        }
    }

    #[test]
    fn renders_linked_heading_description_and_table() {
        let block = render_enum(&sample());
        let expected = "\
## [Side](https://github.com/example/proto/blob/main/common.proto#L12)

Side of an order.

| Name | Value | Description |
| ---- | ----- | ----------- |
| `BUY` | 0 | buyer |
| `SELL` | 1 |  |";
        assert_eq!(block, expected);
    }

    #[test]
    fn heading_is_plain_without_repo_url() {
        let mut e = sample();
        e.repo_url = None;
        let block = render_enum(&e);
        assert!(block.starts_with("## Side\n"));
        assert!(!block.contains("]("));
    }

    #[test]
    fn empty_description_is_omitted() {
        let mut e = sample();
        e.description.clear();
        let block = render_enum(&e);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "| Name | Value | Description |");
    }

    #[test]
    fn rows_follow_declaration_order() {
        let mut e = sample();
        e.values.reverse();
        let block = render_enum(&e);
        let buy = block.find("`BUY`").unwrap();
        let sell = block.find("`SELL`").unwrap();
        assert!(sell < buy);
    }

    #[test]
    fn table_rows_round_trip_name_and_value() {
        let block = render_enum(&sample());
        let row = regex::Regex::new(r"(?m)^\| `([A-Z0-9_]+)` \| (\d+) \|").unwrap();

        let recovered: Vec<(String, u32)> = row
            .captures_iter(&block)
            .map(|c| (c[1].to_string(), c[2].parse().unwrap()))
            .collect();

        assert_eq!(
            recovered,
            vec![("BUY".to_string(), 0), ("SELL".to_string(), 1)]
        );
    }
}

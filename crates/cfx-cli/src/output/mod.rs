use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns that lead issue-like tables, in this order. Other columns follow
/// alphabetically.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "upvotes",
    "category",
    "status",
    "description",
    "address",
    "position",
    "reporter",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a titled block of prose. Table mode prints it as text; the JSON
/// modes wrap it as `{title, content}`.
pub fn render_document(title: &str, content: &str, format: OutputFormat) -> anyhow::Result<String> {
    #[derive(Serialize)]
    struct Document<'a> {
        title: &'a str,
        content: &'a str,
    }

    match format {
        OutputFormat::Table => {
            let rule = "=".repeat(title.chars().count());
            Ok(format!("{title}\n{rule}\n{content}"))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&Document { title, content }, format),
    }
}

pub fn output_document(title: &str, content: &str, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_document(title, content, format)?);
    Ok(())
}

/// Print a one-line notice. Suppressed in the JSON modes so stdout stays
/// machine-readable.
pub fn notice(message: &str, format: OutputFormat) {
    if format == OutputFormat::Table {
        println!("{message}");
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| column_order(&a.0, &b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no issues)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort_by(|a, b| column_order(a, b));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn column_order(a: &str, b: &str) -> std::cmp::Ordering {
    let rank = |key: &str| {
        LEADING_COLUMNS
            .iter()
            .position(|column| *column == key)
            .unwrap_or(LEADING_COLUMNS.len())
    };
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.split_whitespace().collect::<Vec<_>>().join(" "),
        Value::Object(map) => match (map.get("latitude"), map.get("longitude")) {
            (Some(Value::Number(lat)), Some(Value::Number(lng))) => format!("{lat}, {lng}"),
            _ => serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>")),
        },
        Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{render, render_document, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        description: &'static str,
        id: &'static str,
        upvotes: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let row = Row {
            description: "x",
            id: "iss-1",
            upvotes: 7,
        };
        let out = render(&row, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "iss-1");
        assert_eq!(parsed["upvotes"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let rows = vec![Row {
            description: "x",
            id: "iss-1",
            upvotes: 7,
        }];
        let out = render(&rows, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn issue_columns_lead_with_id_and_upvotes() {
        let rows = vec![Row {
            description: "road damage",
            id: "iss-1",
            upvotes: 3,
        }];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap();
        let id_at = header.find("id").unwrap();
        let upvotes_at = header.find("upvotes").unwrap();
        let description_at = header.find("description").unwrap();
        assert!(id_at < upvotes_at && upvotes_at < description_at);
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no issues)");
    }

    #[test]
    fn cells_flatten_geotags_and_newlines() {
        assert_eq!(
            value_to_cell(&json!({"latitude": 28.6139, "longitude": 77.209})),
            "28.6139, 77.209"
        );
        assert_eq!(value_to_cell(&json!("two\nlines")), "two lines");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }

    #[test]
    fn document_render_modes() {
        let table = render_document("AI Summary of Issues", "All good.", OutputFormat::Table)
            .unwrap();
        assert!(table.starts_with("AI Summary of Issues\n===="));
        assert!(table.ends_with("All good."));

        let json = render_document("T", "C", OutputFormat::Raw).unwrap();
        assert_eq!(json, r#"{"title":"T","content":"C"}"#);
    }
}

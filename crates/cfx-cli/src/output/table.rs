#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows. Numeric cells are right-aligned
/// and issue statuses are colored when `options.color` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad_cell(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize_status(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 4;

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

fn pad_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Color a padded cell by issue status. Padding stays outside the escape
/// codes so alignment is unaffected.
fn colorize_status(cell: &str) -> String {
    let value = cell.trim_end();
    let code = match value.to_ascii_lowercase().as_str() {
        "resolved" | "true" => "32",
        "submitted" => "33",
        "in-progress" => "36",
        "false" => "31",
        _ => return cell.to_string(),
    };
    let padding = &cell[value.len()..];
    format!("\u{1b}[{code}m{value}\u{1b}[0m{padding}")
}

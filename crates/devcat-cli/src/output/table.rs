use devcat_core::enums::LifecycleStatus;

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";
const STATUS_HEADERS: [&str; 2] = ["status", "lifecycle_status"];

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table with a dashed divider under the header.
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
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());
    let colored: Vec<bool> = headers
        .iter()
        .map(|header| options.color && STATUS_HEADERS.contains(header))
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), width);
                let padded = pad(&cell, width, looks_numeric(&cell));
                if colored.get(index).copied().unwrap_or(false) {
                    colorize_status(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|&(index, &width)| width > headers[index].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|&(_, &width)| width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

/// Wrap a padded lifecycle-status cell in an ANSI color.
fn colorize_status(cell: &str, padded: String) -> String {
    let code = match cell.parse::<LifecycleStatus>() {
        Ok(LifecycleStatus::Live) => "32",
        Ok(LifecycleStatus::InProgress) => "33",
        Ok(LifecycleStatus::Archived) => "2",
        Err(_) => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

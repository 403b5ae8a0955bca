//! Raw trip rows rendered as an aligned text table.
//!
//! Columns are padded by terminal display width rather than byte length so
//! that station names with accented or wide characters stay aligned.

use bikeshare_core::models::{Schema, TripRecord};
use unicode_width::UnicodeWidthStr;

/// Placeholder for a blank cell.
const MISSING: &str = "-";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
    cell: fn(&TripRecord) -> String,
}

fn columns(schema: Schema) -> Vec<Column> {
    let mut cols = vec![
        Column {
            header: "",
            align: Align::Right,
            cell: |t| t.position.to_string(),
        },
        Column {
            header: "Start Time",
            align: Align::Left,
            cell: |t| t.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        },
        Column {
            header: "End Time",
            align: Align::Left,
            cell: |t| t.end_time.clone(),
        },
        Column {
            header: "Trip Duration",
            align: Align::Right,
            cell: |t| {
                t.trip_duration
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| MISSING.to_string())
            },
        },
        Column {
            header: "Start Station",
            align: Align::Left,
            cell: |t| t.start_station.clone().unwrap_or_else(|| MISSING.to_string()),
        },
        Column {
            header: "End Station",
            align: Align::Left,
            cell: |t| t.end_station.clone().unwrap_or_else(|| MISSING.to_string()),
        },
        Column {
            header: "User Type",
            align: Align::Left,
            cell: |t| t.user_type.clone().unwrap_or_else(|| MISSING.to_string()),
        },
    ];
    if schema.has_gender {
        cols.push(Column {
            header: "Gender",
            align: Align::Left,
            cell: |t| t.gender.clone().unwrap_or_else(|| MISSING.to_string()),
        });
    }
    if schema.has_birth_year {
        cols.push(Column {
            header: "Birth Year",
            align: Align::Right,
            cell: |t| {
                t.birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| MISSING.to_string())
            },
        });
    }
    cols
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

/// Render `rows` with a header line. Optional columns appear only when the
/// schema carries them. Each line ends with `\n`; trailing padding is trimmed.
pub fn render_rows(rows: &[TripRecord], schema: Schema) -> String {
    let cols = columns(schema);
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| cols.iter().map(|c| (c.cell)(row)).collect())
        .collect();

    let widths: Vec<usize> = cols
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].width())
                .chain(std::iter::once(c.header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = cols
        .iter()
        .zip(&widths)
        .map(|(c, &w)| pad(c.header, w, c.align))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(cols.iter().zip(&widths))
            .map(|(text, (c, &w))| pad(text, w, c.align))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

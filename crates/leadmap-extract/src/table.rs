//! Markdown table scanning for model responses.
//!
//! The model is asked for a table only, but replies often wrap it in prose.
//! The scan keys off line shape alone: column names are never read, so
//! `Name | Address | Phone | Website | Rating` is assumed by position.

use leadmap_core::{Lead, NOT_AVAILABLE};
use uuid::Uuid;

use crate::phone::normalize_phone;

/// Rows with fewer cells than this cannot form a lead.
const MIN_CELLS: usize = 3;

/// Parses every data row of the pipe table in `markdown` into a [`Lead`]
/// tagged with `city`, in row order.
///
/// The first pipe line before a separator row is the header. Data rows are
/// only accepted once both a header and a separator have been seen, so a
/// table without a separator yields nothing rather than treating its header
/// as data. Rows with fewer than three cells are dropped.
#[must_use]
pub fn parse_leads_table(markdown: &str, city: &str) -> Vec<Lead> {
    let mut leads = Vec::new();
    let mut header_seen = false;
    let mut separator_seen = false;

    for line in markdown.lines() {
        let line = line.trim();
        if !line.starts_with('|') {
            continue;
        }

        if is_separator_row(line) {
            separator_seen = true;
            continue;
        }

        if !header_seen && !separator_seen {
            header_seen = true;
            continue;
        }

        if !(header_seen && separator_seen) {
            continue;
        }

        let cells = split_cells(line);
        if cells.len() < MIN_CELLS {
            tracing::debug!(cells = cells.len(), row = line, "dropping short table row");
            continue;
        }

        leads.push(lead_from_cells(&cells, city));
    }

    leads
}

/// A separator row holds only pipes, dashes, colons and whitespace after its
/// leading pipe. Blank rows like `|   |   |` match too and are skipped.
fn is_separator_row(line: &str) -> bool {
    line.len() > 1
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Splits a pipe row into trimmed cells, dropping the empty edge cells left
/// by the leading and trailing pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn lead_from_cells(cells: &[&str], city: &str) -> Lead {
    Lead {
        id: Uuid::new_v4(),
        name: cell_or_na(cells, 0).to_string(),
        address: cell_or_na(cells, 1).to_string(),
        phone: normalize_phone(cell_or_na(cells, 2)),
        website: cell_or_na(cells, 3).to_string(),
        rating: cell_or_na(cells, 4).to_string(),
        city: city.to_string(),
    }
}

fn cell_or_na<'a>(cells: &[&'a str], idx: usize) -> &'a str {
    cells
        .get(idx)
        .copied()
        .filter(|c| !c.is_empty())
        .unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;

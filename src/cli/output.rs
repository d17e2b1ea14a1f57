use anyhow::Result;
use fleetdesk_table::{PageBody, RenderedPage};
use fleetdesk_tui::ViewOutcome;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use super::OutputFormat;

const COLUMN_GAP: &str = "  ";

/// Render a page as an aligned text table followed by a summary footer.
pub(crate) fn format_plain_page(page: &RenderedPage, count_label: &str) -> String {
	let rows = page
		.rows()
		.iter()
		.map(|row| row.texts())
		.collect::<Vec<_>>();
	let mut widths = page.headers.iter().map(|h| h.width()).collect::<Vec<_>>();
	for row in &rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut lines = vec![
		join_padded(&page.headers, &widths),
		widths
			.iter()
			.map(|width| "-".repeat(*width))
			.collect::<Vec<_>>()
			.join(COLUMN_GAP),
	];
	match &page.body {
		PageBody::Empty { message, .. } => lines.push(message.clone()),
		PageBody::Rows { .. } => {
			lines.extend(rows.iter().map(|row| join_padded(row, &widths)));
		}
	}
	lines.push(format!(
		"page {}/{} · {} of {} {count_label}",
		page.page, page.total_pages, page.filtered_count, page.total_count
	));
	lines.join("\n")
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
	let line = cells
		.iter()
		.zip(widths)
		.map(|(cell, width)| {
			let padding = width.saturating_sub(cell.width());
			format!("{cell}{}", " ".repeat(padding))
		})
		.collect::<Vec<_>>()
		.join(COLUMN_GAP);
	line.trim_end().to_string()
}

/// Format a page as JSON, cells reduced to their plain text.
pub(crate) fn format_page_json(page: &RenderedPage) -> Result<String> {
	let rows = page
		.rows()
		.iter()
		.map(|row| json!({ "id": row.id, "cells": row.texts() }))
		.collect::<Vec<_>>();
	let payload = json!({
		"page": page.page,
		"total_pages": page.total_pages,
		"filtered": page.filtered_count,
		"total": page.total_count,
		"headers": page.headers,
		"rows": rows,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Describe how the interactive view ended.
pub(crate) fn format_outcome_plain(outcome: &ViewOutcome) -> String {
	if !outcome.accepted {
		return format!("Cancelled (query: '{}')", outcome.query);
	}
	match &outcome.selection {
		Some(id) => id.to_string(),
		None => "No selection".to_string(),
	}
}

/// Format the outcome of the interactive view as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ViewOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_outcome(format: OutputFormat, outcome: &ViewOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

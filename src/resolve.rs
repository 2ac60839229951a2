//! Column resolution for template rows.
//!
//! Export headers drifted across the source tables over time, so resolution
//! tries the configured column first and then falls back to a substring
//! scan over the row's columns in header order. The first matching column
//! wins even when its value turns out to be empty; what an empty value
//! means is decided here, not by the scan.

use crate::sources::SourceConfig;
use crate::table::RowRecord;

/// A row resolved into its display name and raw prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUnit {
    pub name: String,
    pub prompt: String,
}

/// Outcome of resolving one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The row carries usable prompt text.
    Template(TemplateUnit),
    /// No column yielded prompt text; carries the resolved name so the
    /// caller can report the skip.
    NoPrompt { name: String },
}

/// Resolve a row into a template unit.
///
/// The name always resolves, worst case to a synthesized `template_<row>`
/// from the 1-based data row index. The prompt may not; a row whose every
/// candidate column is missing or blank resolves to [`Resolved::NoPrompt`].
pub fn resolve_row(row: &RowRecord, config: &SourceConfig, row_index: usize) -> Resolved {
    let name = template_name(row, config, row_index);

    match prompt_text(row, config) {
        Some(text) if !text.trim().is_empty() => Resolved::Template(TemplateUnit {
            name,
            prompt: text.to_string(),
        }),
        _ => Resolved::NoPrompt { name },
    }
}

/// Resolve the template's display name.
///
/// Tries, in order: the configured name column (only when non-empty), then
/// the first column whose name contains `name` or `template` ignoring
/// case. A value that is still blank falls through to the synthesized
/// `template_<row>` form.
fn template_name(row: &RowRecord, config: &SourceConfig, row_index: usize) -> String {
    let mut name = row.get(config.name_column).filter(|v| !v.is_empty());

    if name.is_none() {
        name = row
            .columns()
            .find(|col| {
                let lower = col.to_lowercase();
                lower.contains("name") || lower.contains("template")
            })
            .and_then(|col| row.get(col));
    }

    match name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => format!("template_{}", row_index + 1),
    }
}

/// Resolve the raw prompt text.
///
/// Preference order: the configured packaged column, the configured prompt
/// column, then the first column whose name contains `packaged`, `prompt`,
/// or `template` ignoring case. The configured columns only count when
/// non-empty; the scan returns whatever its first match holds.
fn prompt_text<'a>(row: &'a RowRecord, config: &SourceConfig) -> Option<&'a str> {
    if let Some(packaged) = config.packaged_column
        && let Some(value) = row.get(packaged)
        && !value.is_empty()
    {
        return Some(value);
    }

    if let Some(value) = row.get(config.prompt_column)
        && !value.is_empty()
    {
        return Some(value);
    }

    row.columns()
        .find(|col| {
            let lower = col.to_lowercase();
            lower.contains("packaged") || lower.contains("prompt") || lower.contains("template")
        })
        .and_then(|col| row.get(col))
}

//! File emission for generated Dotprompt documents.
//!
//! Derives a filesystem-safe name from the template's display name, makes
//! sure the category directory exists, and writes the rendered document.
//! Writes overwrite unconditionally: two templates whose names sanitize to
//! the same stem within one category collide silently unless uniqueness
//! suffixing is switched on.

use crate::error::{GraftError, Result};
use crate::prompt;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Extension for generated files.
pub const PROMPT_EXTENSION: &str = "prompt";

/// Cap on the sanitized file name stem, in characters.
pub const MAX_STEM_LEN: usize = 100;

/// Writes rendered documents under the output root, one category
/// subdirectory per source.
#[derive(Debug)]
pub struct Emitter {
    output_root: PathBuf,
    unique_suffix: bool,
    claimed: HashMap<(String, String), u32>,
}

impl Emitter {
    /// Create an emitter rooted at `output_root`. With `unique_suffix` set,
    /// repeated stems within a category get `_2`, `_3`, ... appended
    /// instead of overwriting the earlier file.
    pub fn new(output_root: impl Into<PathBuf>, unique_suffix: bool) -> Self {
        Emitter {
            output_root: output_root.into(),
            unique_suffix,
            claimed: HashMap::new(),
        }
    }

    /// Render and write one template into its category directory.
    ///
    /// Returns the written path, or `None` when the rewritten body is empty
    /// and the template is skipped. The category directory is created
    /// either way.
    pub fn emit(&mut self, name: &str, body: &str, category: &str) -> Result<Option<PathBuf>> {
        let category_dir = self.output_root.join(category);
        fs::create_dir_all(&category_dir).map_err(|e| {
            GraftError::UserError(format!(
                "failed to create category directory '{}': {}",
                category_dir.display(),
                e
            ))
        })?;

        if body.is_empty() {
            return Ok(None);
        }

        let stem = self.claim_stem(category, sanitize_stem(name));
        let path = category_dir.join(format!("{}.{}", stem, PROMPT_EXTENSION));

        let document = prompt::render_document(body)?;
        fs::write(&path, document).map_err(|e| {
            GraftError::UserError(format!("failed to write '{}': {}", path.display(), e))
        })?;

        Ok(Some(path))
    }

    /// Record the stem for this category, suffixing repeats when enabled.
    fn claim_stem(&mut self, category: &str, stem: String) -> String {
        if !self.unique_suffix {
            return stem;
        }

        let count = self
            .claimed
            .entry((category.to_string(), stem.clone()))
            .or_insert(0);
        *count += 1;

        if *count == 1 {
            stem
        } else {
            format!("{}_{}", stem, *count)
        }
    }
}

/// Sanitize a template name into a file name stem.
///
/// Every character outside `[A-Za-z0-9]` becomes an underscore, runs of
/// underscores collapse to one, leading and trailing underscores are
/// stripped, the rest is lowercased and truncated to [`MAX_STEM_LEN`]
/// characters. A name with nothing usable falls back to `template`.
pub fn sanitize_stem(name: &str) -> String {
    let mut stem = String::new();
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !stem.is_empty() {
                stem.push('_');
            }
            pending_separator = false;
            stem.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    stem.truncate(MAX_STEM_LEN);

    if stem.is_empty() {
        return "template".to_string();
    }
    stem
}

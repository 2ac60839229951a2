//! The conversion batch: walk the configured sources, convert every row.
//!
//! Each configured export is independent. A missing file, an unparseable
//! file, or a useless row is reported on the console and skipped; the run
//! carries on to the next entry and exits zero. Only a failure to prepare
//! the output root aborts the batch.

use crate::cli::Cli;
use crate::emit::Emitter;
use crate::error::{GraftError, Result};
use crate::resolve::{self, Resolved};
use crate::rewrite;
use crate::sources::{SOURCES, SourceConfig};
use crate::table;
use std::fs;
use std::path::Path;

/// Notice printed once every configured source has been attempted. The
/// mangled checkmark is the tool's historical output, kept byte-for-byte.
const COMPLETION_NOTICE: &str = "âœ… Transformation complete!";

/// Run the full conversion batch described by the command line.
pub fn run(cli: &Cli) -> Result<()> {
    convert_all(&cli.input_dir, &cli.output_dir, SOURCES, cli.unique_suffix)
}

/// Convert every configured source under `input_dir` into `output_root`.
pub fn convert_all(
    input_dir: &Path,
    output_root: &Path,
    sources: &[SourceConfig],
    unique_suffix: bool,
) -> Result<()> {
    fs::create_dir_all(output_root).map_err(|e| {
        GraftError::UserError(format!(
            "failed to create output directory '{}': {}",
            output_root.display(),
            e
        ))
    })?;

    let mut emitter = Emitter::new(output_root, unique_suffix);

    for source in sources {
        let input_path = input_dir.join(source.filename);
        if !input_path.exists() {
            println!("File not found: {}", input_path.display());
            continue;
        }

        if let Err(err) = convert_source(&input_path, source, &mut emitter) {
            eprintln!("Error processing {}: {}", input_path.display(), err);
        }
    }

    println!();
    println!("{}", COMPLETION_NOTICE);
    Ok(())
}

/// Convert one source file, row by row.
///
/// An error return means the file as a whole failed (unreadable, bad CSV,
/// or the filesystem refused a write); rows before the failure stay
/// written. Row-level problems are reported inline and never error.
fn convert_source(input_path: &Path, source: &SourceConfig, emitter: &mut Emitter) -> Result<()> {
    println!();
    println!("Processing: {}", input_path.display());

    let rows = table::read_records(input_path)?;
    println!("Found {} templates", rows.len());

    for (index, row) in rows.iter().enumerate() {
        let unit = match resolve::resolve_row(row, source, index) {
            Resolved::Template(unit) => unit,
            Resolved::NoPrompt { name } => {
                println!("Skipping {}: no prompt text", name);
                continue;
            }
        };

        let body = rewrite::to_handlebars(unit.prompt.trim());
        match emitter.emit(&unit.name, &body, source.category)? {
            Some(path) => println!("Created: {}", path.display()),
            None => println!("Skipping {}: empty prompt text", unit.name),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources;
    use tempfile::TempDir;

    const TEST_SOURCES: &[SourceConfig] = &[
        SourceConfig {
            filename: "posts.csv",
            category: "social",
            name_column: "Title",
            prompt_column: "Body",
            packaged_column: Some("PackedBody"),
        },
        SourceConfig {
            filename: "mails.csv",
            category: "email",
            name_column: "Title",
            prompt_column: "Body",
            packaged_column: None,
        },
    ];

    fn write_input(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn converts_configured_sources_into_category_dirs() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_input(&input, "posts.csv", "Title,Body\nFirst Post,Hi [Reader]\n");
        write_input(&input, "mails.csv", "Title,Body\nPromo,##Buy now\n");

        convert_all(&input, &output, TEST_SOURCES, false).unwrap();

        let post = fs::read_to_string(output.join("social/first_post.prompt")).unwrap();
        assert!(post.contains("reader: string"));
        assert!(post.ends_with("---\nHi {{reader}}"));

        let mail = fs::read_to_string(output.join("email/promo.prompt")).unwrap();
        assert!(mail.contains("text?: string"));
        assert!(mail.ends_with("---\nBuy now"));
    }

    #[test]
    fn missing_files_are_skipped_and_the_run_still_succeeds() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_input(&input, "mails.csv", "Title,Body\nPromo,text\n");

        convert_all(&input, &output, TEST_SOURCES, false).unwrap();

        assert!(!output.join("social").exists());
        assert!(output.join("email/promo.prompt").is_file());
    }

    #[test]
    fn a_run_with_no_inputs_at_all_succeeds_and_creates_the_root() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();

        convert_all(&input, &output, sources::SOURCES, false).unwrap();

        assert!(output.is_dir());
        assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
    }

    #[test]
    fn an_unparseable_file_does_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("posts.csv"), [0xff, 0xfe, 0x41]).unwrap();
        write_input(&input, "mails.csv", "Title,Body\nStill Works,text\n");

        convert_all(&input, &output, TEST_SOURCES, false).unwrap();

        assert!(output.join("email/still_works.prompt").is_file());
        assert!(fs::read_dir(output.join("social")).is_err());
    }

    #[test]
    fn rows_without_prompt_text_are_skipped_rows_with_it_are_kept() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_input(
            &input,
            "mails.csv",
            "Title,Body\nKeep,real text\nDrop,\nAlso Keep,more text\n",
        );

        convert_all(&input, &output, TEST_SOURCES, false).unwrap();

        let written: Vec<String> = {
            let mut names: Vec<String> = fs::read_dir(output.join("email"))
                .unwrap()
                .map(|e| e.unwrap().file_name().into_string().unwrap())
                .collect();
            names.sort();
            names
        };
        assert_eq!(written, ["also_keep.prompt", "keep.prompt"]);
    }

    #[test]
    fn packaged_text_wins_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_input(
            &input,
            "posts.csv",
            "Title,Body,PackedBody\nPost,plain,packaged version\n",
        );

        convert_all(&input, &output, TEST_SOURCES, false).unwrap();

        let content = fs::read_to_string(output.join("social/post.prompt")).unwrap();
        assert!(content.ends_with("---\npackaged version"));
    }

    #[test]
    fn bom_and_ragged_rows_survive_the_whole_pipeline() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_input(
            &input,
            "mails.csv",
            "\u{feff}Title,Body\nShort Row\nLong Row,body text,extra,extra\n",
        );

        convert_all(&input, &output, TEST_SOURCES, false).unwrap();

        let email_dir = output.join("email");
        assert!(!email_dir.join("short_row.prompt").exists());
        assert!(email_dir.join("long_row.prompt").is_file());
    }

    #[test]
    fn unique_suffix_flag_reaches_the_emitter() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        write_input(&input, "mails.csv", "Title,Body\nTwin,one\nTwin,two\n");

        convert_all(&input, &output, TEST_SOURCES, true).unwrap();

        assert!(output.join("email/twin.prompt").is_file());
        assert!(output.join("email/twin_2.prompt").is_file());
    }

    #[test]
    fn builtin_sources_are_found_by_their_exact_mangled_names() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        let social = &sources::SOURCES[4];
        write_input(
            &input,
            social.filename,
            "SocialPromptName,templatePromptText\nReal Export,post about [topic]\n",
        );

        convert_all(&input, &output, sources::SOURCES, false).unwrap();

        let content = fs::read_to_string(output.join("social/real_export.prompt")).unwrap();
        assert!(content.contains("topic: string"));
        assert!(content.ends_with("post about {{topic}}"));
    }
}

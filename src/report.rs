use crate::config::ScanConfig;
use crate::types::IndexOutcome;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};
use std::path::Path;

pub fn print_missing(folder: &Path) {
    println!(
        "{} directory not found: {}",
        "SKIPPED:".yellow(),
        folder.display()
    );
}

pub fn print_written(output_path: &Path, entries: usize) {
    println!(
        "{} generated {} with {} entries",
        "OK:".green(),
        output_path.display(),
        entries.to_string().green()
    );
}

pub fn print_failure(cfg: &ScanConfig, err: &dyn std::fmt::Display) {
    eprintln!("{} indexing {} failed: {err}", "ERROR:".red(), cfg.folder);
}

#[must_use]
pub fn build_summary(results: &[(ScanConfig, IndexOutcome)]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec![
        Cell::new("Folder").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
        Cell::new("Location").add_attribute(Attribute::Bold),
        Cell::new("Entries").add_attribute(Attribute::Bold),
        Cell::new("Index Size").add_attribute(Attribute::Bold),
    ]);

    for (cfg, outcome) in results {
        match outcome {
            IndexOutcome::Written {
                output_path,
                entries,
                bytes,
            } => {
                table.add_row(vec![
                    Cell::new(&cfg.folder),
                    Cell::new("written").fg(Color::Green),
                    Cell::new(output_path.display()),
                    Cell::new(entries),
                    Cell::new(human_bytes::human_bytes(*bytes as f64)),
                ]);
            }
            IndexOutcome::MissingFolder { folder } => {
                table.add_row(vec![
                    Cell::new(&cfg.folder),
                    Cell::new("missing").fg(Color::Yellow),
                    Cell::new(folder.display()),
                    Cell::new("-"),
                    Cell::new("-"),
                ]);
            }
        }
    }

    table
}

pub fn print_summary(results: &[(ScanConfig, IndexOutcome)]) {
    println!("\n{}", build_summary(results));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_summary_rows() {
        let results = vec![
            (
                ScanConfig::photos(),
                IndexOutcome::Written {
                    output_path: PathBuf::from("photos/index.json"),
                    entries: 12,
                    bytes: 2048,
                },
            ),
            (
                ScanConfig::posts(),
                IndexOutcome::MissingFolder {
                    folder: PathBuf::from("posts"),
                },
            ),
        ];

        let rendered = build_summary(&results).to_string();
        assert!(rendered.contains("photos"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("written"));
        assert!(rendered.contains("2 KB") || rendered.contains("2 KiB"));
        assert!(rendered.contains("posts"));
        assert!(rendered.contains("missing"));
    }
}

use anyhow::Result;
use linegrep::search::{SearchOptions, search_files};
use serial_test::serial;
use std::path::PathBuf;

use test_helpers::CORPUS_DIR;

/// Tests for the basic scanning behavior over the committed corpus
#[cfg(test)]
mod search_tests {
    use super::*;

    fn corpus_file(name: &str) -> PathBuf {
        PathBuf::from(CORPUS_DIR).join(name)
    }

    #[test]
    #[serial]
    fn test_search_reports_matching_lines() -> Result<()> {
        let targets = vec![corpus_file("fruits.txt")];
        let results = search_files("apple", &targets, &SearchOptions::default())?;

        assert_eq!(results.matched_line_count, 3);
        let numbers: Vec<u64> = results.lines.iter().map(|r| r.line_number).collect();
        assert_eq!(numbers, vec![1, 3, 5]);
        assert_eq!(results.lines[0].line_content, "apple pie");
        assert_eq!(results.lines[1].line_content, "cherry apple jam");
        assert_eq!(results.lines[2].line_content, "apple");

        Ok(())
    }

    #[test]
    #[serial]
    fn test_search_renders_text_output() -> Result<()> {
        let target = corpus_file("fruits.txt");
        let results = search_files("apple", &[target.clone()], &SearchOptions::default())?;

        let plain: Vec<String> = results.lines.iter().map(|r| r.render(false)).collect();
        assert_eq!(plain[0], format!("{}: apple pie", target.display()));

        let numbered: Vec<String> = results.lines.iter().map(|r| r.render(true)).collect();
        assert_eq!(numbered[0], format!("{}:1: apple pie", target.display()));
        assert_eq!(numbered[1], format!("{}:3: cherry apple jam", target.display()));

        Ok(())
    }

    #[test]
    #[serial]
    fn test_search_case_insensitive() -> Result<()> {
        let targets = vec![corpus_file("fruits.txt")];

        let sensitive = search_files("APPLE", &targets, &SearchOptions::default())?;
        assert_eq!(sensitive.matched_line_count, 0);

        let options = SearchOptions {
            case_insensitive: true,
            ..SearchOptions::default()
        };
        let insensitive = search_files("APPLE", &targets, &options)?;
        assert_eq!(insensitive.matched_line_count, 3);

        Ok(())
    }

    #[test]
    #[serial]
    fn test_count_only_returns_total_without_lines() -> Result<()> {
        let targets = vec![corpus_file("fruits.txt")];
        let options = SearchOptions {
            count_only: true,
            ..SearchOptions::default()
        };
        let results = search_files("apple", &targets, &options)?;

        assert!(results.lines.is_empty());
        assert_eq!(results.matched_line_count, 3);

        Ok(())
    }

    #[test]
    #[serial]
    fn test_missing_target_does_not_abort_the_run() -> Result<()> {
        let targets = vec![corpus_file("no_such_file.txt"), corpus_file("fruits.txt")];
        let results = search_files("apple", &targets, &SearchOptions::default())?;

        assert_eq!(results.matched_line_count, 3);
        assert!(
            results
                .lines
                .iter()
                .all(|r| r.file_path.ends_with("fruits.txt"))
        );

        Ok(())
    }

    #[test]
    #[serial]
    fn test_search_across_multiple_targets_in_order() -> Result<()> {
        let targets = vec![corpus_file("notes.md"), corpus_file("fruits.txt")];
        let results = search_files("apple", &targets, &SearchOptions::default())?;

        assert_eq!(results.matched_line_count, 4);
        assert!(results.lines[0].file_path.ends_with("notes.md"));
        assert!(results.lines[1].file_path.ends_with("fruits.txt"));

        Ok(())
    }

    #[test]
    #[serial]
    fn test_repeated_search_is_idempotent() -> Result<()> {
        let targets = vec![corpus_file("fruits.txt"), corpus_file("words.txt")];
        let options = SearchOptions {
            line_numbers: true,
            context_lines: 1,
            ..SearchOptions::default()
        };

        let first = search_files("cat", &targets, &options)?;
        let second = search_files("cat", &targets, &options)?;

        let render = |lines: &[linegrep::search::SearchResultLine]| -> Vec<String> {
            lines.iter().map(|r| r.render(true)).collect()
        };
        assert_eq!(render(&first.lines), render(&second.lines));
        assert_eq!(first.matched_line_count, second.matched_line_count);

        Ok(())
    }

    #[test]
    #[serial]
    fn test_malformed_pattern_is_rejected() {
        let targets = vec![corpus_file("fruits.txt")];
        let result = search_files("[unclosed", &targets, &SearchOptions::default());
        assert!(result.is_err());
    }
}

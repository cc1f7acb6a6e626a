use crate::logger;
use crate::models::VocabEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// Pair separator used throughout the word-list format.
const SEPARATOR: &str = " - ";

/// Parsed contents of one word-list file.
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    pub entries: Vec<VocabEntry>,
    pub labels: (String, String),
    pub failed_lines: Vec<usize>,
}

impl WordList {
    pub fn empty() -> Self {
        WordList {
            entries: Vec::new(),
            labels: ("Left".to_string(), "Right".to_string()),
            failed_lines: Vec::new(),
        }
    }
}

pub fn get_txt_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir() {
        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                if let Some(ext) = entry.path().extension() {
                    if ext == "txt" {
                        files.push(entry.path());
                    }
                }
            }
        }
    }

    files.sort();
    files
}

/// Reads and parses a word-list file. A missing or unreadable file is not an
/// error: it yields an empty list and a logged warning, and the UI shows the
/// "file empty or invalid" placeholder.
pub fn load_word_list(path: &Path) -> WordList {
    match fs::read_to_string(path) {
        Ok(content) => parse_word_list(&content),
        Err(err) => {
            logger::log(&format!("File {} not read: {}", path.display(), err));
            WordList::empty()
        }
    }
}

/// Parses raw word-list text.
///
/// The first line carries the display labels ("English - Polish"); defaults
/// apply when it is absent or has no separator. Every following line is
/// numbered from 2 and is one of:
/// - blank or `#`-prefixed: skipped,
/// - `$ group name $`: sets the context applied to all following entries,
/// - `left - right`: an entry, split on the first separator; pairs whose
///   sides are identical are dropped,
/// - anything else: tallied in `failed_lines` and ignored.
pub fn parse_word_list(content: &str) -> WordList {
    let mut lines = content.lines();

    let labels = lines
        .next()
        .and_then(|first| first.trim().split_once(SEPARATOR))
        .map(|(l, r)| (l.to_string(), r.to_string()))
        .unwrap_or_else(|| ("Left".to_string(), "Right".to_string()));

    let mut entries = Vec::new();
    let mut failed_lines = Vec::new();
    let mut current_context: Option<String> = None;

    for (line_number, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.len() > 2 && line.starts_with('$') && line.ends_with('$') {
            current_context = Some(line[1..line.len() - 1].trim().to_string());
            continue;
        }
        match line.split_once(SEPARATOR) {
            Some((left, right)) => {
                if left != right {
                    entries.push(VocabEntry {
                        left: left.to_string(),
                        right: right.to_string(),
                        line_number,
                        context: current_context.clone(),
                    });
                }
            }
            None => failed_lines.push(line_number),
        }
    }

    if !failed_lines.is_empty() {
        logger::log(&format!("Failed to parse lines: {:?}", failed_lines));
    }

    WordList {
        entries,
        labels,
        failed_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_labels_and_single_entry() {
        let list = parse_word_list("A - B\ncat - kot");
        assert_eq!(list.labels, ("A".to_string(), "B".to_string()));
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].left, "cat");
        assert_eq!(list.entries[0].right, "kot");
        assert_eq!(list.entries[0].line_number, 2);
        assert!(list.entries[0].context.is_none());
    }

    #[test]
    fn test_default_labels_when_first_line_malformed() {
        let list = parse_word_list("vocabulary\ncat - kot");
        assert_eq!(list.labels, ("Left".to_string(), "Right".to_string()));
        assert_eq!(list.entries.len(), 1);
    }

    #[test]
    fn test_default_labels_for_empty_input() {
        let list = parse_word_list("");
        assert_eq!(list.labels, ("Left".to_string(), "Right".to_string()));
        assert!(list.entries.is_empty());
        assert!(list.failed_lines.is_empty());
    }

    #[test]
    fn test_identical_pair_dropped() {
        let list = parse_word_list("A - B\nsame - same");
        assert!(list.entries.is_empty());
        assert!(list.failed_lines.is_empty());
    }

    #[test]
    fn test_line_without_separator_is_failed() {
        let list = parse_word_list("A - B\ncat - kot\nnonsense line\ndog - pies");
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.failed_lines, vec![3]);
        assert_eq!(list.entries[1].line_number, 4);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let list = parse_word_list("A - B\n# comment\n\ncat - kot\n   \n");
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].line_number, 4);
        assert!(list.failed_lines.is_empty());
    }

    #[test]
    fn test_context_applies_to_following_entries() {
        let content = "A - B\ncat - kot\n$ Animals $\ndog - pies\nbird - ptak\n$Food$\nbread - chleb";
        let list = parse_word_list(content);
        assert_eq!(list.entries.len(), 4);
        assert!(list.entries[0].context.is_none());
        assert_eq!(list.entries[1].context.as_deref(), Some("Animals"));
        assert_eq!(list.entries[2].context.as_deref(), Some("Animals"));
        assert_eq!(list.entries[3].context.as_deref(), Some("Food"));
    }

    #[test]
    fn test_context_marker_lines_produce_no_entries() {
        let list = parse_word_list("A - B\n$ Animals $\n$ More $");
        assert!(list.entries.is_empty());
        assert!(list.failed_lines.is_empty());
    }

    #[test]
    fn test_bare_dollar_pair_is_failed_line() {
        // "$$" is too short to be a context marker and has no separator.
        let list = parse_word_list("A - B\n$$");
        assert!(list.entries.is_empty());
        assert_eq!(list.failed_lines, vec![2]);
    }

    #[test]
    fn test_split_on_first_separator_only() {
        let list = parse_word_list("A - B\none - two - three");
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].left, "one");
        assert_eq!(list.entries[0].right, "two - three");
    }

    #[test]
    fn test_line_numbers_preserved_in_file_order() {
        let content = "A - B\ncat - kot\n# skip\ndog - pies\n\nfish - ryba";
        let list = parse_word_list(content);
        let numbers: Vec<usize> = list.entries.iter().map(|e| e.line_number).collect();
        assert_eq!(numbers, vec![2, 4, 6]);
    }

    #[test]
    fn test_load_word_list_missing_file() {
        let list = load_word_list(Path::new("definitely/not/here.txt"));
        assert!(list.entries.is_empty());
        assert_eq!(list.labels, ("Left".to_string(), "Right".to_string()));
    }

    #[test]
    fn test_load_word_list_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "English - Polish\ncat - kot\ndog - pies").unwrap();

        let list = load_word_list(file.path());
        assert_eq!(list.labels, ("English".to_string(), "Polish".to_string()));
        assert_eq!(list.entries.len(), 2);
    }

    #[test]
    fn test_get_txt_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "x").unwrap();
        std::fs::write(dir.path().join("a.txt"), "x").unwrap();
        std::fs::write(dir.path().join("notes.md"), "x").unwrap();

        let files = get_txt_files(dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_get_txt_files_missing_dir() {
        assert!(get_txt_files(Path::new("no/such/dir")).is_empty());
    }
}

//! Tests for dictionary line parsing and file loading

#[cfg(test)]
mod tests {
    use minifill::io::dictionary::{load, load_index, parse, parse_entry};
    use minifill::io::error::EngineError;
    use std::io::Write;

    // Tests the strict WORD;SCORE line format
    // Verified by accepting lowercase words
    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("CRANE;80"), Some(("CRANE".to_string(), 80)));
        assert_eq!(parse_entry("A;1"), Some(("A".to_string(), 1)));

        assert_eq!(parse_entry("crane;80"), None);
        assert_eq!(parse_entry("CRANE;0"), None);
        assert_eq!(parse_entry("CRANE;101"), None);
        assert_eq!(parse_entry("CRANE;"), None);
        assert_eq!(parse_entry("CRANE"), None);
        assert_eq!(parse_entry(";80"), None);
        assert_eq!(parse_entry("CR ANE;80"), None);
    }

    // Tests comments and blanks are ignored while bad lines are counted
    // Verified by counting comment lines as skipped
    #[test]
    fn test_parse_text() {
        let source = parse("# header\n\nCRANE;80\nbad line\nTRACE;90\nWORD;x\n");
        assert_eq!(source.entries.len(), 2);
        assert_eq!(source.skipped_lines, 2);
        assert_eq!(source.entries.first().map(|(word, _)| word.as_str()), Some("CRANE"));
    }

    // Tests loading a real file end to end into an index
    // Verified by dropping the score when building entries
    #[test]
    fn test_load_from_file() {
        let mut file = match tempfile::NamedTempFile::new() {
            Ok(file) => file,
            Err(error) => unreachable!("temp file must be created: {error}"),
        };
        if writeln!(file, "# test dictionary\nCRANE;80\nCRANE;60\nAT;30").is_err() {
            unreachable!("temp file must be writable");
        }

        let source = match load(file.path()) {
            Ok(source) => source,
            Err(error) => unreachable!("load must succeed: {error}"),
        };
        assert_eq!(source.entries.len(), 3);

        let index = match load_index(file.path()) {
            Ok(index) => index,
            Err(error) => unreachable!("load_index must succeed: {error}"),
        };
        assert_eq!(index.score("CRANE"), 80, "duplicates keep the max score");
        assert_eq!(index.word_count(), 2);
    }

    // Tests a missing file surfaces as a dictionary load error
    // Verified by mapping read failures to FileSystem
    #[test]
    fn test_missing_file_error() {
        let missing = std::path::Path::new("/nonexistent/words.txt");
        match load(missing) {
            Err(error @ EngineError::DictionaryLoad { .. }) => {
                assert_eq!(error.kind(), "dictionary_load");
            }
            other => unreachable!("expected DictionaryLoad, got {other:?}"),
        }
    }
}

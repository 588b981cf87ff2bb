//! Enforces the one-to-one mirror between src modules and unit test files

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    /// Relative paths of every `.rs` file under `root`, excluding entry
    /// points and module organization files
    fn module_files(root: &Path) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let Ok(reader) = std::fs::read_dir(&dir) else {
                continue;
            };

            for entry in reader.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };
                if !name.ends_with(".rs")
                    || name == "lib.rs"
                    || name == "main.rs"
                    || name == "mod.rs"
                {
                    continue;
                }

                if let Ok(relative) = path.strip_prefix(root) {
                    found.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }

        found
    }

    // Tests every src module has a unit test counterpart and vice versa
    // Verified by deleting one unit test file
    #[test]
    fn test_src_and_unit_tests_mirror() {
        let src_files = module_files(Path::new("src"));
        let test_files = module_files(Path::new("tests/unit"));

        assert!(!src_files.is_empty(), "src must contain module files");

        let missing_tests: Vec<&String> = src_files.difference(&test_files).collect();
        assert!(
            missing_tests.is_empty(),
            "src files missing unit test counterparts: {missing_tests:?}"
        );

        let orphaned_tests: Vec<&String> = test_files.difference(&src_files).collect();
        assert!(
            orphaned_tests.is_empty(),
            "unit tests without src counterparts: {orphaned_tests:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Files that organize modules or host an entry point carry no logic of
    // their own and need no mirrored test file
    fn is_structural(relative: &str) -> bool {
        relative == "lib.rs" || relative.ends_with("main.rs") || relative.ends_with("mod.rs")
    }

    fn rust_files_under(root: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut found = BTreeSet::new();
        if !root.is_dir() {
            return Ok(found);
        }
        walk(root, root, &mut found)?;
        Ok(found)
    }

    fn walk(dir: &Path, root: &Path, found: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                walk(&path, root, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(root)
                    .map_err(|_| io::Error::other("path escaped the scanned root"))?;
                found.insert(relative.to_string_lossy().to_string());
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_source_file_has_a_mirrored_unit_test() {
        let sources = rust_files_under(Path::new("src")).unwrap_or_default();
        let mirrors = rust_files_under(Path::new("tests/unit")).unwrap_or_default();
        assert!(!sources.is_empty(), "no source files found under src");

        let missing: Vec<&String> = sources
            .iter()
            .filter(|relative| !is_structural(relative) && !mirrors.contains(*relative))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without a tests/unit mirror:\n{}",
            missing
                .iter()
                .map(|relative| format!("  src/{relative} -> tests/unit/{relative}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_mirrors_a_source_file() {
        let sources = rust_files_under(Path::new("src")).unwrap_or_default();
        let mirrors = rust_files_under(Path::new("tests/unit")).unwrap_or_default();

        let orphaned: Vec<&String> = mirrors
            .iter()
            .filter(|relative| !is_structural(relative) && !sources.contains(*relative))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files with no source counterpart:\n{}",
            orphaned
                .iter()
                .map(|relative| format!("  tests/unit/{relative} -> src/{relative}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let files = rust_files_under(Path::new("tests")).unwrap_or_default();
        assert!(!files.is_empty(), "no test files found under tests");

        let empty: Vec<String> = files
            .iter()
            .filter(|relative| !is_structural(relative))
            .filter_map(|relative| {
                let path = Path::new("tests").join(relative);
                match fs::read_to_string(&path) {
                    Ok(content) if !content.contains("#[test]") => {
                        Some(format!("  tests/{relative}"))
                    }
                    _ => None,
                }
            })
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}

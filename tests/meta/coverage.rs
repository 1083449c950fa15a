//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Relative paths of every `.rs` file and directory below `root`
    fn tree(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        walk(root, root, &mut paths)?;
        Ok(paths)
    }

    fn walk(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, root, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn is_wiring(path: &str) -> bool {
        path == "lib.rs" || path == "main.rs" || path.ends_with("mod.rs")
    }

    fn report(header: &str, lines: &[String]) -> String {
        format!("{header}:\n{}", lines.join("\n"))
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let Ok(src) = tree(Path::new(SRC_DIR)) else {
            unreachable!("src directory should be readable");
        };
        let unit = tree(Path::new(UNIT_DIR)).unwrap_or_default();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_wiring(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let Ok(src) = tree(Path::new(SRC_DIR)) else {
            unreachable!("src directory should be readable");
        };
        let unit = tree(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !is_wiring(path) && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without a source file", &orphaned)
        );
    }

    // Tests that no unit test file is silently left out of the test binary
    #[test]
    fn test_unit_modules_are_declared() {
        let Ok(unit) = tree(Path::new(UNIT_DIR)) else {
            unreachable!("unit test directory should be readable");
        };

        let mut undeclared = Vec::new();
        for path in unit.iter().filter(|path| !is_wiring(path)) {
            let (parent, name) = path.rsplit_once('/').unwrap_or(("", path.as_str()));
            let module = name.trim_end_matches(".rs");
            let mod_file = Path::new(UNIT_DIR).join(parent).join("mod.rs");
            let declared = fs::read_to_string(&mod_file)
                .is_ok_and(|content| content.lines().any(|l| l.trim() == format!("mod {module};")));

            if !declared {
                undeclared.push(format!("  - mod {module}; missing from {}", mod_file.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Unit test modules not declared", &undeclared)
        );
    }

    #[test]
    fn test_test_files_contain_tests() {
        let Ok(files) = tree(Path::new("tests")) else {
            unreachable!("tests directory should be readable");
        };

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}

//! Checks that the unit test tree mirrors the library's module list
//!
//! `MIRRORED_MODULES` is the single list of leaf modules. Each one must exist
//! as `src/<module>.rs`, be declared by its parent `mod.rs`, and have a
//! matching `tests/unit/<module>.rs` that is declared by the unit target and
//! contains at least one test. `src/lib.rs` and `src/main.rs` are entry points
//! and are exempt; `tests/unit/main.rs` is the unit target's entry point.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::error::Error;
    use std::fs;
    use std::path::{Path, PathBuf};

    type TestResult = Result<(), Box<dyn Error>>;

    const MIRRORED_MODULES: &[&str] = &[
        "color/summary",
        "io/cli",
        "io/configuration",
        "io/diagnostics",
        "io/error",
        "io/image",
        "io/progress",
        "library/matcher",
        "library/tiles",
        "mosaic/block",
        "mosaic/builder",
        "mosaic/coverage",
        "mosaic/grid",
    ];

    const SOURCE_ENTRY_POINTS: &[&str] = &["lib", "main"];
    const UNIT_ENTRY_POINTS: &[&str] = &["main"];

    fn expected_modules() -> BTreeSet<String> {
        MIRRORED_MODULES.iter().map(ToString::to_string).collect()
    }

    // Module paths of every `.rs` file below `root`, minus `mod.rs` files and
    // the given top-level entry points
    fn leaf_modules(
        root: &Path,
        entry_points: &[&str],
    ) -> Result<BTreeSet<String>, Box<dyn Error>> {
        let mut modules = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                if path.extension().and_then(|ext| ext.to_str()) != Some("rs")
                    || path.file_name().and_then(|name| name.to_str()) == Some("mod.rs")
                {
                    continue;
                }

                let module = path
                    .strip_prefix(root)?
                    .with_extension("")
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                if !entry_points.contains(&module.as_str()) {
                    modules.insert(module);
                }
            }
        }

        Ok(modules)
    }

    fn parent_declaration(root: &Path, module: &str) -> Option<(PathBuf, String)> {
        let (parent, name) = module.rsplit_once('/')?;
        Some((root.join(parent).join("mod.rs"), name.to_string()))
    }

    fn describe(modules: &BTreeSet<String>) -> String {
        modules
            .iter()
            .map(|module| format!("  - {module}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests the source tree holds exactly the listed modules
    #[test]
    fn test_source_tree_matches_module_list() -> TestResult {
        let found = leaf_modules(Path::new("src"), SOURCE_ENTRY_POINTS)?;
        let expected = expected_modules();

        let unlisted: BTreeSet<_> = found.difference(&expected).cloned().collect();
        let missing: BTreeSet<_> = expected.difference(&found).cloned().collect();
        assert!(
            unlisted.is_empty() && missing.is_empty(),
            "src/ differs from the module list\nunlisted:\n{}\nmissing:\n{}",
            describe(&unlisted),
            describe(&missing)
        );
        Ok(())
    }

    // Tests every listed module has a unit test file and there are no orphans
    #[test]
    fn test_unit_tree_matches_module_list() -> TestResult {
        let found = leaf_modules(Path::new("tests/unit"), UNIT_ENTRY_POINTS)?;
        let expected = expected_modules();

        let orphaned: BTreeSet<_> = found.difference(&expected).cloned().collect();
        let untested: BTreeSet<_> = expected.difference(&found).cloned().collect();
        assert!(
            orphaned.is_empty() && untested.is_empty(),
            "tests/unit/ differs from the module list\norphaned:\n{}\nuntested:\n{}",
            describe(&orphaned),
            describe(&untested)
        );
        Ok(())
    }

    // Tests each listed module is declared by its parent in both trees
    #[test]
    fn test_modules_declared_by_parents() -> TestResult {
        let mut undeclared = BTreeSet::new();

        for root in ["src", "tests/unit"] {
            for module in MIRRORED_MODULES {
                let Some((parent, name)) = parent_declaration(Path::new(root), module) else {
                    undeclared.insert(format!("{root}/{module} (no parent)"));
                    continue;
                };
                let declaration = format!("pub mod {name};");
                let declared = fs::read_to_string(&parent)?
                    .lines()
                    .any(|line| line.trim() == declaration);
                if !declared {
                    undeclared.insert(format!("{root}/{module} in {}", parent.display()));
                }
            }
        }

        assert!(
            undeclared.is_empty(),
            "modules not declared by their parent:\n{}",
            describe(&undeclared)
        );
        Ok(())
    }

    // Tests each unit test file actually defines tests
    #[test]
    fn test_unit_files_contain_tests() -> TestResult {
        let mut empty = BTreeSet::new();

        for module in MIRRORED_MODULES {
            let path = Path::new("tests/unit").join(format!("{module}.rs"));
            if path.is_file() && !fs::read_to_string(&path)?.contains("#[test]") {
                empty.insert((*module).to_string());
            }
        }

        assert!(
            empty.is_empty(),
            "unit test files without any #[test]:\n{}",
            describe(&empty)
        );
        Ok(())
    }
}

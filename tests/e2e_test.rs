/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PACKAGE_LIST: &str = "\
name,version,directory,repository,summary,from package.json,from license,from readme
react,18.2.0,node_modules/react,https://github.com/facebook/react,React,MIT,,
zod,3.22.4,node_modules/zod,https://github.com/colinhacks/zod,Zod,MIT,,
";

const REPORT: &str = "\
name,license,license_url
zod,MIT License,https://github.com/colinhacks/zod/blob/main/LICENSE
react,MIT License,https://github.com/facebook/react/blob/main/LICENSE
";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("license-page-generator")
            .arg("--help")
            .assert()
            .code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("license-page-generator")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("license-page-generator").assert().code(2);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("license-page-generator")
            .args(["markdown", "output.csv", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Non-numeric attempt count
    #[test]
    fn test_exit_code_invalid_max_attempts() {
        cargo_bin_cmd!("license-page-generator")
            .args(["resolve", "packages.csv", "--max-attempts", "abc"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - package list does not exist
    #[test]
    fn test_exit_code_missing_package_list() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["resolve", "missing.csv", "--no-cache"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("missing.csv"));
    }

    /// Exit code 3: Application error - report does not exist
    #[test]
    fn test_exit_code_missing_report() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["markdown", "missing.csv"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - row with too few columns
    #[test]
    fn test_exit_code_short_row() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "packages.csv",
            "name,version,directory,repository,summary,a,b,c\nreact,18.2.0\n",
        );
        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args([
                "resolve",
                "packages.csv",
                "--input-encoding",
                "utf-8",
                "--no-cache",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Line 2"));
    }

    /// Exit code 3: Application error - unknown encoding label
    #[test]
    fn test_exit_code_unknown_encoding() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "packages.csv", PACKAGE_LIST);
        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args([
                "resolve",
                "packages.csv",
                "--input-encoding",
                "klingon",
                "--no-cache",
            ])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - zero attempts
    #[test]
    fn test_exit_code_zero_attempts() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "packages.csv", PACKAGE_LIST);
        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["resolve", "packages.csv", "--max-attempts", "0"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("max_attempts"));
    }
}

mod resolve_tests {
    use super::*;

    /// Every package is already in the report, so the run finishes without any lookup
    #[test]
    fn test_resolve_with_complete_report_is_noop() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "packages.csv", PACKAGE_LIST);
        let report = write_file(dir.path(), "output.csv", REPORT);

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args([
                "resolve",
                "packages.csv",
                "--input-encoding",
                "utf-8",
                "--no-cache",
                "--registry-delay",
                "0",
            ])
            .assert()
            .code(0);

        assert_eq!(fs::read_to_string(report).unwrap(), REPORT);
        assert!(!dir
            .path()
            .join(".license-page-generator-cache.json")
            .exists());
    }

    /// The report location can be moved with -o
    #[test]
    fn test_resolve_with_custom_report_path() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "packages.csv", PACKAGE_LIST);
        let report = write_file(dir.path(), "licenses.csv", REPORT);

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args([
                "resolve",
                "packages.csv",
                "-o",
                "licenses.csv",
                "--input-encoding",
                "utf-8",
                "--no-cache",
            ])
            .assert()
            .code(0);

        assert_eq!(fs::read_to_string(report).unwrap(), REPORT);
        assert!(!dir.path().join("output.csv").exists());
    }
}

mod markdown_tests {
    use super::*;

    #[test]
    fn test_markdown_to_stdout() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "output.csv", REPORT);

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["markdown", "output.csv"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with(
                "- react: [MIT License](https://github.com/facebook/react/blob/main/LICENSE)\n\
                 - zod: [MIT License](https://github.com/colinhacks/zod/blob/main/LICENSE)\n",
            ))
            .stdout(predicate::str::contains("license-page-generator"));
    }

    #[test]
    fn test_markdown_without_attribution() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "output.csv", REPORT);

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["markdown", "output.csv", "-a"])
            .assert()
            .code(0)
            .stdout(
                "- react: [MIT License](https://github.com/facebook/react/blob/main/LICENSE)\n\
                 - zod: [MIT License](https://github.com/colinhacks/zod/blob/main/LICENSE)\n",
            );
    }

    #[test]
    fn test_markdown_default_license_url() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "output.csv",
            "name,license,license_url\n@scope/pkg,ISC,\n",
        );

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args([
                "markdown",
                "output.csv",
                "--no-attribution",
                "-u",
                "https://example.com/licenses/{pkg_name}",
            ])
            .assert()
            .code(0)
            .stdout("- @scope/pkg: [ISC](https://example.com/licenses/@scope/pkg)\n");
    }

    #[test]
    fn test_markdown_to_file() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "output.csv", REPORT);

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["markdown", "output.csv", "-a", "-o", "LICENSES.md"])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        let page = fs::read_to_string(dir.path().join("LICENSES.md")).unwrap();
        assert!(page.starts_with("- react: [MIT License]"));
        assert_eq!(page.lines().count(), 2);
    }

    #[test]
    fn test_markdown_empty_report() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "output.csv", "name,license,license_url\n");

        cargo_bin_cmd!("license-page-generator")
            .current_dir(dir.path())
            .args(["markdown", "output.csv", "-a"])
            .assert()
            .code(0)
            .stdout("");
    }
}

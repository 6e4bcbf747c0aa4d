use std::path::{Path, PathBuf};

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

const DOMAIN_PACKAGE: &str = "guildhall-domain";

/// Crates the domain must never depend on directly.
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "tokio",
    "async-std",
    "async-trait",
    "tracing",
    "tracing-subscriber",
    "log",
    "dotenvy",
    "dashmap",
];

/// Source patterns that read the wall clock or write logs.
const FORBIDDEN_DOMAIN_PATTERNS: &[(&str, &str)] = &[
    (r"\bUtc::now\s*\(", "reads the wall clock (Utc::now)"),
    (r"\bLocal::now\s*\(", "reads the wall clock (Local::now)"),
    (r"\bSystemTime::now\s*\(", "reads the wall clock (SystemTime::now)"),
    (r"\bInstant::now\s*\(", "reads the wall clock (Instant::now)"),
    (r"\btracing::", "logs through tracing"),
    (r"\b(println|eprintln|dbg)!", "prints to the console"),
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("package {DOMAIN_PACKAGE} not found in workspace"))?;

    let mut violations = forbidden_dependencies(domain);

    let src_dir = domain
        .manifest_path
        .parent()
        .context("domain manifest has no parent directory")?
        .join("src");
    let rules = compile_rules()?;
    for file in rust_files(&src_dir)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line, reason) in scan_source(&source, &rules) {
            violations.push(format!("{}:{line}: {reason}", file.display()));
        }
    }

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_PACKAGE} is clean");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

/// Normal (non-dev, non-build) dependencies that are on the deny list.
fn forbidden_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| dep.kind.is_none())
        .filter(|dep| FORBIDDEN_DOMAIN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on {}", package.name, dep.name))
        .collect()
}

fn compile_rules() -> anyhow::Result<Vec<(Regex, &'static str)>> {
    FORBIDDEN_DOMAIN_PATTERNS
        .iter()
        .map(|(pattern, reason)| {
            Regex::new(pattern)
                .map(|re| (re, *reason))
                .with_context(|| format!("compiling pattern {pattern}"))
        })
        .collect()
}

/// Line numbers (1-based) and reasons for every forbidden pattern outside
/// `//` comments and `#[cfg(test)]` modules.
fn scan_source(source: &str, rules: &[(Regex, &'static str)]) -> Vec<(usize, &'static str)> {
    let mut hits = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        // Unit tests sit at the bottom of each file.
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        for (re, reason) in rules {
            if re.is_match(line) {
                hits.push((index + 1, *reason));
            }
        }
    }
    hits
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<(Regex, &'static str)> {
        compile_rules().unwrap()
    }

    #[test]
    fn clean_source_passes() {
        let source = "pub fn is_in_future(date: NaiveDate, today: NaiveDate) -> bool {\n    date > today\n}\n";
        assert!(scan_source(source, &rules()).is_empty());
    }

    #[test]
    fn wall_clock_and_logging_flagged() {
        let source = "let today = Utc::now().date_naive();\ntracing::info!(\"hi\");\nprintln!(\"x\");\n";
        let hits = scan_source(source, &rules());
        let lines: Vec<usize> = hits.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn comments_and_test_modules_ignored() {
        let source = "// never call Utc::now() here\nfn f() {}\n#[cfg(test)]\nmod tests {\n    fn t() { Utc::now(); }\n}\n";
        assert!(scan_source(source, &rules()).is_empty());
    }

    #[test]
    fn dev_dependencies_allowed() {
        let package = Package {
            name: DOMAIN_PACKAGE.into(),
            manifest_path: PathBuf::from("crates/domain/Cargo.toml"),
            dependencies: vec![
                Dependency {
                    name: "tracing".into(),
                    kind: Some("dev".into()),
                },
                Dependency {
                    name: "tokio".into(),
                    kind: None,
                },
                Dependency {
                    name: "chrono".into(),
                    kind: None,
                },
            ],
        };
        assert_eq!(
            forbidden_dependencies(&package),
            vec!["guildhall-domain depends on tokio".to_string()]
        );
    }
}

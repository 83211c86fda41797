//! Built-in fixture suites.
//!
//! A suite is a fixed manifest of fixture files to produce under a common
//! `cases/<dir>/` directory, with an empty `results/<dir>/` directory
//! created alongside for the tool under test to fill in. The two built-in
//! suites used to be two separately maintained generator scripts; they are
//! kept here as configuration presets of the one generator.

use std::fs;
use std::path::Path;

use arxmlgen_model::IndentStyle;
use rand::rngs::SmallRng;
use tracing::info;

use crate::{Branching, FixtureSpec, GenError, write_fixture};

/// A run of same-shaped fixtures: `<prefix>1.arxml` .. `<prefix>N.arxml`.
#[derive(Debug, Clone)]
struct FixtureGroup {
    prefix: &'static str,
    count: usize,
    spec: FixtureSpec,
}

/// A named manifest of fixture files sharing one suite directory.
#[derive(Debug, Clone)]
pub struct Suite {
    name: &'static str,
    dir: &'static str,
    groups: Vec<FixtureGroup>,
}

impl Suite {
    /// Size- and depth-focused fixtures, all pretty-printed.
    pub fn structural() -> Self {
        let group = |prefix, count, max_depth, min, max| FixtureGroup {
            prefix,
            count,
            spec: FixtureSpec {
                max_depth,
                branching: Branching::new(min, max),
                style: IndentStyle::Normal,
            },
        };
        Self {
            name: "structural",
            dir: "6.1",
            groups: vec![
                group("small", 2, 3, 2, 3),
                group("med", 5, 5, 3, 5),
                group("large", 10, 7, 4, 7),
                group("deep", 2, 10, 2, 3),
            ],
        }
    }

    /// Whitespace-focused fixtures exercising the `none` and `mixed` styles.
    pub fn formatting() -> Self {
        let group = |prefix, count, max_depth, branching, style| FixtureGroup {
            prefix,
            count,
            spec: FixtureSpec {
                max_depth,
                branching,
                style,
            },
        };
        Self {
            name: "formatting",
            dir: "6.2",
            groups: vec![
                group(
                    "no_indent",
                    2,
                    3,
                    Branching::DEFAULT,
                    IndentStyle::None,
                ),
                group(
                    "mixed_indent",
                    2,
                    5,
                    Branching::DEFAULT,
                    IndentStyle::Mixed,
                ),
                group(
                    "large",
                    3,
                    7,
                    Branching::new(4, 7),
                    IndentStyle::Normal,
                ),
                group(
                    "deep",
                    2,
                    10,
                    Branching::new(2, 3),
                    IndentStyle::Normal,
                ),
            ],
        }
    }

    /// All built-in suites, in generation order.
    pub fn builtin() -> Vec<Suite> {
        vec![Suite::structural(), Suite::formatting()]
    }

    /// Looks up a built-in suite by name.
    pub fn by_name(name: &str) -> Option<Suite> {
        Suite::builtin().into_iter().find(|s| s.name == name)
    }

    /// Returns the suite name used on the command line.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the suite directory under `cases/` and `results/`.
    pub fn dir(&self) -> &'static str {
        self.dir
    }

    /// Flattens the manifest into `(file name, spec)` entries.
    pub fn entries(&self) -> Vec<(String, FixtureSpec)> {
        self.groups
            .iter()
            .flat_map(|group| {
                (1..=group.count).map(move |i| {
                    (format!("{}{i}.arxml", group.prefix), group.spec)
                })
            })
            .collect()
    }
}

/// Runs one suite: ensures the case/result directory pair exists under
/// `root`, then generates every manifest entry in order.
///
/// The first failed file aborts the suite; there is no retry and no
/// partial-result cleanup.
pub fn run_suite(
    suite: &Suite,
    root: &Path,
    rng: &mut SmallRng,
) -> Result<(), GenError> {
    let case_dir = root.join("cases").join(suite.dir());
    let result_dir = root.join("results").join(suite.dir());
    fs::create_dir_all(&case_dir)?;
    fs::create_dir_all(&result_dir)?;

    for (file_name, spec) in suite.entries() {
        let path = case_dir.join(&file_name);
        info!(
            file = %path.display(),
            max_depth = spec.max_depth,
            style = %spec.style,
            "generating fixture"
        );
        write_fixture(&path, &spec, rng)?;
    }

    info!(suite = suite.name(), cases = %case_dir.display(), "suite complete");
    Ok(())
}

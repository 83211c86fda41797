//! Randomized ARXML fixture generation.
//!
//! This crate turns a [`FixtureSpec`] (depth, branching range, indent style)
//! into an `.arxml` file on disk: the random tree builder grows a document
//! body under the fixed `AUTOSAR` root, the model crate renders it in the
//! requested whitespace style, and the writer puts it at the target path.
//! The [`suite`] module bundles the built-in fixture manifests and the
//! batch driver that walks them.
//!
//! ## Usage
//!
//! ```no_run
//! use arxmlgen_gen::{Branching, FixtureSpec, rng_from_seed, write_fixture};
//! use arxmlgen_model::IndentStyle;
//!
//! let spec = FixtureSpec {
//!     max_depth: 3,
//!     branching: Branching::new(2, 3),
//!     style: IndentStyle::Normal,
//! };
//! let mut rng = rng_from_seed(Some(42));
//! write_fixture("cases/6.1/small1.arxml".as_ref(), &spec, &mut rng).unwrap();
//! ```

mod builder;
mod error;
pub mod suite;
mod writer;

use std::path::Path;

use arxmlgen_model::IndentStyle;
use arxmlgen_model::render::render;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[doc(inline)]
pub use crate::builder::{Branching, attach_containers, build_document};
#[doc(inline)]
pub use crate::error::GenError;
#[doc(inline)]
pub use crate::suite::{Suite, run_suite};
#[doc(inline)]
pub use crate::writer::write_text;

/// Shape of one generated fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSpec {
    /// Maximum container nesting depth below the root.
    pub max_depth: usize,
    /// Inclusive per-level branching range.
    pub branching: Branching,
    /// Whitespace style of the rendered file.
    pub style: IndentStyle,
}

/// Creates the generator RNG, seeded from entropy when no seed is given.
///
/// A fixed seed makes a whole run reproducible: the same seed and the same
/// manifest produce byte-identical files.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Generates one fixture document and renders it to text.
pub fn generate_fixture(
    spec: &FixtureSpec,
    rng: &mut SmallRng,
) -> Result<String, GenError> {
    let doc = build_document(spec.max_depth, spec.branching, rng);
    Ok(render(&doc, spec.style)?)
}

/// Generates one fixture and writes it to `path`, creating missing parent
/// directories.
pub fn write_fixture(
    path: &Path,
    spec: &FixtureSpec,
    rng: &mut SmallRng,
) -> Result<(), GenError> {
    let text = generate_fixture(spec, rng)?;
    write_text(path, &text)
}

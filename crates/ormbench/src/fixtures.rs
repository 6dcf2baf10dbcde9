//! Benchmark data generation.
//!
//! All row content is drawn from an explicitly seeded RNG so runs are
//! reproducible: the same seed and row counts produce identical data.

use rand::rngs::StdRng;
use rand::Rng;

/// Range of numeric suffixes for generated names and titles.
const SUFFIX_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// One author to insert, together with the single book it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSpec {
    pub name: String,
    pub book_title: String,
}

/// Generate `count` authors with randomly suffixed names, each owning one
/// book with a randomly suffixed title.
pub fn generate_authors(count: usize, rng: &mut StdRng) -> Vec<AuthorSpec> {
    (0..count)
        .map(|_| AuthorSpec {
            name: format!("Author {}", rng.gen_range(SUFFIX_RANGE)),
            book_title: format!("Book {}", rng.gen_range(SUFFIX_RANGE)),
        })
        .collect()
}

/// Generate a replacement author name for batch updates.
pub fn updated_name(rng: &mut StdRng) -> String {
    format!("Updated {}", rng.gen_range(SUFFIX_RANGE))
}

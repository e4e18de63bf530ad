//! Star name corpus

use std::collections::HashSet;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerationError;

/// Pool of unique star names, loaded from a newline-delimited text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Load a corpus. Lines are trimmed, blank lines and repeats are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GenerationError::MissingAsset {
            path: path.to_path_buf(),
            source,
        })?;

        let pool = Self::from_names(text.lines());
        if pool.is_empty() {
            return Err(GenerationError::MalformedAsset {
                path: path.to_path_buf(),
                reason: "no star names found".into(),
            });
        }
        Ok(pool)
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty() && seen.insert(n.clone()))
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Draw `count` distinct names without replacement.
    pub fn draw(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<String>, GenerationError> {
        if count > self.names.len() {
            return Err(GenerationError::ExhaustedNamePool {
                available: self.names.len(),
                required: count,
            });
        }
        let mut shuffled = self.names.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        Ok(shuffled)
    }
}

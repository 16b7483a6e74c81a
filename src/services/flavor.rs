//! Random flavor-text selection.
//!
//! Picks one line uniformly at random from a line sequence with a size-one
//! reservoir, so a file is scanned exactly once without buffering it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};

/// Select one item uniformly at random from `items`.
///
/// Size-one reservoir: the `n`-th item (zero-based) replaces the current
/// selection with probability `1 / (n + 1)`. Returns `None` for an empty
/// sequence. The sequence length does not need to be known up front.
pub fn reservoir_sample<T, I>(items: I, rng: &mut impl Rng) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    let mut selected = None;
    for (seen, item) in items.into_iter().enumerate() {
        if rng.random_range(0..=seen) == 0 {
            selected = Some(item);
        }
    }
    selected
}

/// Read one line uniformly at random from the file at `path`.
///
/// # Returns
/// * `Ok(line)` with a uniformly selected line
/// * `Err(Error::MissingAsset)` if the file does not exist
/// * `Err(Error::EmptyAsset)` if the file has no lines
pub fn random_line(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::MissingAsset {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let mut rng = rand::rng();
    let mut selected = None;
    let mut seen = 0usize;
    for line in reader.lines() {
        let line = line?;
        if rng.random_range(0..=seen) == 0 {
            selected = Some(line);
        }
        seen += 1;
    }
    debug!("sampled one of {} lines from {}", seen, path.display());

    selected.ok_or_else(|| Error::EmptyAsset {
        path: path.to_path_buf(),
    })
}

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Reads one repository reference per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_repo_references<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut references = vec![];
    for line in reader.lines() {
        let line = line?;
        let reference = line.trim();
        if reference.is_empty() || reference.starts_with('#') {
            continue;
        }
        references.push(reference.to_owned());
    }
    Ok(references)
}

pub fn load_repo_references(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let references = read_repo_references(BufReader::new(file))
        .with_context(|| format!("Could not read {}", path.display()))?;
    log::debug!("Read {} repositories from {}", references.len(), path.display());
    Ok(references)
}

use std::path::{Path, PathBuf};

/// Roots tried in order so the app finds `assets/` whether it is launched
/// from the workspace, a crate directory, or `target/<profile>`.
const ASSET_ROOTS: [&str; 3] = ["assets", "../assets", "../../assets"];

pub fn candidates(relative: &str) -> Vec<PathBuf> {
    ASSET_ROOTS
        .iter()
        .map(|root| Path::new(root).join(relative))
        .collect()
}

/// Bytes of the first candidate that exists.
pub fn read_asset(relative: &str) -> Option<(PathBuf, Vec<u8>)> {
    candidates(relative)
        .into_iter()
        .find_map(|path| std::fs::read(&path).ok().map(|bytes| (path, bytes)))
}

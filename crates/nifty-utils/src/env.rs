//! `.env` file loading

use std::path::{Path, PathBuf};

/// Load variables from a `.env` file in the current directory or its parents.
///
/// Variables already present in the process environment are left untouched.
/// Returns the path that was loaded, `Ok(None)` when there is no `.env` file,
/// and an error when the file exists but cannot be read or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    skip_missing(dotenvy::dotenv())
}

/// Load variables from an explicit `.env` path; a missing file is `Ok(None)`.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    skip_missing(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn skip_missing(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

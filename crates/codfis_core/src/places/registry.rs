//! Process-wide place tables installed by the embedding application.
//!
//! # Invariants
//! - Installation happens at most once; re-installing identical tables is a
//!   no-op, different tables are rejected.
//! - Installed tables are never mutated.

use crate::places::directory::{PlaceDataError, PlaceDirectory};
use log::info;
use once_cell::sync::OnceCell;

static INSTALLED: OnceCell<PlaceDirectory> = OnceCell::new();

/// Installs the tables used by the crate-level `encode`/`decode`/`is_valid`.
///
/// # Errors
/// - `AlreadyInstalled` when different tables were installed earlier.
pub fn install_directory(
    directory: PlaceDirectory,
) -> Result<&'static PlaceDirectory, PlaceDataError> {
    let mut fresh = false;
    let installed = INSTALLED.get_or_init(|| {
        fresh = true;
        directory.clone()
    });
    if !fresh && *installed != directory {
        return Err(PlaceDataError::AlreadyInstalled);
    }
    if fresh {
        info!(
            "event=places_installed module=places status=ok municipalities={} countries={}",
            installed.municipalities().len(),
            installed.countries().len()
        );
    }
    Ok(installed)
}

/// Installed tables.
///
/// # Errors
/// - `NotInstalled` before [`install_directory`] succeeded.
pub fn installed_directory() -> Result<&'static PlaceDirectory, PlaceDataError> {
    INSTALLED.get().ok_or(PlaceDataError::NotInstalled)
}

//! Binary-map persistence: the whole keyed collection as one MessagePack blob

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Read a keyed collection from a binary blob. A missing or empty file reads
/// as an empty collection; anything else that fails to decode is a format
/// error.
pub(crate) fn read_map<T: DeserializeOwned>(path: &Path) -> AppResult<HashMap<Uuid, T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(error) => return Err(error.into()),
    };
    if bytes.is_empty() {
        return Ok(HashMap::new());
    }
    rmp_serde::from_slice(&bytes)
        .map_err(|error| AppError::DataFormat(format!("{}: {}", path.display(), error)))
}

/// Serialize the whole keyed collection into one blob
pub(crate) fn write_map<T: Serialize>(path: &Path, map: &HashMap<Uuid, T>) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = rmp_serde::to_vec(map)
        .map_err(|error| AppError::DataFormat(format!("{}: {}", path.display(), error)))?;
    fs::write(path, bytes)?;
    Ok(())
}

// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

/// The path that stands for standard input.
const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input '{}' is unavailable", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the whole of `path` into memory, or standard input if `path` is `-`.
pub fn read_text(path: &Path) -> Result<Vec<u8>, SourceError> {
    let data = if path.as_os_str() == STDIN_PATH {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data).map(|_| data)
    } else {
        fs::read(path)
    }
    .map_err(|source| SourceError::Unavailable {
        path: path.to_owned(),
        source,
    })?;

    debug!(path = %path.display(), len = data.len(), "read input");

    Ok(data)
}

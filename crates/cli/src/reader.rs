// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated store reading.
//!
//! Credential stores are edited by hand and stay small. Anything over
//! [`MAX_STORE_SIZE`] is rejected before it is read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Maximum store size to read (1MB).
pub const MAX_STORE_SIZE: u64 = 1024 * 1024;

/// Size-gated store reader.
pub struct StoreReader {
    /// Maximum file size to read.
    max_size: u64,
}

impl Default for StoreReader {
    fn default() -> Self {
        Self {
            max_size: MAX_STORE_SIZE,
        }
    }
}

impl StoreReader {
    /// Create a new reader with the default size cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a store file as UTF-8 text, checking the size limit first.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<String> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        let mut file = File::open(path).map_err(io_err)?;
        let mut content = String::with_capacity(size as usize);
        file.read_to_string(&mut content).map_err(io_err)?;

        tracing::trace!(path = %path.display(), size, "read credential store");
        Ok(content)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;

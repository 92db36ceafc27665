//! Object file format: a raw concatenation of 32-bit signed words in host byte order,
//! one per instruction/`data` directive, in emission order. No header, no padding.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("could not open object file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write object file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed object file: size {0} is not a multiple of 4 bytes")]
    TruncatedWord(usize),
}

/// Read an object file into a sequence of words, in host byte order.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<i32>, ObjectError> {
    let path_ref = path.as_ref();
    let mut file = File::open(path_ref).map_err(|source| ObjectError::Open {
        path: path_ref.display().to_string(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| ObjectError::Open {
        path: path_ref.display().to_string(),
        source,
    })?;
    if bytes.len() % 4 != 0 {
        return Err(ObjectError::TruncatedWord(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| i32::from_ne_bytes(chunk.try_into().unwrap()))
        .collect())
}

/// Write a sequence of words to an object file, in host byte order.
pub fn write_words(path: impl AsRef<Path>, words: &[i32]) -> Result<(), ObjectError> {
    let path_ref = path.as_ref();
    let mut file = File::create(path_ref).map_err(|source| ObjectError::Write {
        path: path_ref.display().to_string(),
        source,
    })?;
    for word in words {
        file.write_all(&word.to_ne_bytes()).map_err(|source| ObjectError::Write {
            path: path_ref.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

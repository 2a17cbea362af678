/*!
    Frame-generation definitions.
*/

use std::path::{Path, PathBuf};

use bytes::Bytes;

use vapour_types::{Error, Result};

/**
    A frame-generation definition: opaque script contents plus the path they
    were loaded from.

    The path doubles as the base path for resolving relative references inside
    the script, so sources can locate assets next to the definition.
*/
#[derive(Clone, Debug)]
pub struct Script {
    contents: Bytes,
    path: PathBuf,
}

impl Script {
    /**
        Create a definition from in-memory contents.

        The contents must be the raw script bytes; an empty buffer is a
        caller-side contract violation and is rejected synchronously.
    */
    pub fn new(contents: impl Into<Bytes>, path: impl Into<PathBuf>) -> Result<Self> {
        let contents = contents.into();
        if contents.is_empty() {
            return Err(Error::invalid_input("script contents must be a non-empty buffer"));
        }
        Ok(Self {
            contents,
            path: path.into(),
        })
    }

    /**
        Load a definition from a file on disk.
    */
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = tokio::fs::read(&path).await?;
        Self::new(contents, path)
    }

    /**
        The raw script contents.
    */
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /**
        The path the script was loaded from.
    */
    pub fn path(&self) -> &Path {
        &self.path
    }
}

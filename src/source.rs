use std::{
    fs::File,
    ops::Deref,
    path::{Path, PathBuf},
};

use log::{debug, info};
use memmap2::Mmap;

use crate::error::{MuncherError, MuncherResult};

/// A read-only memory map of the input file. The mapping is released when
/// the source is dropped.
pub struct FileSource {
    path: PathBuf,
    map: Mmap,
}

impl FileSource {
    pub fn open(path: &Path) -> MuncherResult<Self> {
        let io_error = |source| MuncherError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let len = file.metadata().map_err(io_error)?.len();
        if len == 0 {
            return Err(MuncherError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        // The mapping is only read; concurrent writers to the file are out
        // of our hands, same as for any reader.
        let map = unsafe { Mmap::map(&file) }.map_err(|source| MuncherError::Map {
            path: path.to_path_buf(),
            source,
        })?;
        info!("mapped {} ({} bytes)", path.display(), map.len());

        Ok(Self {
            path: path.to_path_buf(),
            map,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_at(&self, index: usize) -> u8 {
        self.map[index]
    }
}

impl Deref for FileSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.map
    }
}

impl Drop for FileSource {
    fn drop(&mut self) {
        debug!("unmapping {}", self.path.display());
    }
}

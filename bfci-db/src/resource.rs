use crate::StoreError;
use flate2::read::GzDecoder;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A source file handed to the store: a path on disk or a named buffer
/// (assets embedded in the WASM binary).
///
/// Resources are cached by [`Resource::id`]; two resources with the same id
/// are assumed to hold the same bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    File(PathBuf),
    Embedded { name: String, data: Rc<[u8]> },
}

impl Resource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Resource::File(path.into())
    }

    pub fn embedded(name: impl Into<String>, data: &[u8]) -> Self {
        Resource::Embedded {
            name: name.into(),
            data: Rc::from(data),
        }
    }

    /// Cache key for this resource.
    pub fn id(&self) -> String {
        match self {
            Resource::File(path) => format!("file:{}", path.display()),
            Resource::Embedded { name, .. } => format!("embedded:{}", name),
        }
    }

    /// Read the full contents, inflating gzip payloads.
    pub fn read(&self) -> Result<Vec<u8>, StoreError> {
        let raw = match self {
            Resource::File(path) => std::fs::read(path).map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?,
            Resource::Embedded { data, .. } => data.to_vec(),
        };
        if !raw.starts_with(&GZIP_MAGIC) {
            return Ok(raw);
        }
        let mut inflated = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut inflated)
            .map_err(|source| StoreError::Decompress {
                resource: self.to_string(),
                source,
            })?;
        log::info!(
            "[BFCI Debug] resource: inflated {} from {} to {} bytes",
            self,
            raw.len(),
            inflated.len()
        );
        Ok(inflated)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::File(path) => write!(f, "{}", path.display()),
            Resource::Embedded { name, .. } => write!(f, "{}", name),
        }
    }
}

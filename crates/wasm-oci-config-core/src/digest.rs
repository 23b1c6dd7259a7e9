use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::ConfigError;

const ALGORITHM: &str = "sha256";

/// Read size when streaming a component through the hasher.
const CHUNK_SIZE: usize = 1024 * 1024;

/// `<algorithm>:<hex>` digest of a blob, as used in OCI descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    algorithm: &'static str,
    hex: String,
}

impl ContentDigest {
    pub fn algorithm(&self) -> &str {
        self.algorithm
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Stream a reader to its end through SHA-256.
pub fn digest_reader<R: Read>(mut reader: R) -> std::io::Result<ContentDigest> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(ContentDigest {
        algorithm: ALGORITHM,
        hex: hex::encode(hasher.finalize()),
    })
}

/// Hash the bytes of a component file.
pub fn digest_file(path: &Path) -> Result<ContentDigest, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let digest = digest_reader(file).map_err(io_err)?;
    tracing::debug!(path = %path.display(), digest = %digest, "Hashed component");
    Ok(digest)
}

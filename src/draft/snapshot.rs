use crate::draft::payload::DefinitionPayload;
use crate::error::SnapshotError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A locally persisted normalization result: the payload plus the id remap
/// table that produced it. Used to cache builder output between sessions.
#[derive(Serialize, Deserialize, Debug)]
pub struct DraftSnapshot {
    pub payload: DefinitionPayload,
    pub remap: AHashMap<String, String>,
}

impl DraftSnapshot {
    pub fn new(payload: DefinitionPayload, remap: AHashMap<String, String>) -> Self {
        Self { payload, remap }
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes =
            encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let mut file = fs::File::open(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}

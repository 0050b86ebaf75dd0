// Snapshot file layout:
// { "format_version": 1, "checksum": "sha256:…", "faqs": [ … ] }
// checksum covers the compact JSON encoding of `faqs`.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::faq::FaqEntry;
use crate::store::StoreError;
use crate::types::identifiers::Checksum;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqSnapshot {
    pub format_version: u32,
    pub checksum: Checksum,
    pub faqs: Vec<FaqEntry>,
}

pub(crate) fn write_snapshot(path: &Path, faqs: &[FaqEntry]) -> Result<(), StoreError> {
    let body = serde_json::to_vec(faqs)?;
    let snapshot = FaqSnapshot {
        format_version: SNAPSHOT_FORMAT_VERSION,
        checksum: Checksum::from_content(&body),
        faqs: faqs.to_vec(),
    };

    // Write next to the target, then rename over it.
    let temp_path = path.with_extension("json.tmp");
    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
    }
    let written = write_temp(&temp_path, &snapshot)
        .and_then(|()| fs::rename(&temp_path, path).map_err(StoreError::from));
    if written.is_err() {
        // Never leave a half-written temp file behind; the original error is returned.
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_temp(temp_path: &Path, snapshot: &FaqSnapshot) -> Result<(), StoreError> {
    let mut f = fs::File::create(temp_path)?;
    serde_json::to_writer_pretty(&f, snapshot)?;
    f.write_all(b"\n")?;
    f.sync_all()?;
    Ok(())
}

pub(crate) fn read_snapshot(path: &Path) -> Result<FaqSnapshot, StoreError> {
    let f = fs::File::open(path)?;
    let snapshot: FaqSnapshot = serde_json::from_reader(f)?;

    if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(StoreError::UnsupportedFormat(snapshot.format_version));
    }

    // Recompute over the decoded records
    let body = serde_json::to_vec(&snapshot.faqs)?;
    let actual = Checksum::from_content(&body);
    if actual != snapshot.checksum {
        return Err(StoreError::ChecksumMismatch {
            path: path.to_path_buf(),
            recorded: snapshot.checksum.as_str().to_string(),
            actual: actual.as_str().to_string(),
        });
    }

    Ok(snapshot)
}

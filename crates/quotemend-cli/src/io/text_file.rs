// crates/quotemend-cli/src/io/text_file.rs

use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Raw bytes plus their UTF-8 view. No transcoding is attempted.
pub struct LoadedText {
    pub crc32: u32,
    pub text: String,
}

pub fn read_text(path: &Path) -> anyhow::Result<LoadedText> {
    let bytes = std::fs::read(path).with_context(|| format!("read input {}", path.display()))?;
    let crc32 = crc32(&bytes);
    let text = String::from_utf8(bytes)
        .with_context(|| format!("input {} is not valid UTF-8", path.display()))?;
    Ok(LoadedText { crc32, text })
}

/// Write through a temp file in the destination directory, then rename over
/// `dest`. Keeps the permissions of an existing `dest`.
pub fn write_atomic(dest: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("write temp file for {}", dest.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync temp file for {}", dest.display()))?;

    if let Ok(meta) = std::fs::metadata(dest) {
        std::fs::set_permissions(tmp.path(), meta.permissions())
            .with_context(|| format!("copy permissions of {}", dest.display()))?;
    }

    tmp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("replace {}", dest.display()))?;
    Ok(())
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

/// First 16 bytes of the BLAKE3 hash, hex encoded.
pub fn fingerprint(bytes: &[u8]) -> String {
    let hash = blake3::hash(bytes);
    hash.as_bytes()[0..16]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

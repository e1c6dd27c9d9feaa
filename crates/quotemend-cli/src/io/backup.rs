// crates/quotemend-cli/src/io/backup.rs

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::io::text_file::crc32;

pub const BACKUP_EXT: &str = "bak";
pub const MAX_BACKUPS: u32 = 999;

/// Candidate backup path: `<name>.bak` for `n == 0`, else `<name>.bak.<n>`.
pub fn backup_candidate(src: &Path, dir: Option<&Path>, n: u32) -> anyhow::Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("input path has no file name: {}", src.display()),
        )
    })?;

    let mut file = OsString::from(name);
    file.push(".");
    file.push(BACKUP_EXT);
    if n > 0 {
        file.push(format!(".{n}"));
    }

    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => src.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(file))
}

/// Copy `original` (the bytes read from `src`) to the first free backup name.
/// Existing backups are never overwritten. The written copy is read back and
/// checked by CRC32.
pub fn create_backup(src: &Path, original: &[u8], dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let want = crc32(original);

    for n in 0..=MAX_BACKUPS {
        let path = backup_candidate(src, dir, n)?;
        let mut f = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("create backup {}", path.display()))
            }
        };

        f.write_all(original)
            .with_context(|| format!("write backup {}", path.display()))?;
        f.sync_all()
            .with_context(|| format!("sync backup {}", path.display()))?;
        drop(f);

        let back = std::fs::read(&path)
            .with_context(|| format!("re-read backup {}", path.display()))?;
        let got = crc32(&back);
        if got != want {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "backup {} failed verification: crc32 {:08x} != {:08x}",
                    path.display(),
                    got,
                    want
                ),
            )
            .into());
        }

        tracing::debug!(path = %path.display(), crc32 = want, "backup written");
        return Ok(path);
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "no free backup name for {} after {} attempts",
            src.display(),
            MAX_BACKUPS + 1
        ),
    )
    .into())
}

// src/filtering/file_type.rs

use std::fs::Metadata;

/// Checks if the metadata belongs to a regular file.
///
/// Callers pass metadata that already followed symlinks, so a link to a
/// regular file counts as one.
#[inline]
pub fn is_regular_file(metadata: &Metadata) -> bool {
    metadata.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_file() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("main.py");
        fs::write(&file_path, "print('hi')\n")?;
        assert!(is_regular_file(&fs::metadata(&file_path)?));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_is_not_file_dir() -> std::io::Result<()> {
        let temp = tempdir()?;
        assert!(!is_regular_file(&fs::metadata(temp.path())?));
        temp.close()?;
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_file_follows_target() -> std::io::Result<()> {
        use std::os::unix::fs::symlink;
        let temp = tempdir()?;
        let target = temp.path().join("target.py");
        fs::write(&target, "x = 1\n")?;
        let link = temp.path().join("link.py");
        symlink(&target, &link)?;
        assert!(is_regular_file(&fs::metadata(&link)?));
        assert!(!is_regular_file(&fs::symlink_metadata(&link)?));
        temp.close()?;
        Ok(())
    }
}

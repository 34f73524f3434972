use std::fs;
use std::io;
use std::path::Path;

/// Write rendered trace text, creating parent directories as needed.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_text_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exports/lcg.csv");

        write_text(&path, "i,Xi-1,Operacion,Xi,ri\n1,7,(1 · 7 + 5) mod 16,12,0.8000").unwrap();

        let read_back = fs::read_to_string(&path).unwrap();
        assert!(read_back.starts_with("i,Xi-1,Operacion,Xi,ri"));
        assert!(read_back.ends_with("0.8000"));
    }

    #[test]
    fn test_write_text_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.csv");

        write_text(&path, "first").unwrap();
        write_text(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}

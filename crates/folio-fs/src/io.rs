use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en `path` pasando por un fichero temporal hermano.
///
/// El destino nunca queda a medio escribir: o contiene el contenido anterior
/// o el nuevo completo.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  ensure_parent_dir(path)?;

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Crea el directorio padre de `path` si todavía no existe.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
    _ => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn test_atomic_write_replaces_content() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("folio.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    atomic_write_str(&path, "a = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
    assert!(!path.with_extension("tmp").exists());
  }

  #[test]
  fn test_atomic_write_creates_missing_parent() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("exports").join("order.json");

    atomic_write_str(&path, "{}").unwrap();

    assert!(path.exists());
  }
}

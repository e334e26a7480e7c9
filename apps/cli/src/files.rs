//! File IO for the CLI: reading inputs, deriving the default output path,
//! and writing the optimized resume. The original resume file is never
//! opened for writing.

use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Reads an input file, mapping a missing path to a distinct error.
pub fn read_input_file(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Derives the default output path: `resume.md` -> `resume_optimized.md`.
pub fn default_output_path(resume_path: &Path) -> PathBuf {
    let stem = resume_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    let name = match resume_path.extension() {
        Some(ext) => format!("{stem}_optimized.{}", ext.to_string_lossy()),
        None => format!("{stem}_optimized"),
    };
    resume_path.with_file_name(name)
}

/// Writes the optimized resume, refusing to clobber the original input.
pub fn write_output(path: &Path, content: &str, original: &Path) -> Result<(), AppError> {
    if same_file(path, original) {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "refusing to overwrite the original resume at {}",
                original.display()
            ),
        )));
    }
    std::fs::write(path, content)?;
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // Output does not exist yet; compare as given.
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_keeps_the_extension() {
        assert_eq!(
            default_output_path(Path::new("/tmp/resume.md")),
            PathBuf::from("/tmp/resume_optimized.md")
        );
    }

    #[test]
    fn test_default_output_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("resume")),
            PathBuf::from("resume_optimized")
        );
    }

    #[test]
    fn test_missing_input_is_a_file_not_found_error() {
        let result = read_input_file(Path::new("/nonexistent/resume.md"));
        assert!(matches!(result, Err(AppError::FileNotFound(_))));
    }

    #[test]
    fn test_read_and_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("resume.md");
        std::fs::write(&original, "## Skills\n- Rust\n").unwrap();

        let content = read_input_file(&original).unwrap();
        assert_eq!(content, "## Skills\n- Rust\n");

        let output = default_output_path(&original);
        write_output(&output, &content, &original).unwrap();
        assert_eq!(std::fs::read_to_string(output).unwrap(), content);
    }

    #[test]
    fn test_write_refuses_the_original_path() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("resume.md");
        std::fs::write(&original, "## Skills\n- Rust\n").unwrap();

        let result = write_output(&original, "overwritten", &original);
        assert!(result.is_err());
        // the original is untouched
        assert_eq!(
            std::fs::read_to_string(&original).unwrap(),
            "## Skills\n- Rust\n"
        );
    }
}

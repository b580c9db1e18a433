use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ia_core::frame::AsciiArt;

/// Write the art verbatim to `path`: escapes kept, no trailing newline.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_to_file(art: &AsciiArt, path: &Path) -> Result<()> {
    std::fs::write(path, art.to_string())
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!("{} lignes écrites dans {}", art.height(), path.display());
    Ok(())
}

/// Print the art followed by a newline.
///
/// # Errors
/// Returns an error if the writer fails (closed pipe, full disk).
pub fn print_to<W: Write>(art: &AsciiArt, out: &mut W) -> Result<()> {
    writeln!(out, "{art}").context("Échec d'écriture sur la sortie")?;
    out.flush().context("Échec d'écriture sur la sortie")?;
    Ok(())
}

/// Deliver the art: to `output` when given (with a confirmation on
/// `console`), to `console` otherwise.
///
/// # Errors
/// Propagates file or console write failures.
pub fn emit<W: Write>(
    art: &AsciiArt,
    output: Option<&Path>,
    colored: bool,
    console: &mut W,
) -> Result<()> {
    match output {
        Some(path) => {
            write_to_file(art, path)?;
            writeln!(console, "Saved ASCII art to: {}", path.display())
                .context("Échec d'écriture sur la sortie")?;
            Ok(())
        }
        None => {
            if colored {
                ensure_ansi_support();
            }
            print_to(art, console)
        }
    }
}

/// Activer le traitement VT sur les consoles Windows qui le désactivent.
#[cfg(windows)]
fn ensure_ansi_support() {
    if !crossterm::ansi_support::supports_ansi() {
        log::warn!("Séquences ANSI non supportées par ce terminal ; couleur affichée brute.");
    }
}

#[cfg(not(windows))]
fn ensure_ansi_support() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn art() -> AsciiArt {
        AsciiArt::new(vec!["\x1b[38;2;1;2;3m@\x1b[0m".into(), "..".into()])
    }

    #[test]
    fn file_output_is_verbatim_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        write_to_file(&art(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\x1b[38;2;1;2;3m@\x1b[0m\n..");
    }

    #[test]
    fn printed_output_ends_with_newline() {
        let mut buf = Vec::new();
        print_to(&art(), &mut buf).unwrap();
        assert_eq!(buf, b"\x1b[38;2;1;2;3m@\x1b[0m\n..\n");
    }

    #[test]
    fn file_output_confirms_on_console() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        let mut console = Vec::new();
        emit(&art(), Some(&path), true, &mut console).unwrap();

        let message = String::from_utf8(console).unwrap();
        assert_eq!(message, format!("Saved ASCII art to: {}\n", path.display()));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\x1b[38;2;1;2;3m@\x1b[0m\n.."
        );
    }

    #[test]
    fn console_output_without_file() {
        let mut console = Vec::new();
        emit(&art(), None, false, &mut console).unwrap();
        assert_eq!(console, b"\x1b[38;2;1;2;3m@\x1b[0m\n..\n");
    }

    #[test]
    fn failed_file_write_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("art.txt");
        let mut console = Vec::new();
        assert!(emit(&art(), Some(&path), false, &mut console).is_err());
        assert!(console.is_empty());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("art.txt");
        let err = write_to_file(&art(), &path).unwrap_err();
        assert!(err.to_string().contains("art.txt"));
    }
}

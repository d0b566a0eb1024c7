//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use penwise_core::TextType;
use penwise_core::similarity::remove_prompt_from_content;

pub mod analyze;
pub mod coach;
pub mod devices;
pub mod draft;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod show_tell;
pub mod variety;
pub mod vocab;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read the writing and, when given, strip a pasted prompt from its start.
pub fn read_writing(
    path: &Utf8Path,
    prompt: Option<&Utf8Path>,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    match prompt {
        Some(prompt_path) => {
            let prompt = read_input_file(prompt_path, max_bytes)?;
            Ok(remove_prompt_from_content(&content, &prompt))
        }
        None => Ok(content),
    }
}

/// `--type` if given, else the configured default.
pub fn resolve_text_type(arg: Option<&str>, default: TextType) -> TextType {
    arg.map_or(default, TextType::resolve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn oversized_input_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "big.txt", "0123456789");
        let err = read_input_file(&path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn prompt_is_stripped() {
        let tmp = TempDir::new().unwrap();
        let prompt = write(&tmp, "prompt.txt", "Describe a storm.");
        let essay = write(&tmp, "essay.txt", "Describe a storm.\nRain hammered the roof.");
        let text = read_writing(&essay, Some(&prompt), None).unwrap();
        assert_eq!(text, "Rain hammered the roof.");
    }

    #[test]
    fn type_argument_overrides_default() {
        assert_eq!(
            resolve_text_type(Some("Persuasive"), TextType::Creative),
            TextType::Persuasive
        );
        assert_eq!(resolve_text_type(None, TextType::Creative), TextType::Creative);
        assert_eq!(
            resolve_text_type(Some("sonnet"), TextType::Creative),
            TextType::Narrative
        );
    }
}

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::domain::PackageInfo;
use crate::error::Result;

/// Writes the prompt to `target`, or to stdout when no target is given.
///
/// Missing parent directories of the target are created.
pub fn write_prompt(prompt: &str, target: Option<&Path>) -> Result<()> {
    match target {
        Some(path) => write_file(path, prompt),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Writes the packages-info sidecar as a pretty-printed JSON array.
pub fn write_packages_info(infos: &[PackageInfo], path: &Path) -> Result<()> {
    let mut content = serde_json::to_string_pretty(infos)?;
    content.push('\n');
    write_file(path, &content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

use anyhow::Context;

/// Resolve text given inline or via a file path; inline wins.
pub fn read_text(inline: Option<&str>, file: Option<&str>) -> anyhow::Result<Option<String>> {
    if let Some(text) = inline {
        return Ok(Some(text.to_string()));
    }
    file.map(|path| {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
    })
    .transpose()
}

/// Like [`read_text`], but one source must be present and non-blank.
pub fn require_text(inline: Option<&str>, file: Option<&str>, what: &str) -> anyhow::Result<String> {
    match read_text(inline, file)? {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => anyhow::bail!("{what} is empty"),
    }
}

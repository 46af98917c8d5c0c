use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::parse_enum;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "snake_case")]
    enum Kind {
        ExamPaper,
        Subject,
    }

    #[test]
    fn parses_snake_case_enum() {
        assert_eq!(parse_enum::<Kind>("subject", "type").unwrap(), Kind::Subject);
    }

    #[test]
    fn parses_hyphenated_alias() {
        assert_eq!(parse_enum::<Kind>("Exam-Paper", "type").unwrap(), Kind::ExamPaper);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Kind>("quiz", "type").expect_err("should fail");
        assert!(err.to_string().contains("invalid type 'quiz'"));
    }
}

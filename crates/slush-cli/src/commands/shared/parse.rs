use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use slush_core::enums::LetterTone;

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let tone: LetterTone = parse_enum("professional", "tone").expect("tone should parse");
        assert_eq!(tone, LetterTone::Professional);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let tone: LetterTone = parse_enum("warm-professional", "tone").expect("tone should parse");
        assert_eq!(tone, LetterTone::WarmProfessional);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<LetterTone>("casual", "tone").expect_err("should fail");
        assert!(err.to_string().contains("invalid tone 'casual'"));
    }
}

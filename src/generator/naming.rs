/// Convert a snake_case name to PascalCase, e.g. `payload_not_available` to
/// `PayloadNotAvailable`.
///
/// Applying it to its own output changes nothing.
pub fn pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords which can't be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// The Rust field identifier of an option key.
///
/// Option keys are snake_case already and are kept. Anything outside `[a-z0-9_]` becomes `_`,
/// keywords become raw identifiers.
pub fn field_ident(key: &str) -> String {
    let mut ident: String = key
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9' | '_') => c,
            _ => '_',
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    // `_` alone is a pattern, not an identifier
    if ident == "_" {
        ident.push_str("field");
    } else if RESERVED.contains(&ident.as_str()) {
        ident.push('_');
    } else if KEYWORDS.contains(&ident.as_str()) {
        ident.insert_str(0, "r#");
    }

    ident
}

/// The name serde derives for an identifier.
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("payload_not_available"), "PayloadNotAvailable");
        assert_eq!(pascal_case("payload_off"), "PayloadOff");
        assert_eq!(pascal_case("binary_sensor"), "BinarySensor");
        assert_eq!(pascal_case("qos"), "Qos");
        assert_eq!(pascal_case("rgbww_state_topic"), "RgbwwStateTopic");
    }

    #[test]
    fn test_pascal_case_idempotent() {
        for name in [
            "payload_off",
            "alarm_control_panel",
            "unique_id",
            "a__b",
            "_leading",
            "trailing_",
            "x",
            "",
        ] {
            let once = pascal_case(name);
            assert!(!once.contains('_'), "{name} -> {once}");
            assert_eq!(pascal_case(&once), once);
        }
    }

    #[test]
    fn test_field_ident() {
        assert_eq!(field_ident("state_topic"), "state_topic");
        assert_eq!(field_ident("type"), "r#type");
        assert_eq!(field_ident("self"), "self_");
        assert_eq!(field_ident("brightness-scale"), "brightness_scale");
        assert_eq!(field_ident("Retain"), "retain");
        assert_eq!(field_ident("2nd_topic"), "_2nd_topic");
        assert_eq!(field_ident("_"), "_field");
        assert_eq!(field_ident(""), "_field");
        assert_eq!(field_ident("-"), "_field");
        assert_eq!(field_ident("__"), "__");
    }

    #[test]
    fn test_unraw() {
        assert_eq!(unraw("r#type"), "type");
        assert_eq!(unraw("state_topic"), "state_topic");
    }
}

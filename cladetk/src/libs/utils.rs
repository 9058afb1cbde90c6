//NOTE: This should be parsed by clap automatically, but Option<String> parsing is not supported out of the box as of now
pub fn strip_prefix(prefix: Option<String>) -> Option<String> {
    if let Some(prefix) = prefix {
        match prefix.as_ref() {
            "" => None,
            "\\0" => None,
            v => Some(v.to_string()),
        }
    } else {
        None
    }
}

// Kit name fields exported from the sequencing vendor come decorated as
// "<batch> <kit>.zip". Only fields of exactly that shape are trimmed.
pub fn strip_kit_decoration(field: &str) -> String {
    let mut tokens = field.split_whitespace();

    if let (Some(_), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) {
        if let Some(kit) = second.strip_suffix(".zip") {
            if !kit.is_empty() {
                return kit.to_string();
            }
        }
    }

    field.to_string()
}

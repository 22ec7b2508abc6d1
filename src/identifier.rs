//! Command name grammar shared by the CLI and script parsers.

/// Check a command name against `(letter|_) (letter|digit|_)+`.
///
/// ASCII only. Names need at least two characters.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    let mut rest = 0;
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }
        rest += 1;
    }
    rest > 0
}

/// Lowercased form stored as a command's name.
///
/// ASCII folding only, so a valid name stays valid after folding.
pub fn canonical_name(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Policy applied to command name tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameRules {
    /// Also accept a lone letter or underscore.
    pub allow_single_char: bool,
}

impl NameRules {
    pub fn strict() -> Self {
        Self::default()
    }

    /// Whether `name` may start a command under this policy.
    pub fn accepts(&self, name: &str) -> bool {
        if is_valid_identifier(name) {
            return true;
        }
        if !self.allow_single_char {
            return false;
        }
        let mut chars = name.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.is_ascii_alphabetic() || c == '_'
        )
    }
}

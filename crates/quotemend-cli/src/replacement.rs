// crates/quotemend-cli/src/replacement.rs

use clap::ValueEnum;

/// Symbolic names accepted by `--replace`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReplacementName {
    #[default]
    Space,
    #[value(alias = "nbsp")]
    NonbreakingSpace,
    Tab,
    Pipe,
}

impl ReplacementName {
    pub fn literal(self) -> &'static str {
        match self {
            ReplacementName::Space => " ",
            ReplacementName::NonbreakingSpace => "\u{00A0}",
            ReplacementName::Tab => "\t",
            ReplacementName::Pipe => "|",
        }
    }
}

/// A literal token wins over a symbolic name.
pub fn resolve(name: ReplacementName, literal: Option<&str>) -> String {
    match literal {
        Some(s) => s.to_owned(),
        None => name.literal().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_name_maps_to_its_own_literal() {
        let all = ReplacementName::value_variants();
        let mut seen: Vec<&str> = all.iter().map(|n| n.literal()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), all.len());
    }

    #[test]
    fn nbsp_alias_parses() {
        let n = ReplacementName::from_str("nbsp", false).unwrap();
        assert_eq!(n, ReplacementName::NonbreakingSpace);
        assert_eq!(n.literal(), "\u{00A0}");
    }

    #[test]
    fn literal_takes_precedence() {
        assert_eq!(resolve(ReplacementName::Space, Some("~")), "~");
        assert_eq!(resolve(ReplacementName::Tab, None), "\t");
    }
}

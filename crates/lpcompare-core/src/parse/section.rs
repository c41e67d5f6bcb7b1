/// Section headers recognised by the model builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Generals,
    Binaries,
    Sos,
    Bounds,
    Constraints,
}

impl Section {
    /// Match a header line, ignoring case and surrounding whitespace.
    ///
    /// Unknown headers (objective sense, `End`, vendor extensions) return
    /// `None` and are skipped by the builder.
    pub fn from_header(line: &str) -> Option<Self> {
        let header = line.trim();

        if matches_any(header, &["Generals", "General", "Gen"]) {
            Some(Section::Generals)
        } else if matches_any(header, &["Bounds", "Bound"]) {
            Some(Section::Bounds)
        } else if matches_any(header, &["Binaries", "Binary", "Bin"]) {
            Some(Section::Binaries)
        } else if matches_any(header, &["SOS"]) {
            Some(Section::Sos)
        } else if matches_any(header, &["Subject To", "such that", "st", "S.T.", "ST."]) {
            Some(Section::Constraints)
        } else {
            None
        }
    }
}

fn matches_any(header: &str, names: &[&str]) -> bool {
    names.iter().any(|name| header.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_synonyms() {
        assert_eq!(Section::from_header("GENERALS"), Some(Section::Generals));
        assert_eq!(Section::from_header("gen"), Some(Section::Generals));
        assert_eq!(Section::from_header("Bound"), Some(Section::Bounds));
        assert_eq!(Section::from_header("binary"), Some(Section::Binaries));
        assert_eq!(Section::from_header("sos"), Some(Section::Sos));
        assert_eq!(Section::from_header("subject to"), Some(Section::Constraints));
        assert_eq!(Section::from_header("Such That"), Some(Section::Constraints));
        assert_eq!(Section::from_header("s.t."), Some(Section::Constraints));
        assert_eq!(Section::from_header("ST.  "), Some(Section::Constraints));
    }

    #[test]
    fn test_unknown_headers() {
        assert_eq!(Section::from_header("Minimize"), None);
        assert_eq!(Section::from_header("End"), None);
        assert_eq!(Section::from_header("Semi-Continuous"), None);
    }
}

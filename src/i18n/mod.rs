//! Locale selection and localized status messages.
//!
//! The catalog is embedded at compile time; a [`Lang`] is resolved once per
//! request from the `Accept-Language` header and never mutated.

mod catalog;

/// Supported response languages.
///
/// Each variant maps to an ISO 639-1 primary subtag. Regional variants
/// (`pt-BR`, `es-MX`, ...) resolve to their primary subtag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Pt,
    Es,
    De,
}

impl Lang {
    /// Parse a lowercase ISO 639-1 code into a supported language.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            "es" => Some(Self::Es),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// ISO 639-1 code for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
            Self::Es => "es",
            Self::De => "de",
        }
    }
}

/// Resolves the response language from an `Accept-Language` header value.
///
/// Candidates are taken in header order with weights ignored. For each
/// candidate the exact tag is tried first, then its primary subtag. Falls
/// back to [`Lang::En`] when nothing matches or the header is absent.
#[must_use]
pub fn resolve(header: Option<&str>) -> Lang {
    let Some(header) = header else {
        return Lang::default();
    };

    for candidate in header.split(',') {
        let tag = candidate.split(';').next().unwrap_or(candidate).trim().to_ascii_lowercase();
        if tag.is_empty() {
            continue;
        }

        if let Some(lang) = Lang::from_code(&tag) {
            return lang;
        }

        let primary = tag.split('-').next().unwrap_or(&tag);
        if let Some(lang) = Lang::from_code(primary) {
            return lang;
        }
    }

    Lang::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(resolve(Some("de")), Lang::De);
        assert_eq!(resolve(Some("es,en")), Lang::Es);
    }

    #[test]
    fn regional_variant_falls_back_to_primary_subtag() {
        assert_eq!(resolve(Some("pt-BR,en;q=0.8")), Lang::Pt);
        assert_eq!(resolve(Some("de-AT")), Lang::De);
    }

    #[test]
    fn unknown_candidates_fall_through_to_default() {
        assert_eq!(resolve(Some("xx,fr")), Lang::En);
        assert_eq!(resolve(Some("zh")), Lang::En);
    }

    #[test]
    fn missing_header_yields_default() {
        assert_eq!(resolve(None), Lang::En);
        assert_eq!(resolve(Some("")), Lang::En);
    }

    #[test]
    fn weights_and_casing_are_ignored() {
        assert_eq!(resolve(Some("PT-br;q=0.3, en;q=0.9")), Lang::Pt);
        assert_eq!(resolve(Some(" ES ; q=0.1 ")), Lang::Es);
    }

    #[test]
    fn first_matching_candidate_wins() {
        assert_eq!(resolve(Some("xx,de,es")), Lang::De);
    }
}

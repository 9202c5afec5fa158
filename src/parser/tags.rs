//! `{tag:value}` directives and section-label recognition.

use std::sync::LazyLock;

use regex::Regex;

/// A `{tag}` or `{tag:value}` directive; group 1 is the tag, group 2 the value.
pub const TAG_PATTERN: &str = r"\{([^:}]+)(?::([^}]*))?\}";

/// A section label line such as `Verse 2:` or `pre-chorus`.
pub const SECTION_LABEL_PATTERN: &str = concat!(
    r"(?i)^(Verse|Chorus|Bridge|Pre-?Chorus|Intro|Outro|Tag|Interlude|Instrumental",
    r"|Ending|Coda|Refrain|Strophe|Vamp)\s*(\d*)\s*:?\s*$",
);

#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG_PATTERN).expect("valid regex: RE_TAG"));

#[allow(clippy::expect_used)]
static RE_SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SECTION_LABEL_PATTERN).expect("valid regex: RE_SECTION_LABEL")
});

/// Song fields a directive can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    /// `title`, `t`
    Title,
    /// `subtitle`, `st`, `su`, `artist`
    Artist,
    /// `key`
    Key,
    /// `tempo`
    Tempo,
    /// `ccli`
    Ccli,
    /// `copyright`, `footer`, `f`
    Copyright,
}

impl MetaField {
    /// Look up a directive name (already lowercased).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "title" | "t" => Some(Self::Title),
            "subtitle" | "st" | "su" | "artist" => Some(Self::Artist),
            "key" => Some(Self::Key),
            "tempo" => Some(Self::Tempo),
            "ccli" => Some(Self::Ccli),
            "copyright" | "footer" | "f" => Some(Self::Copyright),
            _ => None,
        }
    }

    /// Directive name written when rendering this field.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Key => "key",
            Self::Tempo => "tempo",
            Self::Ccli => "ccli",
            Self::Copyright => "copyright",
        }
    }
}

/// A directive found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Lowercased, trimmed tag name.
    pub tag: String,
    /// Trimmed value; empty for `{tag}`.
    pub value: String,
}

impl Directive {
    /// The song field this directive sets, if it is a known metadata tag.
    pub fn field(&self) -> Option<MetaField> {
        MetaField::from_tag(&self.tag)
    }
}

/// Directives on a line, and whether the line holds nothing else.
pub fn scan_directives(trimmed: &str) -> (Vec<Directive>, bool) {
    let mut directives = Vec::new();
    let mut leftover = String::new();
    let mut last_end = 0;

    for caps in RE_TAG.captures_iter(trimmed) {
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        leftover.push_str(&trimmed[last_end..whole.start()]);
        last_end = whole.end();
        directives.push(Directive {
            tag: tag.as_str().trim().to_lowercase(),
            value: caps.get(2).map_or_else(String::new, |v| v.as_str().trim().to_string()),
        });
    }
    leftover.push_str(&trimmed[last_end..]);

    let tag_only = !directives.is_empty() && leftover.trim().is_empty();
    (directives, tag_only)
}

/// Section label for a line, if it is one.
///
/// Accepts plain labels (`Chorus`, `Verse 2:`) and bracketed ones
/// (`[Bridge]`). The label keeps the spelling it was written with and a
/// single space before any number.
pub fn section_label(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let caps = RE_SECTION_LABEL.captures(inner.trim())?;
    let name = caps.get(1)?.as_str();
    match caps.get(2).map(|m| m.as_str()) {
        Some(num) if !num.is_empty() => Some(format!("{name} {num}")),
        _ => Some(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_scan_directives_tag_only() {
        let (directives, tag_only) = scan_directives("{title: Amazing Grace}");
        assert!(tag_only);
        assert_eq!(directives[0].tag, "title");
        assert_eq!(directives[0].value, "Amazing Grace");
        assert_eq!(directives[0].field(), Some(MetaField::Title));
    }

    #[test]
    fn test_scan_directives_without_value() {
        let (directives, tag_only) = scan_directives("{soc}");
        assert!(tag_only);
        assert_eq!(directives[0].tag, "soc");
        assert_eq!(directives[0].value, "");
        assert_eq!(directives[0].field(), None);
    }

    #[test]
    fn test_scan_directives_mixed_line() {
        let (directives, tag_only) = scan_directives("Words {key: G} more");
        assert!(!tag_only);
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].field(), Some(MetaField::Key));
    }

    #[test]
    fn test_scan_directives_none() {
        let (directives, tag_only) = scan_directives("just lyrics");
        assert!(directives.is_empty());
        assert!(!tag_only);
    }

    #[test]
    fn test_tag_aliases() {
        assert_eq!(MetaField::from_tag("st"), Some(MetaField::Artist));
        assert_eq!(MetaField::from_tag("f"), Some(MetaField::Copyright));
        assert_eq!(MetaField::from_tag("ccli"), Some(MetaField::Ccli));
        assert_eq!(MetaField::from_tag("comment"), None);
    }

    #[test]
    fn test_rendered_tag_reads_back() {
        for field in [
            MetaField::Title,
            MetaField::Artist,
            MetaField::Key,
            MetaField::Tempo,
            MetaField::Ccli,
            MetaField::Copyright,
        ] {
            assert_eq!(MetaField::from_tag(field.tag()), Some(field));
        }
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(section_label("Verse 1:").as_deref(), Some("Verse 1"));
        assert_eq!(section_label("chorus").as_deref(), Some("chorus"));
        assert_eq!(section_label("Pre-Chorus").as_deref(), Some("Pre-Chorus"));
        assert_eq!(section_label("PreChorus 2").as_deref(), Some("PreChorus 2"));
        assert_eq!(section_label("[Bridge]").as_deref(), Some("Bridge"));
        assert_eq!(section_label("  Verse2  ").as_deref(), Some("Verse 2"));
    }

    #[test]
    fn test_not_section_labels() {
        assert!(section_label("Verse one of the song").is_none());
        assert!(section_label("[G]Chorus").is_none());
        assert!(section_label("").is_none());
    }
}

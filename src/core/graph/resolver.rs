//! Field resolution: picks display text for a record from prioritized columns
//!
//! Every string produced here is trimmed and has its backslashes and double quotes
//! escaped, so it can be dropped straight into a quoted DOT string.

use crate::core::graph::palette::GenerationPalette;
use crate::core::models::{Field, PersonRecord};

/// Appended to the name of people who have an external link
pub const LINK_GLYPH: &str = "🔗";

/// DOT line break inside a quoted label
pub const LABEL_BREAK: &str = "\\n";

/// Text shown when no birth information resolves
const UNKNOWN_BIRTH: &str = "Unknown";

/// Name columns, most preferred first
const NAME_FIELDS: &[Field] = &[Field::ChartDisplayName, Field::FullName];
const BIRTH_FIELDS: &[Field] = &[Field::ChartBirthInfo, Field::BirthInfo];
const DEATH_FIELDS: &[Field] = &[Field::ChartDeathInfo, Field::DeathInfo];
const URL_FIELDS: &[Field] = &[Field::PrimaryUrl, Field::SecondaryUrl];
const TREE_FIELDS: &[Field] = &[Field::TreeConnection, Field::RelatedTree];
const MARRIAGE_FIELDS: &[Field] = &[Field::ChartMarriageInfo, Field::MarriageDate];

/// Escape backslashes and double quotes for a DOT quoted string
#[must_use]
pub fn escape_dot_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// First candidate column with a non-blank value, trimmed and escaped
#[must_use]
pub fn resolve_text(record: &PersonRecord, candidates: &[Field]) -> Option<String> {
    candidates.iter().find_map(|field| {
        record
            .get(*field)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| escape_dot_string(&value))
    })
}

/// A trimmed identifier column (`Spouse_ID`, `Father_ID`, ...), unescaped
#[must_use]
pub fn resolve_id(record: &PersonRecord, field: Field) -> Option<String> {
    record
        .get(field)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Append the link glyph unless the name already carries one
#[must_use]
pub fn with_link_glyph(name: &str) -> String {
    if name.contains(LINK_GLYPH) {
        name.to_string()
    } else {
        format!("{name} {LINK_GLYPH}")
    }
}

/// Marriage edge label: chart info (or date), then location, joined by a DOT line break
#[must_use]
pub fn marriage_label(record: &PersonRecord) -> Option<String> {
    let parts: Vec<String> = [
        resolve_text(record, MARRIAGE_FIELDS),
        resolve_text(record, &[Field::MarriageLocation]),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(LABEL_BREAK))
    }
}

/// Display attributes for one person node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPerson {
    /// Trimmed identifier (unescaped)
    pub id: String,
    /// Display name, with the link glyph when a URL resolved
    pub name: String,
    /// Birth line (always present)
    pub birth_line: String,
    /// Death line, if any death info resolved
    pub death_line: Option<String>,
    /// External link
    pub url: Option<String>,
    /// Person links into another tree
    pub has_tree_connection: bool,
    /// Fill color from the generation palette
    pub fill_color: &'static str,
}

impl ResolvedPerson {
    /// Multi-line node label: name, birth line, then death line if present
    #[must_use]
    pub fn label(&self) -> String {
        let mut lines = vec![self.name.as_str(), self.birth_line.as_str()];
        if let Some(death) = &self.death_line {
            lines.push(death);
        }
        lines.join(LABEL_BREAK)
    }
}

/// Resolves records against a palette
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    palette: &'a GenerationPalette,
}

impl<'a> FieldResolver<'a> {
    /// Create a resolver using `palette` for node colors
    #[must_use]
    pub const fn new(palette: &'a GenerationPalette) -> Self {
        Self { palette }
    }

    /// Resolve a record, or `None` if it has no identifier
    ///
    /// Name falls back to the identifier when neither name column is filled.
    #[must_use]
    pub fn resolve(&self, record: &PersonRecord) -> Option<ResolvedPerson> {
        let id = record.id()?.to_string();

        let name = resolve_text(record, NAME_FIELDS).unwrap_or_else(|| escape_dot_string(&id));
        let url = resolve_text(record, URL_FIELDS);
        let name = if url.is_some() {
            with_link_glyph(&name)
        } else {
            name
        };

        let birth = resolve_text(record, BIRTH_FIELDS).unwrap_or_else(|| UNKNOWN_BIRTH.to_string());
        let birth_line = if birth == UNKNOWN_BIRTH {
            format!("Birth: {UNKNOWN_BIRTH}")
        } else {
            birth
        };

        Some(ResolvedPerson {
            id,
            name,
            birth_line,
            death_line: resolve_text(record, DEATH_FIELDS),
            url,
            has_tree_connection: resolve_text(record, TREE_FIELDS).is_some(),
            fill_color: self.palette.color_for(record.generation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::palette::DEFAULT_PALETTE;

    fn person(id: &str, fields: &[(Field, &str)]) -> PersonRecord {
        let mut record = PersonRecord::with_id(id);
        for (field, value) in fields {
            record.set(*field, (*value).to_string());
        }
        record
    }

    #[test]
    fn test_resolve_text_prefers_first_candidate() {
        let record = person(
            "P1",
            &[
                (Field::FullName, "Jane Marie Doe"),
                (Field::ChartDisplayName, "  Jane \"JJ\" Doe "),
            ],
        );

        assert_eq!(
            resolve_text(&record, NAME_FIELDS),
            Some("Jane \\\"JJ\\\" Doe".to_string())
        );
    }

    #[test]
    fn test_resolve_text_skips_blank() {
        let record = person(
            "P1",
            &[(Field::ChartBirthInfo, "   "), (Field::BirthInfo, "b. 1901")],
        );
        assert_eq!(resolve_text(&record, BIRTH_FIELDS), Some("b. 1901".to_string()));
        assert_eq!(resolve_text(&record, DEATH_FIELDS), None);
    }

    #[test]
    fn test_chart_birth_and_death_win() {
        let record = person(
            "P1",
            &[
                (Field::BirthInfo, "Born 3 Mar 1880, Leeds"),
                (Field::ChartBirthInfo, "b. 1880"),
                (Field::DeathInfo, "Died 1951, Boston"),
                (Field::ChartDeathInfo, "d. 1951"),
            ],
        );
        assert_eq!(resolve_text(&record, BIRTH_FIELDS), Some("b. 1880".to_string()));
        assert_eq!(resolve_text(&record, DEATH_FIELDS), Some("d. 1951".to_string()));

        let resolved = FieldResolver::new(&DEFAULT_PALETTE).resolve(&record).unwrap();
        assert_eq!(resolved.label(), "P1\\nb. 1880\\nd. 1951");
    }

    #[test]
    fn test_escape_dot_string() {
        assert_eq!(escape_dot_string("plain"), "plain");
        assert_eq!(escape_dot_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_dot_string("Smith \\"), "Smith \\\\");
        assert_eq!(escape_dot_string("a\\\"b"), "a\\\\\\\"b");
    }

    #[test]
    fn test_trailing_backslash_keeps_line_break() {
        let record = person("P1", &[(Field::FullName, "Smith \\")]);
        let resolved = FieldResolver::new(&DEFAULT_PALETTE).resolve(&record).unwrap();
        assert_eq!(resolved.label(), r"Smith \\\nBirth: Unknown");
    }

    #[test]
    fn test_link_glyph_appended_once() {
        let once = with_link_glyph("Ada");
        assert_eq!(once, "Ada 🔗");
        assert_eq!(with_link_glyph(&once), once);
    }

    #[test]
    fn test_resolve_person_defaults() {
        let resolver = FieldResolver::new(&DEFAULT_PALETTE);
        let resolved = resolver.resolve(&person("P1", &[(Field::FullName, "Ada")])).unwrap();

        assert_eq!(resolved.id, "P1");
        assert_eq!(resolved.name, "Ada");
        assert_eq!(resolved.birth_line, "Birth: Unknown");
        assert!(resolved.death_line.is_none());
        assert!(resolved.url.is_none());
        assert!(!resolved.has_tree_connection);
        assert_eq!(resolved.fill_color, "gold");
        assert_eq!(resolved.label(), "Ada\\nBirth: Unknown");
    }

    #[test]
    fn test_resolve_person_full() {
        let resolver = FieldResolver::new(&DEFAULT_PALETTE);
        let record = person(
            "P2",
            &[
                (Field::FullName, "Bob"),
                (Field::BirthInfo, "b. 1900"),
                (Field::ChartDeathInfo, "d. 1970"),
                (Field::SecondaryUrl, "https://example.org/bob"),
                (Field::RelatedTree, "Jones tree"),
                (Field::Generation, "2"),
            ],
        );
        let resolved = resolver.resolve(&record).unwrap();

        assert_eq!(resolved.name, "Bob 🔗");
        assert_eq!(resolved.url.as_deref(), Some("https://example.org/bob"));
        assert!(resolved.has_tree_connection);
        assert_eq!(resolved.fill_color, "lightsteelblue");
        assert_eq!(resolved.label(), "Bob 🔗\\nb. 1900\\nd. 1970");
    }

    #[test]
    fn test_name_already_linked_is_not_decorated_twice() {
        let resolver = FieldResolver::new(&DEFAULT_PALETTE);
        let record = person(
            "P3",
            &[
                (Field::ChartDisplayName, "Cy 🔗"),
                (Field::PrimaryUrl, "https://example.org/cy"),
            ],
        );
        assert_eq!(resolver.resolve(&record).unwrap().name, "Cy 🔗");
    }

    #[test]
    fn test_missing_name_uses_identifier() {
        let resolver = FieldResolver::new(&DEFAULT_PALETTE);
        assert_eq!(resolver.resolve(&PersonRecord::with_id("P9")).unwrap().name, "P9");
    }

    #[test]
    fn test_record_without_id_is_not_resolved() {
        let resolver = FieldResolver::new(&DEFAULT_PALETTE);
        let mut record = PersonRecord::default();
        record.set(Field::FullName, "Nobody".to_string());
        assert!(resolver.resolve(&record).is_none());
    }

    #[test]
    fn test_marriage_label() {
        let chart = person(
            "P1",
            &[
                (Field::ChartMarriageInfo, "m. 1925"),
                (Field::MarriageDate, "1925-06-01"),
                (Field::MarriageLocation, "Leeds"),
            ],
        );
        assert_eq!(marriage_label(&chart), Some("m. 1925\\nLeeds".to_string()));

        let date_only = person("P2", &[(Field::MarriageDate, "1925-06-01")]);
        assert_eq!(marriage_label(&date_only), Some("1925-06-01".to_string()));

        let location_only = person("P3", &[(Field::MarriageLocation, "York")]);
        assert_eq!(marriage_label(&location_only), Some("York".to_string()));

        assert_eq!(marriage_label(&PersonRecord::with_id("P4")), None);
    }
}

//! Person record model

use std::fmt;

/// A known column of the family CSV layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `Person_ID` (required; rows without it are skipped)
    PersonId,
    /// `Full_Name`
    FullName,
    /// `Chart_Display_Name`, preferred over `Full_Name`
    ChartDisplayName,
    /// `Birth_Info`
    BirthInfo,
    /// `Chart_Birth_Info`, preferred over `Birth_Info`
    ChartBirthInfo,
    /// `Death_Info`
    DeathInfo,
    /// `Chart_Death_Info`, preferred over `Death_Info`
    ChartDeathInfo,
    /// `Generation`
    Generation,
    /// `Spouse_ID`
    SpouseId,
    /// `Father_ID`
    FatherId,
    /// `Mother_ID`
    MotherId,
    /// `Primary_URL`
    PrimaryUrl,
    /// `Secondary_URL`
    SecondaryUrl,
    /// `Tree_Connection`
    TreeConnection,
    /// `Related_Tree`
    RelatedTree,
    /// `Chart_Marriage_Info`
    ChartMarriageInfo,
    /// `Marriage_Date`
    MarriageDate,
    /// `Marriage_Location`
    MarriageLocation,
}

impl Field {
    /// Every known column, in canonical export order
    pub const ALL: [Self; 18] = [
        Self::PersonId,
        Self::FullName,
        Self::ChartDisplayName,
        Self::BirthInfo,
        Self::ChartBirthInfo,
        Self::DeathInfo,
        Self::ChartDeathInfo,
        Self::Generation,
        Self::SpouseId,
        Self::FatherId,
        Self::MotherId,
        Self::PrimaryUrl,
        Self::SecondaryUrl,
        Self::TreeConnection,
        Self::RelatedTree,
        Self::ChartMarriageInfo,
        Self::MarriageDate,
        Self::MarriageLocation,
    ];

    /// Column header as it appears in the CSV
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::PersonId => "Person_ID",
            Self::FullName => "Full_Name",
            Self::ChartDisplayName => "Chart_Display_Name",
            Self::BirthInfo => "Birth_Info",
            Self::ChartBirthInfo => "Chart_Birth_Info",
            Self::DeathInfo => "Death_Info",
            Self::ChartDeathInfo => "Chart_Death_Info",
            Self::Generation => "Generation",
            Self::SpouseId => "Spouse_ID",
            Self::FatherId => "Father_ID",
            Self::MotherId => "Mother_ID",
            Self::PrimaryUrl => "Primary_URL",
            Self::SecondaryUrl => "Secondary_URL",
            Self::TreeConnection => "Tree_Connection",
            Self::RelatedTree => "Related_Tree",
            Self::ChartMarriageInfo => "Chart_Marriage_Info",
            Self::MarriageDate => "Marriage_Date",
            Self::MarriageLocation => "Marriage_Location",
        }
    }

    /// Look up a column by header name (trimmed, case-insensitive)
    #[must_use]
    pub fn from_column(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.column_name().eq_ignore_ascii_case(header))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One row of a family CSV
///
/// Every column is optional; `None` means the cell was absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRecord {
    /// Unique identifier, used as the graph node id
    pub person_id: Option<String>,
    /// Full legal name
    pub full_name: Option<String>,
    /// Shorter name preferred on the chart
    pub chart_display_name: Option<String>,
    /// Birth date/place text
    pub birth_info: Option<String>,
    /// Chart-formatted birth text
    pub chart_birth_info: Option<String>,
    /// Death date/place text
    pub death_info: Option<String>,
    /// Chart-formatted death text
    pub chart_death_info: Option<String>,
    /// Distance from the focus person (0 = focus)
    pub generation: Option<i64>,
    /// Spouse identifier
    pub spouse_id: Option<String>,
    /// Father identifier
    pub father_id: Option<String>,
    /// Mother identifier
    pub mother_id: Option<String>,
    /// Main external link
    pub primary_url: Option<String>,
    /// Fallback external link
    pub secondary_url: Option<String>,
    /// Marks a connection into another tree
    pub tree_connection: Option<String>,
    /// Alternate marker for a related tree
    pub related_tree: Option<String>,
    /// Chart-formatted marriage text
    pub chart_marriage_info: Option<String>,
    /// Marriage date
    pub marriage_date: Option<String>,
    /// Marriage place
    pub marriage_location: Option<String>,
}

impl PersonRecord {
    /// Create a record with only an identifier set
    #[must_use]
    pub fn with_id(person_id: impl Into<String>) -> Self {
        Self {
            person_id: Some(person_id.into()),
            ..Self::default()
        }
    }

    /// Get a text column. `Generation` is returned in its numeric string form.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<String> {
        match field {
            Field::Generation => self.generation.map(|g| g.to_string()),
            _ => self.text_slot(field).and_then(Clone::clone),
        }
    }

    /// Set a column from its raw CSV text
    ///
    /// `Generation` accepts integers and decimals (truncated toward zero); any other
    /// text stores `None`, which resolves as generation 0.
    pub fn set(&mut self, field: Field, value: String) {
        if field == Field::Generation {
            self.generation = parse_generation(&value);
        } else if let Some(slot) = self.text_slot_mut(field) {
            *slot = Some(value);
        }
    }

    /// Trimmed identifier, or `None` when it is missing or blank
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.person_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    const fn text_slot(&self, field: Field) -> Option<&Option<String>> {
        Some(match field {
            Field::PersonId => &self.person_id,
            Field::FullName => &self.full_name,
            Field::ChartDisplayName => &self.chart_display_name,
            Field::BirthInfo => &self.birth_info,
            Field::ChartBirthInfo => &self.chart_birth_info,
            Field::DeathInfo => &self.death_info,
            Field::ChartDeathInfo => &self.chart_death_info,
            Field::SpouseId => &self.spouse_id,
            Field::FatherId => &self.father_id,
            Field::MotherId => &self.mother_id,
            Field::PrimaryUrl => &self.primary_url,
            Field::SecondaryUrl => &self.secondary_url,
            Field::TreeConnection => &self.tree_connection,
            Field::RelatedTree => &self.related_tree,
            Field::ChartMarriageInfo => &self.chart_marriage_info,
            Field::MarriageDate => &self.marriage_date,
            Field::MarriageLocation => &self.marriage_location,
            Field::Generation => return None,
        })
    }

    fn text_slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        Some(match field {
            Field::PersonId => &mut self.person_id,
            Field::FullName => &mut self.full_name,
            Field::ChartDisplayName => &mut self.chart_display_name,
            Field::BirthInfo => &mut self.birth_info,
            Field::ChartBirthInfo => &mut self.chart_birth_info,
            Field::DeathInfo => &mut self.death_info,
            Field::ChartDeathInfo => &mut self.chart_death_info,
            Field::SpouseId => &mut self.spouse_id,
            Field::FatherId => &mut self.father_id,
            Field::MotherId => &mut self.mother_id,
            Field::PrimaryUrl => &mut self.primary_url,
            Field::SecondaryUrl => &mut self.secondary_url,
            Field::TreeConnection => &mut self.tree_connection,
            Field::RelatedTree => &mut self.related_tree,
            Field::ChartMarriageInfo => &mut self.chart_marriage_info,
            Field::MarriageDate => &mut self.marriage_date,
            Field::MarriageLocation => &mut self.marriage_location,
            Field::Generation => return None,
        })
    }
}

/// Parse a generation cell: `"3"`, `"3.0"` and `"-1"` are accepted
#[allow(clippy::cast_possible_truncation)]
fn parse_generation(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|g| g.is_finite())
            .map(|g| g.trunc() as i64)
    })
}

// src/pipeline/map.rs

//! Record mapping: source records to report rows.
//!
//! Every rule is applied independently per record. Missing optional values
//! become empty strings; the fields the link columns are built from (`id`,
//! `set_spec`, `parent_id`) are required and abort the mapping when absent.

use crate::error::{AppError, Result};
use crate::models::{Config, ConstantColumns, LinkTemplates, OutputRecord, SourceRecord};

/// A candidate value for a fallback chain.
pub type Extractor = fn(&SourceRecord) -> String;

/// Spatial Coverage candidates in priority order.
pub const SPATIAL_COVERAGE_CHAIN: [Extractor; 4] = [city_and_state, country, continent, region];

/// Return the first non-empty value produced by `chain`, or an empty string.
pub fn first_non_empty(record: &SourceRecord, chain: &[Extractor]) -> String {
    chain
        .iter()
        .map(|extract| extract(record))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// City and state entries joined with ", ".
fn city_and_state(record: &SourceRecord) -> String {
    record
        .city
        .iter()
        .chain(record.state.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn country(record: &SourceRecord) -> String {
    record.country.join("")
}

fn continent(record: &SourceRecord) -> String {
    record.continent.join("")
}

fn region(record: &SourceRecord) -> String {
    record.region.join("")
}

/// Spatial Coverage: "{city}, {state}", else country, continent, region.
pub fn spatial_coverage(record: &SourceRecord) -> String {
    first_non_empty(record, &SPATIAL_COVERAGE_CHAIN)
}

/// Description followed by the dimensions note.
pub fn description(record: &SourceRecord) -> String {
    format!(
        "{} Dimensions: {}",
        record.description.as_deref().unwrap_or(""),
        record.dimensions.as_deref().unwrap_or("")
    )
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn required(value: Option<&str>, index: usize, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(AppError::missing_field(index, field)),
    }
}

/// Applies the column rules with one set of link templates and constants.
#[derive(Debug, Clone, Default)]
pub struct RecordMapper {
    links: LinkTemplates,
    constants: ConstantColumns,
}

impl RecordMapper {
    pub fn new(links: LinkTemplates, constants: ConstantColumns) -> Self {
        Self { links, constants }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.links.clone(), config.constants.clone())
    }

    /// Map one record. `index` is its position in the fetched collection.
    pub fn map_record(&self, index: usize, record: &SourceRecord) -> Result<OutputRecord> {
        let id = required(record.id.as_deref(), index, "id")?;
        let set_spec = required(record.set_spec.as_deref(), index, "set_spec")?;
        let parent_id = required(
            record.parent_id.as_ref().and_then(|p| p.to_text()).as_deref(),
            index,
            "parent_id",
        )?;

        let c = &self.constants;
        Ok(OutputRecord {
            alternative_title: text(&record.title),
            description: description(record),
            language: record.language.join("; "),
            creator: record.creator.join("; "),
            publisher: text(&record.publisher),
            keyword: record.subject.join("|"),
            date_issued: record.date_created.join(""),
            spatial_coverage: spatial_coverage(record),
            information: self.links.information(&id),
            download: self.links.download(&set_spec, &parent_id),
            image: text(&record.thumb_url),
            manifest: self.links.manifest(&set_spec, &parent_id),
            identifier: text(&record.system_identifier),
            slug: id,
            access_rights: text(&record.local_rights),
            provenance: c.provenance.clone(),
            code: c.code.clone(),
            is_part_of: c.is_part_of.clone(),
            status: c.status.clone(),
            accrual_method: c.accrual_method.clone(),
            rights: c.rights.clone(),
            genre: c.genre.clone(),
            resource_type: c.resource_type.clone(),
            format: c.format.clone(),
            geometry_type: c.geometry_type.clone(),
            suppressed: c.suppressed.clone(),
            child: c.child.clone(),
            ..OutputRecord::default()
        })
    }

    /// Map the whole collection, preserving order. Stops at the first
    /// record that cannot be mapped.
    pub fn map_all(&self, records: &[SourceRecord]) -> Result<Vec<OutputRecord>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.map_record(index, record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HEADER, ParentId};

    fn record(id: &str, set_spec: &str, parent_id: i64) -> SourceRecord {
        SourceRecord {
            id: Some(id.to_string()),
            set_spec: Some(set_spec.to_string()),
            parent_id: Some(ParentId::Number(parent_id)),
            ..SourceRecord::default()
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample_records() -> Vec<SourceRecord> {
        let first = SourceRecord {
            title: Some("Minneapolis plat".into()),
            description: Some("Plat of the city.".into()),
            dimensions: Some("40 x 50 cm".into()),
            language: strings(&["English", "French"]),
            creator: strings(&["Hudson Map Co."]),
            publisher: Some("Hudson".into()),
            subject: strings(&["Plats", "Real property"]),
            date_created: strings(&["1913"]),
            city: strings(&["Minneapolis"]),
            state: strings(&["Minnesota"]),
            country: strings(&["United States"]),
            thumb_url: Some("https://thumbs.example/123.jpg".into()),
            system_identifier: Some("sys-123".into()),
            local_rights: Some("Public domain".into()),
            ..record("123", "abc", 456)
        };
        let second = SourceRecord {
            title: Some("Europe".into()),
            continent: strings(&["Europe"]),
            region: strings(&["Western Europe"]),
            ..record("124", "abc", 457)
        };
        let third = SourceRecord {
            description: Some("Sketch".into()),
            parent_id: Some(ParentId::Text("99".into())),
            ..record("p1:7", "coll2", 0)
        };
        vec![first, second, third]
    }

    #[test]
    fn test_maps_documented_rows() {
        let rows = RecordMapper::default().map_all(&sample_records()).unwrap();
        assert_eq!(rows.len(), 3);

        let first = &rows[0];
        assert_eq!(first.title, "");
        assert_eq!(first.alternative_title, "Minneapolis plat");
        assert_eq!(first.description, "Plat of the city. Dimensions: 40 x 50 cm");
        assert_eq!(first.language, "English; French");
        assert_eq!(first.creator, "Hudson Map Co.");
        assert_eq!(first.publisher, "Hudson");
        assert_eq!(first.keyword, "Plats|Real property");
        assert_eq!(first.date_issued, "1913");
        assert_eq!(first.spatial_coverage, "Minneapolis, Minnesota");
        assert_eq!(first.information, "https://umedia.lib.umn.edu/item/123");
        assert_eq!(
            first.download,
            "http://cdm16022.contentdm.oclc.org/utils/getfile/collection/abc/id/456/filename/print/page/download/fparams/forcedownload"
        );
        assert_eq!(first.image, "https://thumbs.example/123.jpg");
        assert_eq!(
            first.manifest,
            "https://cdm16022.contentdm.oclc.org/iiif/info/abc/456/manifest.json"
        );
        assert_eq!(first.identifier, "sys-123");
        assert_eq!(first.slug, "123");
        assert_eq!(first.access_rights, "Public domain");
        assert_eq!(first.provenance, "University of Minnesota");
        assert_eq!(first.code, "05d-01");
        assert_eq!(first.is_part_of, "05d-01");
        assert_eq!(first.suppressed, "FALSE");

        let second = &rows[1];
        assert_eq!(second.description, " Dimensions: ");
        assert_eq!(second.spatial_coverage, "Europe");
        assert_eq!(second.language, "");
        assert_eq!(second.slug, "124");

        let third = &rows[2];
        assert_eq!(third.description, "Sketch Dimensions: ");
        assert_eq!(third.spatial_coverage, "");
        assert_eq!(
            third.manifest,
            "https://cdm16022.contentdm.oclc.org/iiif/info/coll2/99/manifest.json"
        );
        assert_eq!(third.information, "https://umedia.lib.umn.edu/item/p1:7");
    }

    #[test]
    fn test_preserves_fetch_order() {
        let records = vec![record("b", "s", 1), record("a", "s", 2), record("c", "s", 3)];
        let slugs: Vec<_> = RecordMapper::default()
            .map_all(&records)
            .unwrap()
            .into_iter()
            .map(|row| row.slug)
            .collect();
        assert_eq!(slugs, ["b", "a", "c"]);
    }

    #[test]
    fn test_constant_columns_identical_across_rows() {
        let rows = RecordMapper::default().map_all(&sample_records()).unwrap();
        let constant = [
            "Provenance",
            "Code",
            "Is Part Of",
            "Status",
            "Accrual Method",
            "Rights",
            "Genre",
            "Type",
            "Format",
            "Geometry Type",
            "Suppressed",
            "Child",
            "Title",
            "Subject",
            "Temporal Coverage",
            "Date Range",
            "Bounding Box",
            "Date Accessioned",
        ];
        for name in constant {
            let column = HEADER.iter().position(|h| *h == name).unwrap();
            let first = rows[0].values()[column];
            assert!(
                rows.iter().all(|row| row.values()[column] == first),
                "column {name} differs between rows"
            );
        }
    }

    #[test]
    fn test_spatial_coverage_chain_order() {
        let mut r = SourceRecord {
            country: strings(&["United States"]),
            continent: strings(&["North America"]),
            region: strings(&["Upper Midwest"]),
            ..SourceRecord::default()
        };
        assert_eq!(spatial_coverage(&r), "United States");

        r.country.clear();
        assert_eq!(spatial_coverage(&r), "North America");

        r.continent.clear();
        assert_eq!(spatial_coverage(&r), "Upper Midwest");

        r.state = strings(&["Minnesota"]);
        assert_eq!(spatial_coverage(&r), "Minnesota");

        r.city = strings(&["Duluth"]);
        assert_eq!(spatial_coverage(&r), "Duluth, Minnesota");
    }

    #[test]
    fn test_first_non_empty_short_circuits() {
        let chain: [Extractor; 3] = [
            |_| String::new(),
            |_| "second".to_string(),
            |_| panic!("evaluated past the first non-empty candidate"),
        ];
        assert_eq!(first_non_empty(&SourceRecord::default(), &chain), "second");
    }

    #[test]
    fn test_missing_required_field_aborts() {
        let mut records = vec![record("1", "s", 1), record("2", "s", 2)];
        records[1].set_spec = None;

        match RecordMapper::default().map_all(&records) {
            Err(AppError::MissingField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "set_spec");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_blank_id_is_missing() {
        let r = record("  ", "s", 1);
        assert!(matches!(
            RecordMapper::default().map_record(0, &r),
            Err(AppError::MissingField { field: "id", .. })
        ));
    }

    #[test]
    fn test_id_copied_verbatim() {
        let r = record(" p1:7 ", "s", 1);
        let row = RecordMapper::default().map_record(0, &r).unwrap();
        assert_eq!(row.slug, " p1:7 ");
        assert_eq!(row.information, "https://umedia.lib.umn.edu/item/ p1:7 ");
    }

    #[test]
    fn test_custom_constants_apply() {
        let constants = ConstantColumns {
            provenance: "Elsewhere".into(),
            ..ConstantColumns::default()
        };
        let mapper = RecordMapper::new(LinkTemplates::default(), constants);
        let row = mapper.map_record(0, &record("1", "s", 1)).unwrap();
        assert_eq!(row.provenance, "Elsewhere");
        assert_eq!(row.genre, "Maps");
    }
}

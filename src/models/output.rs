//! Report row structure.

use serde::{Deserialize, Serialize};

/// Column names of the report, in output order.
pub const HEADER: [&str; 33] = [
    "Title",
    "Alternative Title",
    "Description",
    "Language",
    "Creator",
    "Publisher",
    "Subject",
    "Keyword",
    "Date Issued",
    "Temporal Coverage",
    "Date Range",
    "Spatial Coverage",
    "Bounding Box",
    "Information",
    "Download",
    "Image",
    "Manifest",
    "Identifier",
    "Slug",
    "Access Rights",
    "Provenance",
    "Code",
    "Is Part Of",
    "Status",
    "Accrual Method",
    "Date Accessioned",
    "Rights",
    "Genre",
    "Type",
    "Format",
    "Geometry Type",
    "Suppressed",
    "Child",
];

/// One row of the report.
///
/// Field order matches [`HEADER`]; columns without a derivation rule stay
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Alternative Title")]
    pub alternative_title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Creator")]
    pub creator: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Date Issued")]
    pub date_issued: String,
    #[serde(rename = "Temporal Coverage")]
    pub temporal_coverage: String,
    #[serde(rename = "Date Range")]
    pub date_range: String,
    #[serde(rename = "Spatial Coverage")]
    pub spatial_coverage: String,
    #[serde(rename = "Bounding Box")]
    pub bounding_box: String,
    #[serde(rename = "Information")]
    pub information: String,
    #[serde(rename = "Download")]
    pub download: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Manifest")]
    pub manifest: String,
    #[serde(rename = "Identifier")]
    pub identifier: String,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "Access Rights")]
    pub access_rights: String,
    #[serde(rename = "Provenance")]
    pub provenance: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Is Part Of")]
    pub is_part_of: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Accrual Method")]
    pub accrual_method: String,
    #[serde(rename = "Date Accessioned")]
    pub date_accessioned: String,
    #[serde(rename = "Rights")]
    pub rights: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Format")]
    pub format: String,
    #[serde(rename = "Geometry Type")]
    pub geometry_type: String,
    #[serde(rename = "Suppressed")]
    pub suppressed: String,
    #[serde(rename = "Child")]
    pub child: String,
}

impl OutputRecord {
    /// Values in [`HEADER`] order.
    pub fn values(&self) -> [&str; 33] {
        [
            &self.title,
            &self.alternative_title,
            &self.description,
            &self.language,
            &self.creator,
            &self.publisher,
            &self.subject,
            &self.keyword,
            &self.date_issued,
            &self.temporal_coverage,
            &self.date_range,
            &self.spatial_coverage,
            &self.bounding_box,
            &self.information,
            &self.download,
            &self.image,
            &self.manifest,
            &self.identifier,
            &self.slug,
            &self.access_rights,
            &self.provenance,
            &self.code,
            &self.is_part_of,
            &self.status,
            &self.accrual_method,
            &self.date_accessioned,
            &self.rights,
            &self.genre,
            &self.resource_type,
            &self.format,
            &self.geometry_type,
            &self.suppressed,
            &self.child,
        ]
    }
}

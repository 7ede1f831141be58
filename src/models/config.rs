//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint and query settings
    #[serde(default)]
    pub api: ApiConfig,

    /// URL templates for the link columns
    #[serde(default)]
    pub links: LinkTemplates,

    /// Literal values written to every row
    #[serde(default)]
    pub constants: ConstantColumns,

    /// Report destination settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(AppError::config("api.endpoint is empty"));
        }
        Url::parse(&self.api.endpoint)
            .map_err(|e| AppError::config(format!("api.endpoint is not a URL: {e}")))?;
        if self.api.organization.trim().is_empty() {
            return Err(AppError::config("api.organization is empty"));
        }
        if self.api.query.trim().is_empty() {
            return Err(AppError::config("api.query is empty"));
        }
        if self.output.reports_dir.trim().is_empty() {
            return Err(AppError::config("output.reports_dir is empty"));
        }
        Ok(())
    }
}

/// Catalog search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint returning JSON
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Contributing organization facet value
    #[serde(default = "defaults::organization")]
    pub organization: String,

    /// Free-text query
    #[serde(default = "defaults::query")]
    pub query: String,

    /// Solr-style sort clause
    #[serde(default = "defaults::sort")]
    pub sort: String,

    /// User-Agent header for the request
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (0 disables the client-side timeout)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            organization: defaults::organization(),
            query: defaults::query(),
            sort: defaults::sort(),
            user_agent: defaults::user_agent(),
            timeout_secs: 0,
        }
    }
}

/// Prefixes and suffixes used to build the Information, Download and
/// Manifest columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTemplates {
    #[serde(default = "defaults::item_prefix")]
    pub item_prefix: String,

    #[serde(default = "defaults::download_prefix")]
    pub download_prefix: String,

    #[serde(default = "defaults::download_suffix")]
    pub download_suffix: String,

    #[serde(default = "defaults::manifest_prefix")]
    pub manifest_prefix: String,
}

impl LinkTemplates {
    /// Item landing page: `{item_prefix}{id}`.
    pub fn information(&self, id: &str) -> String {
        format!("{}{}", self.item_prefix, id)
    }

    /// Full-resolution download: `{download_prefix}{set_spec}/id/{parent_id}{download_suffix}`.
    pub fn download(&self, set_spec: &str, parent_id: &str) -> String {
        format!(
            "{}{}/id/{}{}",
            self.download_prefix, set_spec, parent_id, self.download_suffix
        )
    }

    /// IIIF manifest: `{manifest_prefix}{set_spec}/{parent_id}/manifest.json`.
    pub fn manifest(&self, set_spec: &str, parent_id: &str) -> String {
        format!(
            "{}{}/{}/manifest.json",
            self.manifest_prefix, set_spec, parent_id
        )
    }
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            item_prefix: defaults::item_prefix(),
            download_prefix: defaults::download_prefix(),
            download_suffix: defaults::download_suffix(),
            manifest_prefix: defaults::manifest_prefix(),
        }
    }
}

/// Literal column values shared by every row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantColumns {
    #[serde(default = "defaults::provenance")]
    pub provenance: String,
    #[serde(default = "defaults::code")]
    pub code: String,
    #[serde(default = "defaults::code")]
    pub is_part_of: String,
    #[serde(default = "defaults::status")]
    pub status: String,
    #[serde(default = "defaults::accrual_method")]
    pub accrual_method: String,
    #[serde(default = "defaults::rights")]
    pub rights: String,
    #[serde(default = "defaults::genre")]
    pub genre: String,
    #[serde(default = "defaults::image")]
    pub resource_type: String,
    #[serde(default = "defaults::format")]
    pub format: String,
    #[serde(default = "defaults::image")]
    pub geometry_type: String,
    #[serde(default = "defaults::flag_false")]
    pub suppressed: String,
    #[serde(default = "defaults::flag_false")]
    pub child: String,
}

impl Default for ConstantColumns {
    fn default() -> Self {
        Self {
            provenance: defaults::provenance(),
            code: defaults::code(),
            is_part_of: defaults::code(),
            status: defaults::status(),
            accrual_method: defaults::accrual_method(),
            rights: defaults::rights(),
            genre: defaults::genre(),
            resource_type: defaults::image(),
            format: defaults::format(),
            geometry_type: defaults::image(),
            suppressed: defaults::flag_false(),
            child: defaults::flag_false(),
        }
    }
}

/// Report destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the CSV reports
    #[serde(default = "defaults::reports_dir")]
    pub reports_dir: String,

    /// Filename prefix, followed by the run date as YYYYMMDD
    #[serde(default = "defaults::file_prefix")]
    pub file_prefix: String,

    /// Where to cache the raw search response (disabled when empty)
    #[serde(default = "defaults::raw_response_file")]
    pub raw_response_file: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            reports_dir: defaults::reports_dir(),
            file_prefix: defaults::file_prefix(),
            raw_response_file: defaults::raw_response_file(),
        }
    }
}

impl OutputConfig {
    /// Raw response cache path, if caching is enabled.
    pub fn raw_response_path(&self) -> Option<&str> {
        self.raw_response_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Report filename for a run on `date`.
    pub fn report_file_name(&self, date: chrono::NaiveDate) -> String {
        format!("{}{}.csv", self.file_prefix, date.format("%Y%m%d"))
    }
}

mod defaults {
    // API defaults
    pub fn endpoint() -> String {
        "https://umedia.lib.umn.edu/search.json".into()
    }
    pub fn organization() -> String {
        "University of Minnesota Libraries, John R. Borchert Map Library.".into()
    }
    pub fn query() -> String {
        "borchert".into()
    }
    pub fn sort() -> String {
        "date_added_sort desc, title_sort asc".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; map-harvest/0.1)".into()
    }

    // Link defaults
    pub fn item_prefix() -> String {
        "https://umedia.lib.umn.edu/item/".into()
    }
    pub fn download_prefix() -> String {
        "http://cdm16022.contentdm.oclc.org/utils/getfile/collection/".into()
    }
    pub fn download_suffix() -> String {
        "/filename/print/page/download/fparams/forcedownload".into()
    }
    pub fn manifest_prefix() -> String {
        "https://cdm16022.contentdm.oclc.org/iiif/info/".into()
    }

    // Constant column defaults
    pub fn provenance() -> String {
        "University of Minnesota".into()
    }
    pub fn code() -> String {
        "05d-01".into()
    }
    pub fn status() -> String {
        "Active".into()
    }
    pub fn accrual_method() -> String {
        "Blacklight".into()
    }
    pub fn rights() -> String {
        "Public".into()
    }
    pub fn genre() -> String {
        "Maps".into()
    }
    pub fn image() -> String {
        "Image".into()
    }
    pub fn format() -> String {
        "JPEG".into()
    }
    pub fn flag_false() -> String {
        "FALSE".into()
    }

    // Output defaults
    pub fn reports_dir() -> String {
        "reports".into()
    }
    pub fn file_prefix() -> String {
        "allNewItems_".into()
    }
    pub fn raw_response_file() -> Option<String> {
        Some("request_data.json".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_query() {
        let mut config = Config::default();
        config.api.query = "  ".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_reports_config_errors() {
        let mut config = Config::default();
        config.output.reports_dir = String::new();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = Config::default();
        config.api.endpoint = " ".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_rejects_relative_endpoint() {
        let mut config = Config::default();
        config.api.endpoint = "search.json".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            query = "plat"

            [output]
            reports_dir = "out"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.query, "plat");
        assert_eq!(config.api.sort, "date_added_sort desc, title_sort asc");
        assert_eq!(config.output.reports_dir, "out");
        assert_eq!(config.output.file_prefix, "allNewItems_");
        assert_eq!(config.constants, ConstantColumns::default());
    }

    #[test]
    fn empty_raw_response_file_disables_cache() {
        let mut output = OutputConfig::default();
        assert_eq!(output.raw_response_path(), Some("request_data.json"));
        output.raw_response_file = Some(" ".to_string());
        assert_eq!(output.raw_response_path(), None);
    }

    #[test]
    fn report_file_name_uses_run_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            OutputConfig::default().report_file_name(date),
            "allNewItems_20260307.csv"
        );
    }

    #[test]
    fn manifest_link_uses_set_spec_and_parent() {
        let links = LinkTemplates::default();
        assert_eq!(
            links.manifest("abc", "456"),
            "https://cdm16022.contentdm.oclc.org/iiif/info/abc/456/manifest.json"
        );
    }

    #[test]
    fn download_link_inserts_id_segment() {
        let links = LinkTemplates::default();
        assert_eq!(
            links.download("p16022coll205", "1234"),
            "http://cdm16022.contentdm.oclc.org/utils/getfile/collection/p16022coll205/id/1234/filename/print/page/download/fparams/forcedownload"
        );
    }

    #[test]
    fn information_link_appends_id() {
        let links = LinkTemplates::default();
        assert_eq!(
            links.information("p16022coll205:1234"),
            "https://umedia.lib.umn.edu/item/p16022coll205:1234"
        );
    }
}

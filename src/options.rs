//! Recognised options (SPEC_FULL §6.3): CLI flags, an optional config
//! file, and built-in defaults compose into one `Options` value before
//! analysis starts. Options the core doesn't recognise are preserved
//! verbatim via `serde_json::Value` passthrough rather than dropped.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CifIdScheme {
    Auth,
    Label,
}

impl Default for CifIdScheme {
    fn default() -> Self {
        CifIdScheme::Auth
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_filter: Option<BTreeSet<String>>,

    #[serde(default)]
    pub cif_ids: CifIdScheme,

    #[serde(default)]
    pub nmr_model: Option<i32>,

    #[serde(default)]
    pub chain_id_truncate: bool,

    #[serde(default)]
    pub resolution_max: Option<f64>,

    /// Anything the core doesn't recognise, round-tripped verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            chain_filter: None,
            cif_ids: CifIdScheme::default(),
            nmr_model: None,
            chain_id_truncate: false,
            resolution_max: None,
            extra: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Merges `override_opts` onto `self`, used to apply CLI flags over a
    /// loaded config file over the built-in default (SPEC_FULL §4.12
    /// precedence: CLI > config file > `Options::default()`).
    pub fn merge(mut self, override_opts: PartialOptions) -> Self {
        if let Some(chain_filter) = override_opts.chain_filter {
            self.chain_filter = Some(chain_filter);
        }
        if let Some(cif_ids) = override_opts.cif_ids {
            self.cif_ids = cif_ids;
        }
        if let Some(nmr_model) = override_opts.nmr_model {
            self.nmr_model = Some(nmr_model);
        }
        if let Some(chain_id_truncate) = override_opts.chain_id_truncate {
            self.chain_id_truncate = chain_id_truncate;
        }
        if let Some(resolution_max) = override_opts.resolution_max {
            self.resolution_max = Some(resolution_max);
        }
        self
    }
}

/// Sparse view of [`Options`] used to express "only what was explicitly
/// set on the command line", so `merge` can tell a flag apart from its
/// default value.
#[derive(Debug, Clone, Default)]
pub struct PartialOptions {
    pub chain_filter: Option<BTreeSet<String>>,
    pub cif_ids: Option<CifIdScheme>,
    pub nmr_model: Option<i32>,
    pub chain_id_truncate: Option<bool>,
    pub resolution_max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_has_no_chain_filter() {
        let options = Options::default();
        assert!(options.chain_filter.is_none());
        assert_eq!(options.cif_ids, CifIdScheme::Auth);
    }

    #[test]
    fn merge_overrides_only_set_fields() {
        let base = Options::default();
        let partial = PartialOptions {
            chain_id_truncate: Some(true),
            ..Default::default()
        };
        let merged = base.merge(partial);
        assert!(merged.chain_id_truncate);
        assert!(merged.nmr_model.is_none());
    }

    #[test]
    fn unrecognised_fields_round_trip_through_json() {
        let json = serde_json::json!({ "resolution_max": 2.5, "legacy_flag": true });
        let options: Options = serde_json::from_value(json).unwrap();
        assert_eq!(options.resolution_max, Some(2.5));
        assert_eq!(options.extra.get("legacy_flag"), Some(&serde_json::Value::Bool(true)));
    }
}

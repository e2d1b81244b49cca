use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Parameter domains for one batch of simulator invocations.
///
/// Field defaults reproduce the built-in sweep, so a spec file only needs to
/// name the domains it overrides. Domain order is significant: combinations
/// are enumerated in declared order, loads are not sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSpec {
    /// Target fractional network loads.
    #[serde(default = "default_loads")]
    pub loads: Vec<f64>,

    /// PFC settings, each 0 (off) or 1 (on).
    #[serde(default = "default_pfc_variants")]
    pub pfc_variants: Vec<u8>,

    /// Congestion-control variant identifiers; 0 is the baseline.
    #[serde(default = "default_cc_variants")]
    pub cc_variants: Vec<u8>,

    /// Traffic dataset names; `datasets[i]` pairs with `durations[i]`.
    #[serde(default = "default_datasets")]
    pub datasets: Vec<String>,

    /// Run durations in seconds, index-aligned with `datasets`.
    #[serde(default = "default_durations")]
    pub durations: Vec<String>,

    /// Invocation prefix up to and including the opening quote of the
    /// simulator argument string, trailing space included.
    #[serde(default = "default_command_template")]
    pub command_template: String,

    /// Prefix for generated log file names.
    #[serde(default)]
    pub output_prefix: String,
}

fn default_loads() -> Vec<f64> {
    vec![0.3, 0.4, 0.5, 0.6, 0.7]
}

fn default_pfc_variants() -> Vec<u8> {
    vec![0, 1]
}

fn default_cc_variants() -> Vec<u8> {
    vec![0, 1]
}

fn default_datasets() -> Vec<String> {
    vec!["Storage".to_string()]
}

fn default_durations() -> Vec<String> {
    vec!["0.2".to_string()]
}

fn default_command_template() -> String {
    r#"nohup ./ns3 run "scratch/pfc "#.to_string()
}

impl Default for SweepSpec {
    fn default() -> Self {
        SweepSpec {
            loads: default_loads(),
            pfc_variants: default_pfc_variants(),
            cc_variants: default_cc_variants(),
            datasets: default_datasets(),
            durations: default_durations(),
            command_template: default_command_template(),
            output_prefix: String::new(),
        }
    }
}

impl SweepSpec {
    /// Read a spec from a JSON file.
    ///
    /// The result is not validated here; rendering validates before emitting
    /// anything, so callers that only inspect the spec can load it as-is.
    pub fn load_json(path: &Path) -> Result<SweepSpec, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Check the invariants the enumerator relies on: every required domain
    /// non-empty, datasets and durations of equal length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.datasets.len() != self.durations.len() {
            return Err(ConfigError::MisalignedDurations {
                datasets: self.datasets.len(),
                durations: self.durations.len(),
            });
        }
        for (domain, len) in [
            ("loads", self.loads.len()),
            ("pfc_variants", self.pfc_variants.len()),
            ("cc_variants", self.cc_variants.len()),
            ("datasets", self.datasets.len()),
        ] {
            if len == 0 {
                return Err(ConfigError::EmptyDomain { domain });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_matches_builtin_domains() {
        let spec = SweepSpec::default();
        assert_eq!(spec.loads, vec![0.3, 0.4, 0.5, 0.6, 0.7]);
        assert_eq!(spec.pfc_variants, vec![0, 1]);
        assert_eq!(spec.cc_variants, vec![0, 1]);
        assert_eq!(spec.datasets, vec!["Storage".to_string()]);
        assert_eq!(spec.durations, vec!["0.2".to_string()]);
        assert_eq!(spec.command_template, r#"nohup ./ns3 run "scratch/pfc "#);
        assert!(spec.output_prefix.is_empty());
        spec.validate().expect("default spec must validate");
    }

    #[test]
    fn validate_rejects_misaligned_durations() {
        let spec = SweepSpec {
            datasets: vec!["Storage".to_string(), "WebSearch".to_string()],
            durations: vec!["0.2".to_string()],
            ..SweepSpec::default()
        };
        let err = spec.validate().expect_err("misaligned spec must fail");
        assert!(matches!(
            err,
            ConfigError::MisalignedDurations {
                datasets: 2,
                durations: 1
            }
        ));
    }

    #[test]
    fn validate_rejects_empty_domains() {
        for domain in ["loads", "pfc_variants", "cc_variants", "datasets"] {
            let mut spec = SweepSpec::default();
            match domain {
                "loads" => spec.loads.clear(),
                "pfc_variants" => spec.pfc_variants.clear(),
                "cc_variants" => spec.cc_variants.clear(),
                "datasets" => {
                    spec.datasets.clear();
                    spec.durations.clear();
                }
                _ => unreachable!(),
            }
            let err = spec.validate().expect_err("empty domain must fail");
            assert!(
                matches!(err, ConfigError::EmptyDomain { domain: d } if d == domain),
                "wrong error for empty {domain}"
            );
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let spec: SweepSpec =
            serde_json::from_str(r#"{ "loads": [0.1], "output_prefix": "runs/" }"#)
                .expect("parse partial spec");
        assert_eq!(spec.loads, vec![0.1]);
        assert_eq!(spec.output_prefix, "runs/");
        assert_eq!(spec.pfc_variants, vec![0, 1]);
        assert_eq!(spec.datasets, vec!["Storage".to_string()]);
        assert_eq!(spec.command_template, r#"nohup ./ns3 run "scratch/pfc "#);
    }
}

use std::{path::Path, path::PathBuf, sync::Arc};

use dotenv::dotenv;
use eyre::{Error, OptionExt as _};
use log::info;

const DEFAULT_TEMPLATE_DIR: &str = "report";
const DEFAULT_RUST_LOG: &str = "info";

#[derive(Clone, Debug)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone, Debug)]
pub struct EnvInner {
    coach_name: Option<String>,
    report_template_dir: PathBuf,
    rust_log: String,
}

impl Env {
    /// Fails when `COACH_NAME` is not set.
    pub fn coach_name(&self) -> Result<&str, Error> {
        self.0
            .coach_name
            .as_deref()
            .ok_or_eyre("COACH_NAME is not set")
    }

    pub fn report_template_dir(&self) -> &Path {
        &self.0.report_template_dir
    }

    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    pub fn load() -> Env {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }
        Env::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Env {
        let coach_name = lookup("COACH_NAME").filter(|name| !name.trim().is_empty());
        let report_template_dir = lookup("REPORT_TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR));
        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_owned());

        Env(Arc::new(EnvInner {
            coach_name,
            report_template_dir,
            rust_log,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Env {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Env::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let env = env(&[("COACH_NAME", "Coach")]);
        assert_eq!(env.coach_name().unwrap(), "Coach");
        assert_eq!(env.report_template_dir(), Path::new("report"));
        assert_eq!(env.rust_log(), "info");
    }

    #[test]
    fn test_overrides() {
        let env = env(&[
            ("COACH_NAME", "Coach"),
            ("REPORT_TEMPLATE_DIR", "/etc/reports"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(env.report_template_dir(), Path::new("/etc/reports"));
        assert_eq!(env.rust_log(), "debug");
    }

    #[test]
    fn test_missing_coach_name() {
        let env_without_coach = env(&[("RUST_LOG", "warn")]);
        assert_eq!(env_without_coach.rust_log(), "warn");
        let err = env_without_coach.coach_name().unwrap_err();
        assert!(err.to_string().contains("COACH_NAME"));

        assert!(env(&[("COACH_NAME", "  ")]).coach_name().is_err());
    }
}

use crate::Error;
use std::{env, fmt::Display};

#[derive(Debug, Clone)]
pub struct Configuration {
    log: bool,
    check: bool,
}

fn parse_bool(value: &str) -> Result<bool, ()> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(()),
    }
}

fn var_map<T, E>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|_| Error::new(format!("Invalid {} {}", key, value))),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let log = var_map(&lookup, "LOG", parse_bool, Some(true))?;
        let check = var_map(&lookup, "CHECK", parse_bool, Some(true))?;
        Ok(Self { log, check })
    }

    pub fn log(&self) -> bool {
        self.log
    }

    pub fn check(&self) -> bool {
        self.check
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "LOG={} CHECK={}", self.log, self.check)
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use std::collections::HashMap;

    fn configuration(vars: &[(&str, &str)]) -> Result<Configuration, crate::Error> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Configuration::from_lookup(move |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert!(configuration.log());
        assert!(configuration.check());
    }

    #[test]
    fn overrides() {
        let configuration = configuration(&[("LOG", "0"), ("CHECK", "false")]).unwrap();
        assert!(!configuration.log());
        assert!(!configuration.check());
        assert_eq!(configuration.to_string(), "LOG=false CHECK=false");
    }

    #[test]
    fn invalid() {
        let error = configuration(&[("LOG", "bogus")]).unwrap_err();
        assert_eq!(error.message(), "Invalid LOG bogus");
    }
}

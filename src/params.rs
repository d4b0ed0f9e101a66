//! Request parameter descriptors and resolution.
//!
//! Every remote operation declares its parameters once, as a static
//! [`Endpoint`] descriptor. The request builder consults that descriptor to
//! merge call arguments with built-in and client-level defaults, so a default
//! configured on the client reaches every operation that declares a parameter
//! of the same name.

use std::collections::HashMap;

use crate::error::{BabelNetError, Result};

/// Ordered query parameters for a single request.
pub type QueryParams = Vec<(&'static str, String)>;

/// Declaration of a single request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as sent on the wire.
    pub name: &'static str,
    /// Whether the caller must supply a value.
    pub required: bool,
    /// Value used when an optional argument is omitted.
    pub builtin_default: Option<&'static str>,
}

impl ParamSpec {
    /// A mandatory parameter.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            builtin_default: None,
        }
    }

    /// An optional parameter without a built-in default.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            builtin_default: None,
        }
    }

    /// Attach a built-in default to this parameter.
    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.builtin_default = Some(value);
        self
    }
}

/// A named remote operation and the parameters it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Endpoint path relative to the base URL (e.g. `getSenses`).
    pub name: &'static str,
    /// Declared parameters, in positional order.
    pub params: &'static [ParamSpec],
}

impl Endpoint {
    /// Resolve positional call arguments into query parameters.
    ///
    /// For each declared parameter, in order: a non-empty argument wins;
    /// an optional parameter then falls back to its built-in default and
    /// then to the client default of the same name. Anything still empty
    /// is left out of the request.
    ///
    /// # Errors
    ///
    /// Returns [`BabelNetError::MissingParameter`] if a required parameter
    /// has no value.
    pub fn resolve(&self, args: &[Option<&str>], defaults: &DefaultParams) -> Result<QueryParams> {
        debug_assert!(
            args.len() <= self.params.len(),
            "{} takes {} arguments, got {}",
            self.name,
            self.params.len(),
            args.len()
        );

        let mut resolved = Vec::with_capacity(self.params.len());

        for (position, spec) in self.params.iter().enumerate() {
            let explicit = args
                .get(position)
                .copied()
                .flatten()
                .filter(|v| !v.is_empty());

            let value = match explicit {
                Some(v) => Some(v),
                None if spec.required => None,
                None => spec
                    .builtin_default
                    .filter(|v| !v.is_empty())
                    .or_else(|| defaults.get(spec.name)),
            };

            match value {
                Some(v) => resolved.push((spec.name, v.to_string())),
                None if spec.required => return Err(BabelNetError::MissingParameter(spec.name)),
                None => {}
            }
        }

        Ok(resolved)
    }

    /// Names of the declared parameters, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|p| p.name)
    }
}

/// Client-level fallback values, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultParams {
    values: HashMap<String, String>,
}

impl DefaultParams {
    /// Create an empty set of defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a default. Empty values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Number of configured defaults.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no defaults are configured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a `name=value` pair.
    ///
    /// # Errors
    ///
    /// Returns a message if the input has no `=` or an empty name.
    pub fn parse_pair(input: &str) -> core::result::Result<(String, String), String> {
        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got '{input}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("empty parameter name in '{input}'"));
        }
        Ok((name.to_string(), value.trim().to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DefaultParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for DefaultParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl From<HashMap<String, String>> for DefaultParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKUP: Endpoint = Endpoint {
        name: "lookup",
        params: &[
            ParamSpec::required("word"),
            ParamSpec::optional("lang").with_default("IT"),
            ParamSpec::optional("pos"),
        ],
    };

    #[test]
    fn explicit_argument_wins() {
        let defaults = DefaultParams::new().with("lang", "DE").with("pos", "VERB");
        let params = LOOKUP
            .resolve(&[Some("cane"), Some("FR"), Some("NOUN")], &defaults)
            .unwrap();
        assert_eq!(
            params,
            vec![
                ("word", "cane".to_string()),
                ("lang", "FR".to_string()),
                ("pos", "NOUN".to_string()),
            ]
        );
    }

    #[test]
    fn builtin_default_beats_client_default() {
        let defaults = DefaultParams::new().with("lang", "DE");
        let params = LOOKUP.resolve(&[Some("cane")], &defaults).unwrap();
        assert_eq!(params[1], ("lang", "IT".to_string()));
    }

    #[test]
    fn client_default_fills_missing_optional() {
        let defaults = DefaultParams::new().with("pos", "NOUN");
        let params = LOOKUP.resolve(&[Some("cane"), None, None], &defaults).unwrap();
        assert_eq!(params[2], ("pos", "NOUN".to_string()));
    }

    #[test]
    fn empty_argument_falls_through_to_defaults() {
        let defaults = DefaultParams::new().with("pos", "ADJ");
        let params = LOOKUP
            .resolve(&[Some("cane"), Some(""), Some("")], &defaults)
            .unwrap();
        assert_eq!(params[1], ("lang", "IT".to_string()));
        assert_eq!(params[2], ("pos", "ADJ".to_string()));
    }

    #[test]
    fn unresolved_optional_is_omitted() {
        let defaults = DefaultParams::new().with("pos", "");
        let params = LOOKUP.resolve(&[Some("cane")], &defaults).unwrap();
        assert!(params.iter().all(|(name, _)| *name != "pos"));
    }

    #[test]
    fn required_parameter_ignores_defaults() {
        let defaults = DefaultParams::new().with("word", "dog");
        let err = LOOKUP.resolve(&[None], &defaults).unwrap_err();
        assert!(matches!(err, BabelNetError::MissingParameter("word")));

        let err = LOOKUP.resolve(&[Some("")], &defaults).unwrap_err();
        assert!(matches!(err, BabelNetError::MissingParameter("word")));
    }

    #[test]
    fn resolution_keeps_declaration_order() {
        let defaults = DefaultParams::new().with("pos", "NOUN").with("lang", "EN");
        let params = LOOKUP.resolve(&[Some("cane")], &defaults).unwrap();
        let names: Vec<_> = params.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, LOOKUP.param_names().collect::<Vec<_>>());
    }

    #[test]
    fn parse_pair_accepts_name_value() {
        assert_eq!(
            DefaultParams::parse_pair("lang=EN"),
            Ok(("lang".to_string(), "EN".to_string()))
        );
        assert_eq!(
            DefaultParams::parse_pair("source=WIKI=x"),
            Ok(("source".to_string(), "WIKI=x".to_string()))
        );
        assert!(DefaultParams::parse_pair("lang").is_err());
        assert!(DefaultParams::parse_pair("=EN").is_err());
    }

    #[test]
    fn defaults_collect_from_pairs() {
        let defaults: DefaultParams = vec![("lang", "EN"), ("pos", "NOUN")].into_iter().collect();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults.get("lang"), Some("EN"));
        assert_eq!(defaults.get("source"), None);
    }
}

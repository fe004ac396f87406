use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type Metadata = BTreeMap<String, Value>;

/// Name of a view owned by the rendering side. The table never owns the view
/// itself, the client looks this up in its view registry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ViewRef(String);

impl ViewRef {
    pub fn new(name: impl Into<String>) -> Self {
        ViewRef(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub name: String,
    pub component: ViewRef,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>, component: ViewRef) -> Self {
        RouteDescriptor {
            path: path.into(),
            aliases: Vec::new(),
            name: name.into(),
            component,
            metadata: Metadata::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Canonical path first, then aliases in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.path.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    pub fn matches(&self, path: &str) -> bool {
        self.paths().any(|p| p == path)
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_defaults_to_empty() {
        let route = RouteDescriptor::new("Begin", "/Begin", ViewRef::new("Begin"));
        assert!(route.metadata.is_empty());
        assert_eq!(route.title(), None);

        let parsed: RouteDescriptor =
            serde_json::from_value(json!({"path": "/Begin", "name": "Begin", "component": "Begin"})).unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn title_only_reads_strings() {
        let route = RouteDescriptor::new("Home", "/", ViewRef::new("Home")).meta("title", json!(3));
        assert_eq!(route.title(), None);

        let route = route.meta("title", json!("home"));
        assert_eq!(route.title(), Some("home"));
    }

    #[test]
    fn paths_list_canonical_before_aliases() {
        let route = RouteDescriptor::new("Home", "/", ViewRef::new("Home"))
            .alias("/Home")
            .alias("/index");
        assert_eq!(route.paths().collect::<Vec<_>>(), vec!["/", "/Home", "/index"]);
        assert!(route.matches("/index"));
        assert!(!route.matches("/home"));
    }
}

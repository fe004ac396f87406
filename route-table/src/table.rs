use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptor::RouteDescriptor;

/// How the navigation engine maps locations onto URLs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Plain paths. The host has to serve the app shell for every route path.
    #[default]
    History,
    /// Routes live after a `#` in the URL.
    Hash,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    #[error("route name {0:?} is declared more than once")]
    DuplicateName(String),
    #[error("path {path:?} is claimed by both {first:?} and {second:?}")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
}

/// Ordered, read-only set of routes handed to the navigation engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RouteTable {
    mode: NavigationMode,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(mode: NavigationMode, routes: Vec<RouteDescriptor>) -> Self {
        RouteTable { mode, routes }
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn into_parts(self) -> (NavigationMode, Vec<RouteDescriptor>) {
        (self.mode, self.routes)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    /// Every canonical and alias path with the route it belongs to, in table order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &RouteDescriptor)> {
        self.routes.iter().flat_map(|r| r.paths().map(move |p| (p, r)))
    }

    /// Finds the route for a pathname, canonical or alias. A trailing slash is
    /// ignored except on the root path. There is no fallback entry.
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor> {
        let path = trim_trailing_slash(path);
        let found = self.routes.iter().find(|r| r.matches(path));
        if found.is_none() {
            log::debug!("no route registered for {path:?}");
        }
        found
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// The path navigation reports for `path`, so aliases map back to their
    /// route's canonical path.
    pub fn canonical_path(&self, path: &str) -> Option<&str> {
        self.resolve(path).map(|r| r.path.as_str())
    }

    /// Duplicate names and paths claimed by more than one name. Building a
    /// table never checks this; it is up to whoever consumes the table.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        let mut names: HashMap<&str, usize> = HashMap::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for route in &self.routes {
            let seen = names.entry(route.name.as_str()).or_insert(0);
            *seen += 1;
            if *seen == 2 {
                conflicts.push(Conflict::DuplicateName(route.name.clone()));
            }

            for path in route.paths() {
                match owners.get(path) {
                    Some(first) if *first != route.name => conflicts.push(Conflict::DuplicatePath {
                        path: path.to_string(),
                        first: first.to_string(),
                        second: route.name.clone(),
                    }),
                    Some(_) => {}
                    None => {
                        owners.insert(path, route.name.as_str());
                    }
                }
            }
        }

        conflicts
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(rest) if rest.len() > 1 => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build, ViewRef};

    fn route(name: &str, path: &str) -> RouteDescriptor {
        RouteDescriptor::new(name, path, ViewRef::new(name))
    }

    #[test]
    fn trailing_slash_is_ignored_except_on_root() {
        let table = build();
        assert_eq!(table.resolve("/Begin/"), table.resolve("/Begin"));
        assert_eq!(table.resolve("/Home/").map(|r| r.name.as_str()), Some("Home"));
        assert_eq!(table.resolve("/").map(|r| r.name.as_str()), Some("Home"));
        assert!(table.resolve("//").is_none());
        assert!(table.canonical_path("//").is_none());
        assert!(table.resolve("").is_none());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let table = build();
        assert!(table.resolve("/begin").is_none());
        assert!(table.resolve("/home").is_none());
    }

    #[test]
    fn lookup_by_name() {
        let table = build();
        assert_eq!(table.by_name("Begin").map(|r| r.path.as_str()), Some("/Begin"));
        assert!(table.by_name("begin").is_none());
    }

    #[test]
    fn paths_cover_canonical_and_alias_in_order() {
        let table = build();
        let paths: Vec<(&str, &str)> = table.paths().map(|(p, r)| (p, r.name.as_str())).collect();
        assert_eq!(paths, vec![("/", "Home"), ("/Home", "Home"), ("/Begin", "Begin")]);
    }

    #[test]
    fn reports_duplicate_names_and_paths() {
        let table = RouteTable::new(
            NavigationMode::History,
            vec![
                route("Home", "/").alias("/Begin"),
                route("Begin", "/Begin"),
                route("Home", "/other"),
            ],
        );

        assert_eq!(
            table.conflicts(),
            vec![
                Conflict::DuplicatePath {
                    path: "/Begin".into(),
                    first: "Home".into(),
                    second: "Begin".into(),
                },
                Conflict::DuplicateName("Home".into()),
            ]
        );
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NavigationMode::History).unwrap(), "\"history\"");
        assert_eq!(build().mode(), NavigationMode::History);
    }
}

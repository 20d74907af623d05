use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A `<properties>` block: name -> text, remembering the order in which names
/// were first seen.
///
/// The map and the order list are private and only change together, so every
/// name in the order has exactly one value and every value has exactly one
/// position. Re-inserting an existing name overwrites its value but keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<String, String>,
    order: Vec<String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`. Returns the value it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.entries.get_mut(&name) {
            return Some(std::mem::replace(slot, value));
        }
        self.order.push(name.clone());
        self.entries.insert(name, value);
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove `name` from both the map and the order list.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let value = self.entries.remove(name)?;
        self.order.retain(|n| n != name);
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(move |name| {
            let value = self.entries.get(name);
            debug_assert!(value.is_some(), "property '{name}' is ordered but has no value");
            value.map(|v| (name.as_str(), v.as_str()))
        })
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.entries == other.entries
    }
}

impl Eq for Properties {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = Properties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property names to text values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Properties, A::Error> {
                let mut props = Properties::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    props.insert(name, value);
                }
                Ok(props)
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let props: Properties = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_overwrites_value_but_not_position() {
        let props: Properties = [("x", "1"), ("y", "2"), ("x", "3")].into_iter().collect();
        assert_eq!(props.len(), 2);
        assert_eq!(
            props.iter().collect::<Vec<_>>(),
            vec![("x", "3"), ("y", "2")]
        );
    }

    #[test]
    fn insert_returns_replaced_value() {
        let mut props = Properties::new();
        assert_eq!(props.insert("k", "v1"), None);
        assert_eq!(props.insert("k", "v2"), Some("v1".to_owned()));
        assert_eq!(props.get("k"), Some("v2"));
    }

    #[test]
    fn remove_drops_name_from_order() {
        let mut props: Properties = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(props.remove("b"), Some("2".to_owned()));
        assert!(!props.contains_key("b"));
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(props.remove("b"), None);

        props.insert("b", "4");
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: Properties = [("a", "1"), ("b", "2")].into_iter().collect();
        let b: Properties = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn json_keeps_order() {
        let props: Properties = [("zeta", "1"), ("alpha", "2")].into_iter().collect();
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);

        let back: Properties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn empty_block() {
        let props = Properties::new();
        assert!(props.is_empty());
        assert_eq!(props.iter().count(), 0);
    }
}

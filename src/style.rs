//! Inline `style` attributes.

use std::collections::HashMap;

/// The declarations of an inline `style="fill:red; stroke:blue"` attribute.
///
/// Only plain `name:value` pairs are understood.  A segment that does not have
/// exactly one colon, or whose name or value is empty, is dropped without failing
/// the rest of the string.  If a name appears more than once, the last value wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleSet {
    styles: HashMap<String, String>,
}

impl StyleSet {
    pub fn parse(s: &str) -> StyleSet {
        let styles = s
            .split(';')
            .filter_map(|declaration| {
                let mut parts = declaration.split(':');

                match (parts.next(), parts.next(), parts.next()) {
                    (Some(name), Some(value), None) => {
                        let (name, value) = (name.trim(), value.trim());

                        if name.is_empty() || value.is_empty() {
                            None
                        } else {
                            Some((name.to_string(), value.to_string()))
                        }
                    }

                    _ => None,
                }
            })
            .collect();

        StyleSet { styles }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

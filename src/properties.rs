//! Lookup of presentation properties for one element.
//!
//! The resolver never walks the document itself.  Whoever walks it hands in an
//! [`SvgProperties`] per element, which must already answer with the cascaded
//! value: inline `style` first, then the element's attributes, then whatever the
//! ancestors specified.
//!
//! [`Properties`] is a simple implementation of that cascade.  Anything else that
//! can answer string lookups, like a DOM binding, can implement the trait directly.

use std::collections::HashMap;

use crate::parsers::{Parse, UserNumber};
use crate::style::StyleSet;

/// Cascaded property lookups for a single element.
pub trait SvgProperties {
    /// The value of the property, if it is specified anywhere in the cascade.
    fn string_property(&self, name: &str) -> Option<&str>;

    /// The property parsed as a number in user units.
    ///
    /// A value that is present but not a valid number reads as absent.
    fn float_property(&self, name: &str) -> Option<f64> {
        self.string_property(name)
            .and_then(|s| UserNumber::parse_str(s).ok())
            .map(|UserNumber(n)| n)
    }

    fn float_property_or(&self, name: &str, default: f64) -> f64 {
        self.float_property(name).unwrap_or(default)
    }
}

impl SvgProperties for StyleSet {
    fn string_property(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl SvgProperties for HashMap<String, String> {
    fn string_property(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Properties of one element, with an optional parent to inherit from.
#[derive(Debug, Default, Clone)]
pub struct Properties<'a> {
    style: StyleSet,
    attributes: HashMap<String, String>,
    parent: Option<&'a Properties<'a>>,
}

impl<'a> Properties<'a> {
    pub fn new() -> Properties<'a> {
        Properties::default()
    }

    /// Creates an empty set of properties that inherits from `parent`.
    pub fn with_parent(parent: &'a Properties<'a>) -> Properties<'a> {
        Properties {
            parent: Some(parent),
            ..Properties::default()
        }
    }

    /// Builds properties out of an element's attributes.
    ///
    /// A `style` attribute is parsed into its declarations.
    pub fn from_attributes<I, K, V>(attributes: I) -> Properties<'a>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut props = Properties::new();

        for (name, value) in attributes {
            props.set_attribute(name, value.as_ref());
        }

        props
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: &str) {
        let name = name.into();

        if name == "style" {
            self.style = StyleSet::parse(value);
        } else {
            self.attributes.insert(name, value.to_string());
        }
    }

    pub fn style(&self) -> &StyleSet {
        &self.style
    }

    pub fn parent(&self) -> Option<&'a Properties<'a>> {
        self.parent
    }
}

impl<'a> SvgProperties for Properties<'a> {
    fn string_property(&self, name: &str) -> Option<&str> {
        self.style
            .get(name)
            .or_else(|| self.attributes.get(name).map(String::as_str))
            .or_else(|| self.parent.and_then(|p| p.string_property(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_overrides_attributes() {
        let props = Properties::from_attributes([("fill", "red"), ("style", "fill: blue")]);

        assert_eq!(props.string_property("fill"), Some("blue"));
        assert_eq!(props.string_property("style"), None);
    }

    #[test]
    fn inherits_from_parent() {
        let parent = Properties::from_attributes([("stroke", "green"), ("fill", "red")]);
        let mut child = Properties::with_parent(&parent);
        child.set_attribute("fill", "blue");

        assert_eq!(child.string_property("fill"), Some("blue"));
        assert_eq!(child.string_property("stroke"), Some("green"));
        assert_eq!(child.string_property("opacity"), None);
        assert!(child.parent().is_some());
    }

    #[test]
    fn reads_floats() {
        let props = Properties::from_attributes([
            ("stroke-width", "2.5"),
            ("x1", "10px"),
            ("opacity", "half"),
        ]);

        assert_eq!(props.float_property("stroke-width"), Some(2.5));
        assert_eq!(props.float_property("x1"), Some(10.0));
        assert_eq!(props.float_property("opacity"), None);
        assert_eq!(props.float_property_or("opacity", 1.0), 1.0);
        assert_eq!(props.float_property_or("r", 0.0), 0.0);
    }

    #[test]
    fn plain_maps_are_properties() {
        let mut map = HashMap::new();
        map.insert("fill".to_string(), "red".to_string());
        assert_eq!(map.string_property("fill"), Some("red"));

        let style = StyleSet::parse("opacity: 0.5");
        assert_eq!(style.float_property("opacity"), Some(0.5));
    }
}

use std::fmt::Display;

use crate::builder::value::accept;
use crate::builder::{XmlText, XmlValue};

/// Name used when an attribute is created from a non-string name.
pub const DEFAULT_ATTRIBUTE_NAME: &str = "data";

/// Represents an XML attribute with a name and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The name of the attribute.
    name: String,
    /// The value of the attribute.
    value: XmlValue,
}

impl Attribute {
    /// Creates a new instance of `Attribute`.
    ///
    /// A name that is not a string becomes `data`; a value that is not a
    /// string, number or boolean becomes the empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::Attribute;
    /// let attribute = Attribute::new("lang", "en");
    /// assert_eq!(attribute.render(), r#"lang="en""#);
    /// ```
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
        V: TryInto<XmlValue>,
        V::Error: Display,
    {
        Self {
            name: accept::<_, XmlText>(name, "attribute name")
                .map_or_else(|| DEFAULT_ATTRIBUTE_NAME.to_string(), XmlText::into_string),
            value: accept(value, "attribute value").unwrap_or_default(),
        }
    }

    /// Creates an attribute with an empty value.
    pub fn named<N>(name: N) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        Self::new(name, "")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &XmlValue {
        &self.value
    }

    pub fn set_name<N>(&mut self, name: N) -> bool
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        let Some(name) = accept::<_, XmlText>(name, "attribute name") else {
            return false;
        };
        self.name = name.into_string();
        true
    }

    pub fn set_value<V>(&mut self, value: V) -> bool
    where
        V: TryInto<XmlValue>,
        V::Error: Display,
    {
        let Some(value) = accept::<_, XmlValue>(value, "attribute value") else {
            return false;
        };
        self.value = value;
        true
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Attribute {
    /// Formats the attribute as `name="value"`, without escaping.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

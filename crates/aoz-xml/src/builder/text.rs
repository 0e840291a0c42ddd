use std::fmt::{self, Display};

use crate::builder::value::accept;
use crate::builder::{ElementBase, XmlElement, XmlText, XmlValue};

/// An element whose body is a single scalar: `<name>value</name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    base: ElementBase,
    value: XmlValue,
}

impl TextElement {
    /// Creates a text element. A value that is not a string, number or
    /// boolean becomes the empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::{TextElement, XmlElement};
    /// let element = TextElement::new("age", 36);
    /// assert_eq!(element.render(), "<age>36</age>");
    /// ```
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
        V: TryInto<XmlValue>,
        V::Error: Display,
    {
        Self {
            base: ElementBase::new(name),
            value: accept(value, "element text").unwrap_or_default(),
        }
    }

    /// Creates a text element with an empty body.
    pub fn named<N>(name: N) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        Self::new(name, "")
    }

    pub fn value(&self) -> &XmlValue {
        &self.value
    }

    pub fn set_value<V>(&mut self, value: V) -> bool
    where
        V: TryInto<XmlValue>,
        V::Error: Display,
    {
        let Some(value) = accept::<_, XmlValue>(value, "element text") else {
            return false;
        };
        self.value = value;
        true
    }
}

impl XmlElement for TextElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Display for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.write_start(f)?;
        write!(f, ">{}</{}>", self.value, self.name())
    }
}

use std::fmt::{self, Display};

use crate::builder::{ElementBase, XmlElement, XmlText};

/// A self-closing element: `<name a="1"/>`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleElement {
    base: ElementBase,
}

impl SimpleElement {
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::{SimpleElement, XmlElement};
    /// assert_eq!(SimpleElement::new("br").render(), "<br/>");
    /// ```
    pub fn new<N>(name: N) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        Self {
            base: ElementBase::new(name),
        }
    }
}

impl XmlElement for SimpleElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Display for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.write_start(f)?;
        write!(f, "/>")
    }
}

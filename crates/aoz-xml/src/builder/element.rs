use std::fmt::{self, Display};

use crate::builder::value::accept;
use crate::builder::{
    Attribute, Comment, ComplexElement, SimpleElement, Slots, TextElement, XmlText,
};

/// Name used when an element is created from a non-string name.
pub const DEFAULT_ELEMENT_NAME: &str = "aoz_xmlelement";

/// Name and attributes, shared by every element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBase {
    /// The name of the element, never containing a space.
    name: String,
    /// The attributes of the element, in insertion order.
    attributes: Slots<Attribute>,
}

impl ElementBase {
    pub fn new<N>(name: N) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        Self {
            name: accept::<_, XmlText>(name, "element name")
                .map_or_else(|| DEFAULT_ELEMENT_NAME.to_string(), |name| strip_spaces(&name)),
            attributes: Slots::new(),
        }
    }

    /// Writes `<name` followed by each attribute, leaving the tag open.
    pub(crate) fn write_start(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attribute in self.attributes.iter() {
            write!(f, " {attribute}")?;
        }
        Ok(())
    }
}

fn strip_spaces(name: &XmlText) -> String {
    name.as_str().replace(' ', "")
}

/// Behaviour common to every element kind.
///
/// Implementors only expose their [`ElementBase`]; naming and the attribute
/// contract come for free. Attributes are stored as copies, and index-based
/// operations address the slot an attribute was added at, which does not
/// move when earlier attributes are deleted.
pub trait XmlElement: Display {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    fn name(&self) -> &str {
        &self.base().name
    }

    /// Renames the element, dropping any spaces. Non-string input is
    /// rejected and the current name kept.
    fn set_name<N>(&mut self, name: N) -> bool
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        let Some(name) = accept::<_, XmlText>(name, "element name") else {
            return false;
        };
        self.base_mut().name = strip_spaces(&name);
        true
    }

    /// Stores a copy of `attribute` after the existing ones and returns its
    /// index. Duplicate names are allowed.
    fn add_attribute(&mut self, attribute: &Attribute) -> usize {
        self.base_mut().attributes.push(attribute.clone())
    }

    fn empty_attributes(&mut self) {
        self.base_mut().attributes.clear();
    }

    fn delete_last_attribute(&mut self) -> bool {
        self.base_mut().attributes.remove_last().is_some()
    }

    fn delete_first_attribute(&mut self) -> bool {
        self.base_mut().attributes.remove_first().is_some()
    }

    fn delete_attribute(&mut self, index: usize) -> bool {
        self.base_mut().attributes.remove(index).is_some()
    }

    /// Swaps a copy of `attribute` into `index`, which must be occupied.
    fn replace_attribute(&mut self, attribute: &Attribute, index: usize) -> bool {
        self.base_mut()
            .attributes
            .replace(index, attribute.clone())
            .is_ok()
    }

    fn count_attributes(&self) -> usize {
        self.base().attributes.len()
    }

    fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.base().attributes.get(index)
    }

    fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.base().attributes.iter()
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Any element that can be placed inside a [`ComplexElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Simple(SimpleElement),
    Text(TextElement),
    Complex(ComplexElement),
}

impl XmlElement for Element {
    fn base(&self) -> &ElementBase {
        match self {
            Self::Simple(element) => element.base(),
            Self::Text(element) => element.base(),
            Self::Complex(element) => element.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        match self {
            Self::Simple(element) => element.base_mut(),
            Self::Text(element) => element.base_mut(),
            Self::Complex(element) => element.base_mut(),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(element) => Display::fmt(element, f),
            Self::Text(element) => Display::fmt(element, f),
            Self::Complex(element) => Display::fmt(element, f),
        }
    }
}

impl From<SimpleElement> for Element {
    fn from(element: SimpleElement) -> Self {
        Self::Simple(element)
    }
}

impl From<TextElement> for Element {
    fn from(element: TextElement) -> Self {
        Self::Text(element)
    }
}

impl From<ComplexElement> for Element {
    fn from(element: ComplexElement) -> Self {
        Self::Complex(element)
    }
}

/// A child of a [`ComplexElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Comment(Comment),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Comment(_) => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Self::Comment(comment) => Some(comment),
            Self::Element(_) => None,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => Display::fmt(element, f),
            Self::Comment(comment) => Display::fmt(comment, f),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

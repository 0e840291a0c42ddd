use std::fmt::Display;

use tracing::debug;

use crate::builder::{
    Attribute, Comment, ComplexElement, Declaration, Element, Node, XmlElement, XmlText,
};
use crate::XmlError;

/// Name of the root element when a document is created without one.
pub const DEFAULT_ROOT_NAME: &str = "aoz";

/// A complete XML document: a declaration followed by a single root element.
///
/// Every tree operation is forwarded to the root, so a document can be
/// filled in exactly like a [`ComplexElement`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The XML declaration.
    declaration: Declaration,
    /// The root element of the XML document.
    root: ComplexElement,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Document {
    /// Creates a document around a copy of `root`, or around an empty
    /// `aoz` element when no root is given.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::{Attribute, Document, TextElement};
    /// let mut document = Document::new(None);
    /// document.add_attribute(&Attribute::new("id", 1));
    /// document.append(&TextElement::new("name", "Ada"));
    /// assert_eq!(
    ///     document.render(),
    ///     "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<aoz id=\"1\"><name>Ada</name></aoz>"
    /// );
    /// ```
    pub fn new(root: Option<&ComplexElement>) -> Self {
        Self {
            declaration: Declaration::default(),
            root: root
                .cloned()
                .unwrap_or_else(|| ComplexElement::new(DEFAULT_ROOT_NAME)),
        }
    }

    pub fn root(&self) -> &ComplexElement {
        &self.root
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn set_declaration(&mut self, declaration: Declaration) {
        self.declaration = declaration;
    }

    pub fn name(&self) -> &str {
        self.root.name()
    }

    pub fn set_name<N>(&mut self, name: N) -> bool
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        self.root.set_name(name)
    }

    pub fn add_attribute(&mut self, attribute: &Attribute) -> usize {
        self.root.add_attribute(attribute)
    }

    pub fn empty_attributes(&mut self) {
        self.root.empty_attributes();
    }

    pub fn delete_last_attribute(&mut self) -> bool {
        self.root.delete_last_attribute()
    }

    pub fn delete_first_attribute(&mut self) -> bool {
        self.root.delete_first_attribute()
    }

    pub fn delete_attribute(&mut self, index: usize) -> bool {
        self.root.delete_attribute(index)
    }

    pub fn replace_attribute(&mut self, attribute: &Attribute, index: usize) -> bool {
        self.root.replace_attribute(attribute, index)
    }

    pub fn count_attributes(&self) -> usize {
        self.root.count_attributes()
    }

    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.root.attribute(index)
    }

    pub fn append<E>(&mut self, child: &E) -> usize
    where
        E: Clone + Into<Element>,
    {
        self.root.append(child)
    }

    pub fn empty_all(&mut self) {
        self.root.empty_all();
    }

    pub fn append_comment(&mut self, comment: &Comment) -> usize {
        self.root.append_comment(comment)
    }

    pub fn delete_last_element(&mut self) -> bool {
        self.root.delete_last_element()
    }

    pub fn delete_first_element(&mut self) -> bool {
        self.root.delete_first_element()
    }

    pub fn delete_element(&mut self, index: usize) -> bool {
        self.root.delete_element(index)
    }

    pub fn replace_element<E>(&mut self, child: &E, index: usize) -> bool
    where
        E: Clone + Into<Element>,
    {
        self.root.replace_element(child, index)
    }

    pub fn count_elements(&self) -> usize {
        self.root.count_elements()
    }

    pub fn element(&self, index: usize) -> Option<&Node> {
        self.root.element(index)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> Result<(), XmlError> {
        let xml = self.render();
        w.write_all(xml.as_bytes())?;
        debug!(bytes = xml.len(), root = self.name(), "wrote XML document");
        Ok(())
    }
}

impl std::fmt::Display for Document {
    /// Formats the declaration, a newline, then the root element.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.declaration)?;
        write!(f, "{}", self.root)
    }
}

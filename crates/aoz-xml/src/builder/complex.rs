use std::fmt::{self, Display};

use crate::builder::{Comment, Element, ElementBase, Node, Slots, XmlElement, XmlText};

/// An element holding an ordered list of child elements and comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexElement {
    base: ElementBase,
    /// The children, rendered back to back in slot order.
    children: Slots<Node>,
}

impl ComplexElement {
    /// Creates an element with no children.
    ///
    /// # Example
    ///
    /// ```
    /// use aoz_xml::builder::{ComplexElement, TextElement, XmlElement};
    /// let mut person = ComplexElement::new("person");
    /// person.append(&TextElement::new("name", "Ada"));
    /// assert_eq!(person.render(), "<person><name>Ada</name></person>");
    /// ```
    pub fn new<N>(name: N) -> Self
    where
        N: TryInto<XmlText>,
        N::Error: Display,
    {
        Self {
            base: ElementBase::new(name),
            children: Slots::new(),
        }
    }

    /// Stores a copy of `child` after the existing children and returns its
    /// index.
    pub fn append<E>(&mut self, child: &E) -> usize
    where
        E: Clone + Into<Element>,
    {
        self.children.push(Node::Element(child.clone().into()))
    }

    /// Stores a copy of `comment` after the existing children and returns its
    /// index. Earlier children are kept.
    pub fn append_comment(&mut self, comment: &Comment) -> usize {
        self.children.push(Node::Comment(comment.clone()))
    }

    pub fn empty_all(&mut self) {
        self.children.clear();
    }

    pub fn delete_last_element(&mut self) -> bool {
        self.children.remove_last().is_some()
    }

    pub fn delete_first_element(&mut self) -> bool {
        self.children.remove_first().is_some()
    }

    pub fn delete_element(&mut self, index: usize) -> bool {
        self.children.remove(index).is_some()
    }

    /// Swaps a copy of `child` into `index`, which must be occupied.
    pub fn replace_element<E>(&mut self, child: &E, index: usize) -> bool
    where
        E: Clone + Into<Element>,
    {
        self.children
            .replace(index, Node::Element(child.clone().into()))
            .is_ok()
    }

    pub fn count_elements(&self) -> usize {
        self.children.len()
    }

    pub fn element(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }
}

impl XmlElement for ComplexElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Display for ComplexElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.write_start(f)?;
        write!(f, ">")?;
        for child in self.children.iter() {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name())
    }
}

use aoz_xml::builder::{
    Attribute, Comment, ComplexElement, Document, SimpleElement, TextElement, XmlElement,
};

fn main() {
    // Create the document around a default `aoz` root
    let mut document = Document::default();
    document.add_attribute(&Attribute::new("id", 1));
    document.append_comment(&Comment::new("people known to the engine"));

    // Build one child and reuse it as a template
    let mut person = ComplexElement::new("person");
    person.add_attribute(&Attribute::new("active", true));
    person.append(&TextElement::new("name", "Ada"));
    person.append(&TextElement::new("born", 1815));
    person.append(&SimpleElement::new("portrait"));
    document.append(&person);

    // Changing the template afterwards does not touch the stored copy
    person.replace_element(&TextElement::new("name", "Charles"), 0);
    person.replace_element(&TextElement::new("born", 1791), 1);
    document.append(&person);

    // Print the XML document
    println!("{}", document.render());

    let stdout = std::io::stdout();
    document.write_to(stdout.lock()).expect("Failed to write XML");
    println!();
}

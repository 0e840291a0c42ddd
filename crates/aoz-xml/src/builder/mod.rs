//! # aoz-xml builder
//! Build an XML tree in memory (elements, attributes, text, comments) and
//! render it to a string. Nothing is escaped on the way out: values are
//! written exactly as given.
mod attribute;
mod comment;
mod complex;
mod declaration;
mod document;
mod element;
mod simple;
mod slots;
mod text;
mod value;

pub use self::attribute::*;
pub use self::comment::*;
pub use self::complex::*;
pub use self::declaration::*;
pub use self::document::*;
pub use self::element::*;
pub use self::simple::*;
pub use self::slots::*;
pub use self::text::*;
pub use self::value::{XmlText, XmlValue};

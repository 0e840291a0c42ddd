use serde_json::json;
use tracing_test::traced_test;

use crate::builder::{
    Attribute, Comment, ComplexElement, Document, SimpleElement, TextElement, XmlElement,
    XmlText, XmlValue, DEFAULT_ATTRIBUTE_NAME, DEFAULT_ELEMENT_NAME,
};
use crate::XmlError;

#[test]
fn test_json_scalars_convert() {
    assert_eq!(XmlValue::try_from(json!("x")).unwrap(), XmlValue::Str("x".into()));
    assert_eq!(XmlValue::try_from(json!(12)).unwrap(), XmlValue::Int(12));
    assert_eq!(XmlValue::try_from(json!(0.5)).unwrap(), XmlValue::Float(0.5));
    assert_eq!(XmlValue::try_from(json!(true)).unwrap(), XmlValue::Bool(true));
    assert_eq!(XmlText::try_from(json!("name")).unwrap().as_str(), "name");
}

#[test]
fn test_json_non_scalars_are_rejected() {
    assert!(matches!(
        XmlValue::try_from(json!(null)),
        Err(XmlError::NotAScalar { found: "null" })
    ));
    assert!(matches!(
        XmlValue::try_from(&json!([1, 2])),
        Err(XmlError::NotAScalar { found: "array" })
    ));
    assert!(matches!(
        XmlText::try_from(json!(3)),
        Err(XmlError::NotAString { found: "number" })
    ));
    assert!(matches!(
        XmlText::try_from(&json!({"a": 1})),
        Err(XmlError::NotAString { found: "object" })
    ));
}

#[test]
fn test_invalid_construction_uses_defaults() {
    let attr = Attribute::new(json!(5), json!({"nested": true}));
    assert_eq!(attr.name(), DEFAULT_ATTRIBUTE_NAME);
    assert_eq!(attr.value(), &XmlValue::default());
    assert_eq!(attr.render(), r#"data="""#);

    assert_eq!(SimpleElement::new(json!(null)).name(), DEFAULT_ELEMENT_NAME);
    assert_eq!(TextElement::new(json!([]), "v").name(), DEFAULT_ELEMENT_NAME);
    assert_eq!(ComplexElement::new(json!(false)).name(), DEFAULT_ELEMENT_NAME);

    let text = TextElement::new("t", json!(null));
    assert_eq!(text.render(), "<t></t>");

    assert_eq!(Comment::new(json!(1)).value(), "");
}

#[test]
fn test_valid_json_input_is_accepted() {
    let mut attr = Attribute::new(json!("id"), json!(7));
    assert_eq!(attr.render(), r#"id="7""#);
    assert!(attr.set_value(json!("seven")));
    assert!(attr.set_name(&json!("key")));
    assert_eq!(attr.render(), r#"key="seven""#);
}

#[test]
#[traced_test]
fn test_rejected_setters_leave_state_untouched() {
    let mut attr = Attribute::new("a", "b");
    assert!(!attr.set_name(json!(1)));
    assert!(!attr.set_value(json!(null)));
    assert_eq!(attr.render(), r#"a="b""#);

    let mut comment = Comment::new("keep");
    assert!(!comment.set_value(json!(["x"])));
    assert_eq!(comment.value(), "keep");

    let mut text = TextElement::new("t", 1);
    assert!(!text.set_value(json!({})));
    assert!(!text.set_name(json!(2)));
    assert_eq!(text.render(), "<t>1</t>");

    let mut document = Document::default();
    assert!(!document.set_name(json!(null)));
    assert_eq!(document.name(), "aoz");

    assert!(logs_contain("rejected input"));
    assert!(logs_contain("element name"));
    assert!(logs_contain("expected a string, number or boolean, found object"));
}

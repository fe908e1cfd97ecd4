use lystyle::{SerializeContext, StyleError, StyleObject, Theme, serialize};

#[test]
fn test_raw_declarations_serialize_like_objects() {
    let object = StyleObject::parse("font-size: 24px;\n width: 1em; height: 1em").unwrap();
    let out = serialize(&object, &SerializeContext::new(&Theme::light(), "e7")).unwrap();
    assert_eq!(out, ".e7{font-size:24px;width:1em;height:1em}");
}

#[test]
fn test_raw_declarations_resolve_tokens() {
    let object = StyleObject::parse("color:$accent;border-before:1px solid $divider").unwrap();
    let out = serialize(&object, &SerializeContext::new(&Theme::light(), "e7")).unwrap();
    assert_eq!(out, ".e7{color:#ff2997;border-left:1px solid rgba(0,0,0,0.12)}");
}

#[test]
fn test_invalid_declarations() {
    assert!(matches!(
        StyleObject::parse("font-size 24px"),
        Err(StyleError::InvalidDeclaration(_))
    ));
    assert!(matches!(
        StyleObject::parse(".e0 { color: red }"),
        Err(StyleError::InvalidDeclaration(_))
    ));
}

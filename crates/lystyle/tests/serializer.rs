use lystyle::{Direction, SerializeContext, StyleError, StyleObject, Theme, serialize, style};
use std::collections::HashMap;

fn css(object: &StyleObject) -> String {
    serialize(object, &SerializeContext::new(&Theme::light(), "e0")).unwrap()
}

#[test]
fn test_nesting_flattening() {
    let object = style! {
        "color" => "$primary",
        "&:hover" => {
            "color" => "$accent",
            "span" => { "opacity" => 0.5 },
        },
        "@media $XSmall" => { "display" => "none" },
    };

    insta::assert_snapshot!(
        css(&object),
        @".e0{color:#6200ee}.e0:hover{color:#ff2997}.e0:hover span{opacity:0.5}@media (max-width: 599px){.e0{display:none}}"
    );
}

#[test]
fn test_local_declarations_come_before_nested_blocks() {
    let object = style! {
        "&:after" => { "content" => "''" },
        "display" => "block",
    };
    assert_eq!(css(&object), ".e0{display:block}.e0:after{content:''}");
}

#[test]
fn test_nested_at_rules() {
    let object = style! {
        "@media $Small" => {
            "@supports (display: grid)" => { "display" => "grid" },
        },
        "@media (hover: hover)" => {
            "&:hover" => { "color" => "red" },
        },
    };

    insta::assert_snapshot!(
        css(&object),
        @"@media (min-width: 600px) and (max-width: 959px){@supports (display: grid){.e0{display:grid}}}@media (hover: hover){.e0:hover{color:red}}"
    );
}

#[test]
fn test_selector_lists_expand_pairwise() {
    let object = style! {
        "&:hover, &:focus" => {
            "outline" => "none",
            "& span, & svg" => { "color" => "inherit" },
        },
    };

    assert_eq!(
        css(&object),
        ".e0:hover,.e0:focus{outline:none}\
         .e0:hover span,.e0:hover svg,.e0:focus span,.e0:focus svg{color:inherit}"
    );
}

#[test]
fn test_slot_references() {
    let theme = Theme::light();
    let mut slots = HashMap::new();
    slots.insert("label".to_string(), "e4".to_string());
    let ctx = SerializeContext::new(&theme, "e3").with_slots(&slots);

    let object = style! { "&:focus {label}" => { "color" => "$primary" } };
    assert_eq!(serialize(&object, &ctx).unwrap(), ".e3:focus .e4{color:#6200ee}");

    let missing = style! { "& {hint}" => { "display" => "none" } };
    assert_eq!(
        serialize(&missing, &ctx),
        Err(StyleError::UnknownSlot("hint".into()))
    );
}

#[test]
fn test_direction_aware_properties() {
    let object = style! {
        "borderBeforeWidth" => "2px",
        "borderTopAfterRadius" => "4px",
        "paddingBefore" => "8px",
    };

    let ltr = Theme::light();
    let rtl = Theme::light().with_direction(Direction::Rtl);
    assert_eq!(
        serialize(&object, &SerializeContext::new(&ltr, "e0")).unwrap(),
        ".e0{border-left-width:2px;border-top-right-radius:4px;padding-left:8px}"
    );
    assert_eq!(
        serialize(&object, &SerializeContext::new(&rtl, "e0")).unwrap(),
        ".e0{border-right-width:2px;border-top-left-radius:4px;padding-right:8px}"
    );
}

#[test]
fn test_vendor_prefixed_keys() {
    let object = style! {
        "WebkitTapHighlightColor" => "transparent",
        "--ripple-color" => "$accent",
    };
    assert_eq!(
        css(&object),
        ".e0{-webkit-tap-highlight-color:transparent;--ripple-color:#ff2997}"
    );
}

#[test]
fn test_unknown_references_fail_without_output() {
    let theme = Theme::light();
    let ctx = SerializeContext::new(&theme, "e0");

    let breakpoint = style! { "color" => "red", "@media $Watch" => { "display" => "none" } };
    assert_eq!(
        serialize(&breakpoint, &ctx),
        Err(StyleError::UnknownBreakpoint("Watch".into()))
    );

    let token = style! { "&:hover" => { "color" => "$brand" } };
    assert_eq!(
        serialize(&token, &ctx),
        Err(StyleError::UnknownPaletteToken("brand".into()))
    );
}

#[test]
fn test_breakpoint_helper() {
    let object = StyleObject::new()
        .with("width", "50%")
        .at_breakpoint("XSmall", style! { "width" => "100%" });
    assert_eq!(
        css(&object),
        ".e0{width:50%}@media (max-width: 599px){.e0{width:100%}}"
    );
}

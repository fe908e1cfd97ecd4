use lyui::{
    ClassNameStyle, LyTheme, StyleError, StyleObject, StyleSheetDefinition, Theme, ThemeConfig,
    style,
};

fn field_sheet() -> StyleObject {
    style! {
        "$name" => "field",
        "root" => {
            "display" => "flex",
            "&:hover {label}" => { "color" => "$primary" },
        },
        "label" => { "margin" => 0 },
    }
}

#[test]
fn test_slots_reference_each_other() {
    let mut theme = LyTheme::new(Theme::light());

    let classes = theme.add_style_sheet("lyField", field_sheet(), -2).unwrap();

    assert_eq!(&classes["root"], "e0");
    assert_eq!(classes.get("label"), Some("e1"));
    assert_eq!(classes.get("$name"), None);
    assert_eq!(
        theme.css_text(),
        ".e0{display:flex}.e0:hover .e1{color:#6200ee}\n.e1{margin:0}"
    );
    assert_eq!(
        theme.registry().entry("lyField.label").unwrap().sheet(),
        Some("lyField")
    );
}

#[test]
fn test_descriptive_class_names_use_sheet_name() {
    let config = ThemeConfig::default().with_class_names(ClassNameStyle::Descriptive);
    let mut theme = LyTheme::with_config(Theme::light(), config);

    let classes = theme.add_style_sheet("lyField", field_sheet(), -2).unwrap();

    assert_eq!(classes.get("root"), Some("field-root-e0"));
    assert_eq!(classes.get("label"), Some("field-label-e1"));
}

#[test]
fn test_unknown_slot_inserts_nothing() {
    let mut theme = LyTheme::new(Theme::light());
    let sheet = style! {
        "root" => { "display" => "block" },
        "label" => { "& {hint}" => { "display" => "none" } },
    };

    let err = theme.add_style_sheet("lyBroken", sheet, 0).unwrap_err();

    assert_eq!(err, StyleError::UnknownSlot("hint".into()));
    assert!(theme.registry().is_empty());
    assert!(theme.injector().is_empty());
}

#[test]
fn test_style_with_sheet_context() {
    let mut theme = LyTheme::new(Theme::light());
    let classes = theme.add_style_sheet("lyField", field_sheet(), -2).unwrap();

    let appearance = theme
        .add_style_with(
            "lyField.appearance:outlined",
            style! { "& {label}" => { "transform" => "translateY(-1.75em)" } },
            -1,
            Some(&classes),
        )
        .unwrap();

    assert_eq!(appearance, "e2");
    assert_eq!(
        theme.registry().entry("lyField.appearance:outlined").unwrap().css(),
        ".e2 .e1{transform:translateY(-1.75em)}"
    );
}

#[test]
fn test_release_sheet_evicts_every_slot() {
    let mut theme = LyTheme::new(Theme::light());
    let first = theme.add_style_sheet("lyField", field_sheet(), -2).unwrap();
    let second = theme.add_style_sheet("lyField", field_sheet(), -2).unwrap();
    assert_eq!(first, second);
    assert_eq!(theme.injector().len(), 2);

    assert!(theme.release_sheet("lyField"));
    assert!(theme.registry().sheet("lyField").is_some());

    assert!(theme.release_sheet("lyField"));
    assert!(theme.registry().sheet("lyField").is_none());
    assert!(theme.registry().is_empty());
    assert_eq!(theme.css_text(), "");

    assert!(!theme.release_sheet("lyField"));
}

#[test]
fn test_themed_sheet_follows_theme() {
    let mut theme = LyTheme::new(Theme::light());
    let sheet = StyleSheetDefinition::themed(|theme: &Theme| {
        Ok(style! {
            "root" => { "background" => theme.color_of("background.default")? },
            "label" => { "color" => "$text.secondary" },
        })
    });

    theme.add_style_sheet("lySurface", sheet, -2).unwrap();
    assert_eq!(
        theme.css_text(),
        ".e0{background:#fafafa}\n.e1{color:rgba(0,0,0,0.54)}"
    );

    theme.set_theme(Theme::dark()).unwrap();
    assert_eq!(
        theme.css_text(),
        ".e0{background:#303030}\n.e1{color:rgba(255,255,255,0.7)}"
    );
}

#[test]
fn test_field_appearance_sheet() {
    let mut theme = LyTheme::new(Theme::light());
    let sheet = StyleSheetDefinition::themed(|theme: &Theme| {
        let mut sheet = style! {
            "root" => { "display" => "inline-block" },
            "container" => { "position" => "relative" },
            "disabled" => {},
        };
        lyui::merge_deep(&mut sheet, theme.field_appearance("standard")?);
        Ok(sheet)
    });

    let classes = theme.add_style_sheet("lyField.standard", sheet, -2).unwrap();

    let root = theme.registry().entry("lyField.standard.root").unwrap();
    assert_eq!(
        root.css(),
        format!(
            ".{root}{{display:inline-block}}.{root}:not(.{disabled}) .{container}:hover:after{{border-bottom-color:currentColor}}.{root}.{disabled} .{container}:after{{border-bottom-style:dotted;border-color:inherit}}",
            root = &classes["root"],
            disabled = &classes["disabled"],
            container = &classes["container"],
        )
    );
}

#[test]
fn test_slot_outliving_its_sheet_follows_theme() {
    let mut theme = LyTheme::new(Theme::light());
    let sheet = style! { "root" => { "color" => "$primary" } };

    let classes = theme.add_style_sheet("btn", sheet, 0).unwrap();
    let class = theme.add_style("btn.root", StyleObject::new(), 0).unwrap();
    assert_eq!(class, &classes["root"]);

    assert!(theme.release_sheet("btn"));
    let entry = theme.registry().entry("btn.root").unwrap();
    assert_eq!(entry.sheet(), None);
    assert_eq!(entry.ref_count(), 1);

    theme.set_theme(Theme::dark()).unwrap();
    assert_eq!(theme.css_text(), ".e0{color:#1de9b6}");

    theme.add_style("btn.root", StyleObject::new(), 0).unwrap();
    assert_eq!(
        theme.registry().entry("btn.root").unwrap().css(),
        ".e0{color:#1de9b6}"
    );
}

//! Style entries, sheets and their reference counts.
//!
//! The registry is where the single-insertion invariant lives: a style key
//! is serialized and inserted once, every further request for the same key
//! only bumps its reference count. Sheets register one entry per slot
//! (`"{sheet}.{slot}"`) and share a slot → class map so slots can refer to
//! each other through `{slot}` selectors.
//!
//! Every entry remembers the theme generation it was built against. When the
//! theme changes, [`StyleRegistry::rebuild_all`] re-serializes each entry and
//! replaces its rule in place: class names and rule positions never change.

use crate::class_name::ClassNameAllocator;
use crate::injector::{RuleHandle, StyleInjector};
use crate::theme_store::ThemeStore;
use lystyle::{Result, SerializeContext, StyleError, StyleObject, StyleValue, Theme, serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// A style computed from the active theme.
pub type ThemedStyle = Rc<dyn Fn(&Theme) -> Result<StyleObject>>;

/// What a style key stands for.
#[derive(Clone)]
pub enum StyleDefinition {
    /// A fixed description. Palette tokens and breakpoints inside it still
    /// follow the theme.
    Static(StyleObject),
    /// A description computed from the theme, re-run on every theme change.
    Themed(ThemedStyle),
    /// No description: release the key instead of registering it.
    Detach,
}

impl StyleDefinition {
    pub fn themed<F>(style: F) -> Self
    where
        F: Fn(&Theme) -> Result<StyleObject> + 'static,
    {
        StyleDefinition::Themed(Rc::new(style))
    }

    /// A static definition from raw declaration text (`"width:1em;height:1em"`).
    pub fn raw(declarations: &str) -> Result<Self> {
        StyleObject::parse(declarations).map(StyleDefinition::Static)
    }

    /// Resolves the description against `theme`. `Detach` resolves to `None`.
    pub fn resolve(&self, theme: &Theme) -> Result<Option<Cow<'_, StyleObject>>> {
        match self {
            StyleDefinition::Static(object) => Ok(Some(Cow::Borrowed(object))),
            StyleDefinition::Themed(style) => style(theme).map(|object| Some(Cow::Owned(object))),
            StyleDefinition::Detach => Ok(None),
        }
    }

    pub fn is_detach(&self) -> bool {
        matches!(self, StyleDefinition::Detach)
    }
}

impl fmt::Debug for StyleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleDefinition::Static(object) => f.debug_tuple("Static").field(object).finish(),
            StyleDefinition::Themed(_) => f.write_str("Themed(..)"),
            StyleDefinition::Detach => f.write_str("Detach"),
        }
    }
}

impl From<StyleObject> for StyleDefinition {
    fn from(object: StyleObject) -> Self {
        StyleDefinition::Static(object)
    }
}

impl From<Option<StyleObject>> for StyleDefinition {
    fn from(object: Option<StyleObject>) -> Self {
        object.map_or(StyleDefinition::Detach, StyleDefinition::Static)
    }
}

/// What a style sheet key stands for: slot name → slot description.
///
/// A top-level `$name` string names the sheet for descriptive class names.
#[derive(Clone)]
pub enum StyleSheetDefinition {
    Static(StyleObject),
    Themed(ThemedStyle),
}

impl StyleSheetDefinition {
    pub fn themed<F>(style: F) -> Self
    where
        F: Fn(&Theme) -> Result<StyleObject> + 'static,
    {
        StyleSheetDefinition::Themed(Rc::new(style))
    }

    pub fn resolve(&self, theme: &Theme) -> Result<Cow<'_, StyleObject>> {
        match self {
            StyleSheetDefinition::Static(object) => Ok(Cow::Borrowed(object)),
            StyleSheetDefinition::Themed(style) => style(theme).map(Cow::Owned),
        }
    }
}

impl fmt::Debug for StyleSheetDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSheetDefinition::Static(object) => f.debug_tuple("Static").field(object).finish(),
            StyleSheetDefinition::Themed(_) => f.write_str("Themed(..)"),
        }
    }
}

impl From<StyleObject> for StyleSheetDefinition {
    fn from(object: StyleObject) -> Self {
        StyleSheetDefinition::Static(object)
    }
}

/// Slot name → class name of a registered sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetClasses {
    classes: HashMap<String, String>,
}

impl SheetClasses {
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.classes.get(slot).map(String::as_str)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(slot, class)| (slot.as_str(), class.as_str()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Index<&str> for SheetClasses {
    type Output = str;

    /// Panics if the sheet has no such slot.
    fn index(&self, slot: &str) -> &str {
        match self.get(slot) {
            Some(class) => class,
            None => panic!("style sheet has no slot named {slot}"),
        }
    }
}

#[derive(Debug, Clone)]
enum EntrySource {
    Style {
        definition: StyleDefinition,
        slots: Option<HashMap<String, String>>,
    },
    /// A slot of the named sheet.
    Sheet(String),
}

/// One registered style key and its live rule.
#[derive(Debug, Clone)]
pub struct StyleEntry {
    key: String,
    class_name: String,
    css: String,
    priority: i32,
    ref_count: usize,
    generation: u64,
    handle: Option<RuleHandle>,
    source: EntrySource,
}

impl StyleEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The serialized rules of this entry. Empty when it produced no CSS.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn ref_count(&self) -> usize {
        self.ref_count
    }

    /// Theme generation the CSS was last built against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The injector rule, if the entry produced any CSS.
    pub fn handle(&self) -> Option<RuleHandle> {
        self.handle
    }

    /// Key of the sheet this entry is a slot of.
    pub fn sheet(&self) -> Option<&str> {
        match &self.source {
            EntrySource::Sheet(sheet) => Some(sheet),
            EntrySource::Style { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
struct SheetRecord {
    definition: StyleSheetDefinition,
    classes: SheetClasses,
    ref_count: usize,
    generation: u64,
}

/// Serialized rule of one sheet slot.
struct SlotRule {
    slot: String,
    class_name: String,
    css: String,
}

fn slot_key(sheet: &str, slot: &str) -> String {
    format!("{sheet}.{slot}")
}

/// Slot descriptions of a sheet; `$` metadata and non-object values are not slots.
fn sheet_slots(description: &StyleObject) -> impl Iterator<Item = (&str, &StyleObject)> {
    description
        .iter()
        .filter(|(slot, _)| !slot.starts_with('$'))
        .filter_map(|(slot, value)| value.as_object().map(|object| (slot, object)))
}

/// A style definition for one slot of a sheet, resolved through the sheet.
fn slot_definition(sheet: &StyleSheetDefinition, slot: &str) -> StyleDefinition {
    let sheet = sheet.clone();
    let slot = slot.to_string();
    StyleDefinition::themed(move |theme: &Theme| {
        let description = sheet.resolve(theme)?;
        Ok(description
            .get(&slot)
            .and_then(StyleValue::as_object)
            .cloned()
            .unwrap_or_default())
    })
}

fn build_css(
    description: &StyleObject,
    class_name: &str,
    slots: Option<&HashMap<String, String>>,
    theme: &Theme,
) -> Result<String> {
    let mut ctx = SerializeContext::new(theme, class_name);
    if let Some(slots) = slots {
        ctx = ctx.with_slots(slots);
    }
    serialize(description, &ctx)
}

/// Serializes every slot of a sheet before anything is inserted.
fn serialize_sheet(
    description: &StyleObject,
    classes: &SheetClasses,
    theme: &Theme,
) -> Result<Vec<SlotRule>> {
    let mut rules = Vec::new();
    for (slot, object) in sheet_slots(description) {
        let Some(class_name) = classes.get(slot) else {
            log::warn!("slot {slot} appeared after its sheet was registered; skipped");
            continue;
        };
        rules.push(SlotRule {
            slot: slot.to_string(),
            class_name: class_name.to_string(),
            css: build_css(object, class_name, Some(classes.as_map()), theme)?,
        });
    }
    Ok(rules)
}

/// Writes new CSS for an entry, keeping its rule position.
fn apply_css(injector: &mut StyleInjector, entry: &mut StyleEntry, css: String) {
    match entry.handle {
        Some(handle) if css.is_empty() => {
            injector.remove(handle);
            entry.handle = None;
        }
        Some(handle) => {
            injector.replace(handle, css.clone());
        }
        None if !css.is_empty() => {
            entry.handle = Some(injector.insert(css.clone(), entry.priority));
        }
        None => {}
    }
    entry.css = css;
}

/// Key → entry cache backed by a class name allocator and a stylesheet.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    entries: HashMap<String, StyleEntry>,
    sheets: HashMap<String, SheetRecord>,
    allocator: ClassNameAllocator,
    injector: StyleInjector,
}

impl StyleRegistry {
    pub fn new(allocator: ClassNameAllocator) -> Self {
        Self {
            allocator,
            ..Default::default()
        }
    }

    /// Registers `key`, or takes one more reference to it.
    ///
    /// `context` makes the `{slot}` references of a sheet resolvable in this
    /// style. On a cache hit the definition and context are ignored; the
    /// entry is only rebuilt if it is stale.
    pub fn add_style(
        &mut self,
        store: &ThemeStore,
        key: &str,
        definition: StyleDefinition,
        priority: i32,
        context: Option<&SheetClasses>,
    ) -> Result<String> {
        if definition.is_detach() {
            return Ok(self.detach(key));
        }

        if let Some(entry) = self.entries.get_mut(key) {
            entry.ref_count += 1;
            let class_name = entry.class_name.clone();
            if entry.generation != store.generation() {
                if let Err(err) = self.rebuild_entry(key, store) {
                    if let Some(entry) = self.entries.get_mut(key) {
                        entry.ref_count -= 1;
                    }
                    return Err(err);
                }
            }
            log::trace!("style {key} cached as {class_name}");
            return Ok(class_name);
        }

        let theme = store.theme();
        let slots = context.map(SheetClasses::as_map);
        let (class_name, css) = {
            let Some(description) = definition.resolve(theme)? else {
                return Ok(self.detach(key));
            };
            let hint = description.get("$name").and_then(StyleValue::as_str);
            let class_name = self.allocator.allocate(key, hint);
            let css = build_css(&description, &class_name, slots, theme)?;
            (class_name, css)
        };

        let handle = (!css.is_empty()).then(|| self.injector.insert(css.clone(), priority));
        log::debug!("style {key} registered as {class_name} (priority {priority})");
        self.entries.insert(
            key.to_string(),
            StyleEntry {
                key: key.to_string(),
                class_name: class_name.clone(),
                css,
                priority,
                ref_count: 1,
                generation: store.generation(),
                handle,
                source: EntrySource::Style {
                    definition,
                    slots: slots.cloned(),
                },
            },
        );
        Ok(class_name)
    }

    /// Registers every slot of a sheet, or takes one more reference to it.
    ///
    /// All slot class names are allocated and all slots serialized before
    /// the first rule is inserted; a failing slot leaves nothing behind but
    /// the allocated names.
    pub fn add_style_sheet(
        &mut self,
        store: &ThemeStore,
        key: &str,
        definition: StyleSheetDefinition,
        priority: i32,
    ) -> Result<SheetClasses> {
        if let Some(record) = self.sheets.get_mut(key) {
            record.ref_count += 1;
            let classes = record.classes.clone();
            if record.generation != store.generation() {
                if let Err(err) = self.rebuild_sheet(key, store) {
                    if let Some(record) = self.sheets.get_mut(key) {
                        record.ref_count -= 1;
                    }
                    return Err(err);
                }
            }
            log::trace!("sheet {key} cached");
            return Ok(classes);
        }

        let theme = store.theme();
        let (classes, rules) = {
            let description = definition.resolve(theme)?;
            let name = description.get("$name").and_then(StyleValue::as_str);

            let mut classes = HashMap::new();
            for (slot, _) in sheet_slots(&description) {
                let hint = match name {
                    Some(name) => format!("{name}-{slot}"),
                    None => slot_key(key, slot),
                };
                let class_name = self.allocator.allocate(&slot_key(key, slot), Some(&hint));
                classes.insert(slot.to_string(), class_name);
            }
            let classes = SheetClasses { classes };
            let rules = serialize_sheet(&description, &classes, theme)?;
            (classes, rules)
        };

        for rule in rules {
            let entry_key = slot_key(key, &rule.slot);
            if let Some(existing) = self.entries.get_mut(&entry_key) {
                existing.ref_count += 1;
                continue;
            }
            let handle = (!rule.css.is_empty()).then(|| self.injector.insert(rule.css.clone(), priority));
            self.entries.insert(
                entry_key.clone(),
                StyleEntry {
                    key: entry_key,
                    class_name: rule.class_name,
                    css: rule.css,
                    priority,
                    ref_count: 1,
                    generation: store.generation(),
                    handle,
                    source: EntrySource::Sheet(key.to_string()),
                },
            );
        }

        log::debug!("sheet {key} registered with {} slots (priority {priority})", classes.len());
        self.sheets.insert(
            key.to_string(),
            SheetRecord {
                definition,
                classes: classes.clone(),
                ref_count: 1,
                generation: store.generation(),
            },
        );
        Ok(classes)
    }

    /// Returns the class of `key` and drops one reference to it.
    ///
    /// A key that was never registered still gets its stable class name.
    fn detach(&mut self, key: &str) -> String {
        match self.entries.get(key).map(|entry| entry.class_name.clone()) {
            Some(class_name) => {
                self.release(key);
                class_name
            }
            None => self.allocator.allocate(key, None),
        }
    }

    /// Drops one reference to `key`; the last one removes its rule.
    ///
    /// Returns `false` if the key is not registered.
    pub fn release(&mut self, key: &str) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            log::debug!("release of unknown style {key}");
            return false;
        };
        entry.ref_count = entry.ref_count.saturating_sub(1);
        if entry.ref_count == 0 {
            if let Some(entry) = self.entries.remove(key) {
                if let Some(handle) = entry.handle {
                    self.injector.remove(handle);
                }
                log::debug!("style {key} ({}) evicted", entry.class_name);
            }
        }
        true
    }

    /// Drops one reference to a sheet; the last one releases every slot.
    pub fn release_sheet(&mut self, key: &str) -> bool {
        let Some(record) = self.sheets.get_mut(key) else {
            log::debug!("release of unknown sheet {key}");
            return false;
        };
        record.ref_count = record.ref_count.saturating_sub(1);
        if record.ref_count == 0 {
            if let Some(record) = self.sheets.remove(key) {
                for (slot, _) in record.classes.iter() {
                    let entry_key = slot_key(key, slot);
                    self.release(&entry_key);
                    // Slots still referenced on their own keep following the theme.
                    if let Some(entry) = self.entries.get_mut(&entry_key) {
                        if entry.sheet() == Some(key) {
                            entry.source = EntrySource::Style {
                                definition: slot_definition(&record.definition, slot),
                                slots: Some(record.classes.as_map().clone()),
                            };
                            log::debug!("slot {entry_key} outlives sheet {key}");
                        }
                    }
                }
                log::debug!("sheet {key} evicted");
            }
        }
        true
    }

    fn rebuild_entry(&mut self, key: &str, store: &ThemeStore) -> Result<()> {
        let Some(entry) = self.entries.get(key) else {
            return Ok(());
        };
        let css = match &entry.source {
            EntrySource::Sheet(sheet) => {
                let sheet = sheet.clone();
                return self.rebuild_sheet(&sheet, store);
            }
            EntrySource::Style { definition, slots } => match definition.resolve(store.theme())? {
                Some(description) => {
                    build_css(&description, &entry.class_name, slots.as_ref(), store.theme())?
                }
                None => String::new(),
            },
        };

        if let Some(entry) = self.entries.get_mut(key) {
            apply_css(&mut self.injector, entry, css);
            entry.generation = store.generation();
            log::trace!("style {key} rebuilt");
        }
        Ok(())
    }

    fn rebuild_sheet(&mut self, key: &str, store: &ThemeStore) -> Result<()> {
        let Some(record) = self.sheets.get(key) else {
            return Ok(());
        };
        let rules = {
            let description = record.definition.resolve(store.theme())?;
            serialize_sheet(&description, &record.classes, store.theme())?
        };

        for rule in rules {
            let Some(entry) = self.entries.get_mut(&slot_key(key, &rule.slot)) else {
                continue;
            };
            if entry.sheet() != Some(key) {
                continue;
            }
            apply_css(&mut self.injector, entry, rule.css);
            entry.generation = store.generation();
        }
        if let Some(record) = self.sheets.get_mut(key) {
            record.generation = store.generation();
        }
        log::trace!("sheet {key} rebuilt");
        Ok(())
    }

    /// Rebuilds every sheet and entry against the store's theme.
    ///
    /// Failures do not stop the walk: a failing entry keeps its previous CSS
    /// and its old generation, and is reported with its key.
    pub fn rebuild_all(&mut self, store: &ThemeStore) -> Vec<(String, StyleError)> {
        let mut failures = Vec::new();

        let mut sheets: Vec<String> = self.sheets.keys().cloned().collect();
        sheets.sort();
        for key in sheets {
            if let Err(err) = self.rebuild_sheet(&key, store) {
                log::error!("sheet {key} failed to rebuild: {err}");
                failures.push((key, err));
            }
        }

        let mut keys: Vec<String> = self
            .entries
            .values()
            .filter(|entry| entry.sheet().is_none())
            .map(|entry| entry.key.clone())
            .collect();
        keys.sort();
        for key in keys {
            if let Err(err) = self.rebuild_entry(&key, store) {
                log::error!("style {key} failed to rebuild: {err}");
                failures.push((key, err));
            }
        }

        failures
    }

    pub fn entry(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.get(key)
    }

    /// Classes of a registered sheet.
    pub fn sheet(&self, key: &str) -> Option<&SheetClasses> {
        self.sheets.get(key).map(|record| &record.classes)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The class name `key` has or would get, without registering it.
    pub fn class_name_of(&self, key: &str) -> Option<&str> {
        self.allocator.get(key)
    }

    /// Number of live entries, sheet slots included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn injector(&self) -> &StyleInjector {
        &self.injector
    }

    pub fn injector_mut(&mut self) -> &mut StyleInjector {
        &mut self.injector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lystyle::style;

    fn registry() -> (StyleRegistry, ThemeStore) {
        (StyleRegistry::default(), ThemeStore::new(Theme::light()))
    }

    #[test]
    fn test_single_insertion_per_key() {
        let (mut registry, store) = registry();
        let first = registry
            .add_style(&store, "a", style! { "color" => "red" }.into(), 0, None)
            .unwrap();
        let second = registry
            .add_style(&store, "a", style! { "color" => "blue" }.into(), 0, None)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.injector().len(), 1);
        assert_eq!(registry.entry("a").unwrap().ref_count(), 2);
        assert_eq!(registry.entry("a").unwrap().css(), ".e0{color:red}");
    }

    #[test]
    fn test_release_evicts_at_zero() {
        let (mut registry, store) = registry();
        registry
            .add_style(&store, "a", style! { "color" => "red" }.into(), 0, None)
            .unwrap();
        registry
            .add_style(&store, "a", style! { "color" => "red" }.into(), 0, None)
            .unwrap();

        assert!(registry.release("a"));
        assert!(registry.contains("a"));
        assert!(registry.release("a"));
        assert!(!registry.contains("a"));
        assert!(registry.injector().is_empty());
        assert!(!registry.release("a"));
        // The class name outlives the entry.
        assert_eq!(registry.class_name_of("a"), Some("e0"));
    }

    #[test]
    fn test_empty_style_has_no_rule() {
        let (mut registry, store) = registry();
        let class = registry
            .add_style(&store, "empty", StyleObject::new().into(), 0, None)
            .unwrap();
        assert_eq!(class, "e0");
        assert_eq!(registry.entry("empty").unwrap().handle(), None);
        assert!(registry.injector().is_empty());
    }

    #[test]
    fn test_failed_serialization_registers_nothing() {
        let (mut registry, store) = registry();
        let err = registry
            .add_style(&store, "bad", style! { "color" => "$nope" }.into(), 0, None)
            .unwrap_err();
        assert_eq!(err, StyleError::UnknownPaletteToken("nope".into()));
        assert!(!registry.contains("bad"));
        assert!(registry.injector().is_empty());
    }

    #[test]
    fn test_definition_from_option() {
        assert!(StyleDefinition::from(None::<StyleObject>).is_detach());
        assert!(!StyleDefinition::from(Some(StyleObject::new())).is_detach());
    }
}

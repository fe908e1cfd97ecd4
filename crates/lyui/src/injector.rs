//! The ordered stylesheet.
//!
//! Rules are kept sorted by priority, lowest first, so that higher priority
//! rules come later in the cascade and win over lower ones of equal
//! specificity. Rules of equal priority keep their insertion order. A rule's
//! position is fixed at insertion; replacing its text never moves it.

use std::collections::HashMap;
use std::fmt;

/// Identifies one inserted rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleHandle(u64);

/// A live rule in the stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedRule {
    pub handle: RuleHandle,
    pub priority: i32,
    pub css: String,
}

/// Mirrors stylesheet mutations into a host document.
///
/// Indices are positions in [`StyleInjector::rules`] at the time of the
/// call.
pub trait StyleSink {
    fn insert_rule(&mut self, index: usize, css: &str);
    fn delete_rule(&mut self, index: usize);
    fn replace_rule(&mut self, index: usize, css: &str);
}

/// Priority-ordered list of CSS rules.
///
/// Rules are sorted by `(priority, handle)`: handles grow monotonically, so
/// that is also insertion order within a priority. Lookups by handle are a
/// binary search.
#[derive(Default)]
pub struct StyleInjector {
    rules: Vec<InsertedRule>,
    priorities: HashMap<RuleHandle, i32>,
    next_handle: u64,
    sink: Option<Box<dyn StyleSink>>,
}

impl fmt::Debug for StyleInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleInjector")
            .field("rules", &self.rules)
            .field("next_handle", &self.next_handle)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl StyleInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a sink and replays the current rules into it.
    pub fn set_sink(&mut self, mut sink: Box<dyn StyleSink>) {
        for (index, rule) in self.rules.iter().enumerate() {
            sink.insert_rule(index, &rule.css);
        }
        self.sink = Some(sink);
    }

    /// Inserts `css` after every rule with a priority lower than or equal to
    /// `priority`.
    pub fn insert(&mut self, css: String, priority: i32) -> RuleHandle {
        let handle = RuleHandle(self.next_handle);
        self.next_handle += 1;

        let index = self.rules.partition_point(|rule| rule.priority <= priority);
        if let Some(sink) = self.sink.as_mut() {
            sink.insert_rule(index, &css);
        }
        log::debug!("rule {:?} inserted at {} (priority {})", handle, index, priority);
        self.priorities.insert(handle, priority);
        self.rules.insert(
            index,
            InsertedRule {
                handle,
                priority,
                css,
            },
        );
        handle
    }

    /// Removes a rule. Returns `false` if the handle is not live.
    pub fn remove(&mut self, handle: RuleHandle) -> bool {
        let Some(index) = self.position(handle) else {
            return false;
        };
        self.rules.remove(index);
        self.priorities.remove(&handle);
        if let Some(sink) = self.sink.as_mut() {
            sink.delete_rule(index);
        }
        log::debug!("rule {:?} removed from {}", handle, index);
        true
    }

    /// Replaces the text of a rule in place.
    pub fn replace(&mut self, handle: RuleHandle, css: String) -> bool {
        let Some(index) = self.position(handle) else {
            return false;
        };
        if let Some(sink) = self.sink.as_mut() {
            sink.replace_rule(index, &css);
        }
        self.rules[index].css = css;
        true
    }

    /// Current index of a rule in cascade order.
    pub fn position(&self, handle: RuleHandle) -> Option<usize> {
        let priority = *self.priorities.get(&handle)?;
        self.rules
            .binary_search_by(|rule| (rule.priority, rule.handle).cmp(&(priority, handle)))
            .ok()
    }

    pub fn get(&self, handle: RuleHandle) -> Option<&InsertedRule> {
        self.position(handle).map(|index| &self.rules[index])
    }

    /// Live rules in cascade order.
    pub fn rules(&self) -> &[InsertedRule] {
        &self.rules
    }

    /// The whole stylesheet, one rule per line.
    pub fn css_text(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

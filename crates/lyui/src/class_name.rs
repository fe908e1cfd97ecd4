//! Stable class name allocation.
//!
//! Every style key is mapped to one class name for the lifetime of the
//! allocator. The mapping outlives the style entry itself: a key that is
//! released and registered again gets its old class back, so elements that
//! still carry the class keep matching.

use std::collections::HashMap;

/// How generated class names look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassNameStyle {
    /// `{prefix}{n}`, e.g. `e12`.
    #[default]
    Compact,
    /// `{hint}-{prefix}{n}`, e.g. `button-root-e12`. Meant for development.
    Descriptive,
}

/// Hands out deterministic, collision-free class names per key.
#[derive(Debug, Clone)]
pub struct ClassNameAllocator {
    style: ClassNameStyle,
    prefix: String,
    next: u64,
    names: HashMap<String, String>,
}

impl Default for ClassNameAllocator {
    fn default() -> Self {
        Self::new(ClassNameStyle::Compact, "e")
    }
}

impl ClassNameAllocator {
    pub fn new(style: ClassNameStyle, prefix: &str) -> Self {
        Self {
            style,
            prefix: prefix.to_string(),
            next: 0,
            names: HashMap::new(),
        }
    }

    /// Returns the class name of `key`, allocating one on first use.
    ///
    /// `hint` only matters in [`ClassNameStyle::Descriptive`] mode; the key
    /// itself is used when it is `None`.
    pub fn allocate(&mut self, key: &str, hint: Option<&str>) -> String {
        if let Some(name) = self.names.get(key) {
            return name.clone();
        }

        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;

        let name = match self.style {
            ClassNameStyle::Compact => id,
            ClassNameStyle::Descriptive => {
                let readable = sanitize(hint.unwrap_or(key));
                if readable.is_empty() {
                    id
                } else {
                    format!("{readable}-{id}")
                }
            }
        };

        log::trace!("class {name} allocated for {key}");
        self.names.insert(key.to_string(), name.clone());
        name
    }

    /// Returns the class name of `key` without allocating.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Number of keys that have a class name.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Reduces a hint to a valid CSS identifier fragment.
fn sanitize(hint: &str) -> String {
    let mut out = String::with_capacity(hint.len());
    for c in hint.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

//! The active theme.

use lystyle::Theme;

/// Holds the active [`Theme`] and a generation counter.
///
/// The generation increases on every replacement; style entries remember the
/// generation they were built against, which is how stale CSS is detected.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    theme: Theme,
    generation: u64,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            generation: 0,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the active theme, returning the previous one.
    pub fn replace(&mut self, theme: Theme) -> Theme {
        self.generation += 1;
        log::debug!(
            "theme {} replaced by {} (generation {})",
            self.theme.name,
            theme.name,
            self.generation
        );
        std::mem::replace(&mut self.theme, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_bumps_generation() {
        let mut store = ThemeStore::new(Theme::light());
        assert_eq!(store.generation(), 0);

        let previous = store.replace(Theme::dark());
        assert_eq!(previous.name, "minima-light");
        assert_eq!(store.theme().name, "minima-dark");
        assert_eq!(store.generation(), 1);
    }
}

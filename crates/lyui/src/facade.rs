//! The theme facade.
//!
//! [`LyTheme`] is the one object components talk to. It owns the active
//! theme, the style registry and the pending frame tasks, and it is passed
//! explicitly to whoever needs it; there is no global instance.

use crate::class_name::{ClassNameAllocator, ClassNameStyle};
use crate::frame::{FrameKey, FrameScheduler};
use crate::injector::{StyleInjector, StyleSink};
use crate::registry::{SheetClasses, StyleDefinition, StyleRegistry, StyleSheetDefinition};
use crate::renderer::{ElementId, Renderer};
use crate::theme_store::ThemeStore;
use lystyle::{Result, StyleError, Theme};

/// A style update deferred to the next frame.
pub type FrameTask = Box<dyn FnOnce(&mut LyTheme, &mut dyn Renderer) -> Result<()>>;

/// Construction options for [`LyTheme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub class_names: ClassNameStyle,
    pub class_prefix: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            class_names: ClassNameStyle::Compact,
            class_prefix: "e".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn with_class_names(mut self, class_names: ClassNameStyle) -> Self {
        self.class_names = class_names;
        self
    }

    pub fn with_class_prefix(mut self, prefix: &str) -> Self {
        self.class_prefix = prefix.to_string();
        self
    }
}

/// Theme, style cache and stylesheet behind one handle.
///
/// Priorities order rules in the stylesheet: library base styles use
/// negative priorities, consumer overrides zero or above.
#[derive(Debug)]
pub struct LyTheme {
    store: ThemeStore,
    registry: StyleRegistry,
    frames: FrameScheduler<FrameTask>,
}

impl LyTheme {
    pub fn new(theme: Theme) -> Self {
        Self::with_config(theme, ThemeConfig::default())
    }

    pub fn with_config(theme: Theme, config: ThemeConfig) -> Self {
        log::debug!("style engine started with theme {}", theme.name);
        Self {
            store: ThemeStore::new(theme),
            registry: StyleRegistry::new(ClassNameAllocator::new(
                config.class_names,
                &config.class_prefix,
            )),
            frames: FrameScheduler::new(),
        }
    }

    pub fn get_theme(&self) -> &Theme {
        self.store.theme()
    }

    /// Current theme generation; increases on every [`set_theme`](Self::set_theme).
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    /// Replaces the theme and rebuilds every registered style in place.
    ///
    /// The new theme stays active even when some styles fail to rebuild;
    /// those keep their previous CSS and are listed in
    /// [`StyleError::ThemeRebuild`].
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        log::info!("switching theme to {}", theme.name);
        self.store.replace(theme);
        let failures = self.registry.rebuild_all(&self.store);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(StyleError::ThemeRebuild(failures))
        }
    }

    /// Registers a style (or takes another reference) and returns its class.
    pub fn add_style(
        &mut self,
        key: &str,
        definition: impl Into<StyleDefinition>,
        priority: i32,
    ) -> Result<String> {
        self.add_style_with(key, definition, priority, None)
    }

    /// Like [`add_style`](Self::add_style), with `{slot}` references resolved
    /// against `context`.
    pub fn add_style_with(
        &mut self,
        key: &str,
        definition: impl Into<StyleDefinition>,
        priority: i32,
        context: Option<&SheetClasses>,
    ) -> Result<String> {
        self.registry
            .add_style(&self.store, key, definition.into(), priority, context)
    }

    /// Registers a style and swaps it onto `element` in place of `previous`.
    pub fn add_style_to(
        &mut self,
        renderer: &mut dyn Renderer,
        element: ElementId,
        key: &str,
        definition: impl Into<StyleDefinition>,
        previous: Option<&str>,
        priority: i32,
    ) -> Result<String> {
        let class_name = self.add_style(key, definition, priority)?;
        Ok(self.update_class(renderer, element, &class_name, previous))
    }

    /// Registers every slot of a style sheet.
    pub fn add_style_sheet(
        &mut self,
        key: &str,
        definition: impl Into<StyleSheetDefinition>,
        priority: i32,
    ) -> Result<SheetClasses> {
        self.registry
            .add_style_sheet(&self.store, key, definition.into(), priority)
    }

    /// Drops one reference to a style; see [`StyleRegistry::release`].
    pub fn release(&mut self, key: &str) -> bool {
        self.registry.release(key)
    }

    pub fn release_sheet(&mut self, key: &str) -> bool {
        self.registry.release_sheet(key)
    }

    /// Replaces `previous` with `new_class` on `element`.
    ///
    /// Nothing happens when both are the same class. Returns `new_class`.
    pub fn update_class(
        &self,
        renderer: &mut dyn Renderer,
        element: ElementId,
        new_class: &str,
        previous: Option<&str>,
    ) -> String {
        if previous == Some(new_class) {
            return new_class.to_string();
        }
        if let Some(previous) = previous {
            renderer.remove_class(element, previous);
        }
        renderer.add_class(element, new_class);
        new_class.to_string()
    }

    /// Defers `task` to the next [`flush_frame`](Self::flush_frame).
    ///
    /// A pending task with the same key is dropped. Returns `true` when the
    /// host has to request a new frame.
    pub fn request_animation_frame<F>(&mut self, key: FrameKey, task: F) -> bool
    where
        F: FnOnce(&mut LyTheme, &mut dyn Renderer) -> Result<()> + 'static,
    {
        self.frames.schedule(key, Box::new(task))
    }

    pub fn cancel_frame(&mut self, key: &FrameKey) -> bool {
        self.frames.cancel(key)
    }

    /// Cancels every pending task of an element that is going away.
    pub fn teardown_element(&mut self, element: ElementId) -> usize {
        let cancelled = self.frames.cancel_element(element);
        if cancelled > 0 {
            log::debug!("{cancelled} frame tasks cancelled for {:?}", element);
        }
        cancelled
    }

    /// Runs the pending tasks in scheduling order.
    ///
    /// A failing task does not stop the others; failures are logged and
    /// returned. Tasks scheduled while flushing wait for the next frame.
    pub fn flush_frame(&mut self, renderer: &mut dyn Renderer) -> Vec<(FrameKey, StyleError)> {
        let mut failures = Vec::new();
        for (key, task) in self.frames.take_pending() {
            if let Err(err) = task(&mut *self, &mut *renderer) {
                log::warn!("frame task {:?} failed: {err}", key);
                failures.push((key, err));
            }
        }
        failures
    }

    /// Number of tasks waiting for the next frame.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn injector(&self) -> &StyleInjector {
        self.registry.injector()
    }

    /// Mirrors the stylesheet into a host document from now on.
    pub fn set_style_sink(&mut self, sink: Box<dyn StyleSink>) {
        self.registry.injector_mut().set_sink(sink);
    }

    /// The whole stylesheet in cascade order.
    pub fn css_text(&self) -> String {
        self.registry.injector().css_text()
    }
}

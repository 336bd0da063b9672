//! Per-element processing context handed in by element processors

use crate::config::ResolveConfig;
use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::style::Fill;
use crate::theme::ThemeStore;

static NULL_SINK: NullSink = NullSink;

/// Everything a resolver call may consult besides its own input node.
///
/// Holds only shared references, so one context (or many cheap copies of
/// it) can be used from several threads at once.
#[derive(Clone)]
pub struct ProcessingContext<'a> {
    /// Active theme snapshot, if the document has one
    pub theme: Option<&'a ThemeStore>,
    /// Where warnings go
    pub diagnostics: &'a dyn DiagnosticSink,
    pub config: ResolveConfig,
    /// Target box width in output units
    pub width: f64,
    /// Target box height in output units
    pub height: f64,
    /// Fill of the enclosing group, used by `a:grpFill`
    pub group_fill: Option<&'a Fill>,
}

impl<'a> ProcessingContext<'a> {
    /// Create a context with no theme, a zero-size box and default config
    pub fn new(diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self {
            theme: None,
            diagnostics,
            config: ResolveConfig::default(),
            width: 0.0,
            height: 0.0,
            group_fill: None,
        }
    }

    /// Bind a theme snapshot
    pub fn with_theme(mut self, theme: &'a ThemeStore) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the resolver configuration
    pub fn with_config(mut self, config: ResolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the target bounding box
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the enclosing group's fill
    pub fn with_group_fill(mut self, fill: &'a Fill) -> Self {
        self.group_fill = Some(fill);
        self
    }
}

impl Default for ProcessingContext<'_> {
    /// Context that discards warnings
    fn default() -> Self {
        Self::new(&NULL_SINK)
    }
}

impl std::fmt::Debug for ProcessingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingContext")
            .field("theme", &self.theme.map(|t| t.name.as_deref()))
            .field("config", &self.config)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("group_fill", &self.group_fill)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let theme = ThemeStore::default();
        let ctx = ProcessingContext::default()
            .with_theme(&theme)
            .with_size(200.0, 100.0);
        assert!(ctx.theme.is_some());
        assert_eq!((ctx.width, ctx.height), (200.0, 100.0));
        assert!(ctx.group_fill.is_none());
    }
}

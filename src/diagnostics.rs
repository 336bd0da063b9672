//! Warnings emitted while resolving colors, geometry and styles.
//!
//! Nothing in the core aborts a conversion; recoverable problems are reported
//! through a caller-supplied [`DiagnosticSink`] and mirrored to `tracing`.

use std::fmt;
use std::sync::Mutex;

/// A single recoverable problem found while resolving an element
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub category: WarningCategory,
    pub message: String,
}

impl Warning {
    pub fn new(category: WarningCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Category of warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCategory {
    /// Semantic color name with no color-map entry
    UnmappedColor,
    /// Color-map chain loops or exceeds the depth bound
    CircularColorMap,
    /// Scheme color requested without a theme
    MissingTheme,
    /// Non-numeric text where a number was expected
    MalformedNumber,
    /// Preset/system/scheme color name not in any table
    UnknownColor,
    /// Preset geometry name not in the formula table
    UnknownPreset,
    /// Recognized markup the resolvers skip
    Unsupported,
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCategory::UnmappedColor => write!(f, "unmapped-color"),
            WarningCategory::CircularColorMap => write!(f, "circular-color-map"),
            WarningCategory::MissingTheme => write!(f, "missing-theme"),
            WarningCategory::MalformedNumber => write!(f, "malformed-number"),
            WarningCategory::UnknownColor => write!(f, "unknown-color"),
            WarningCategory::UnknownPreset => write!(f, "unknown-preset"),
            WarningCategory::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Receiver for warnings.
///
/// Sinks may be shared across threads resolving different elements, so
/// implementations must synchronize internally.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, warning: Warning);
}

/// Collects warnings for later inspection
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Mutex<Vec<Warning>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected warnings
    pub fn warnings(&self) -> Vec<Warning> {
        self.lock().clone()
    }

    /// Drain the collected warnings
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether any collected warning has the given category
    pub fn has(&self, category: WarningCategory) -> bool {
        self.lock().iter().any(|w| w.category == category)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Warning>> {
        // A poisoned lock still holds valid warnings
        self.warnings.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for Diagnostics {
    fn warn(&self, warning: Warning) {
        log_warning(&warning);
        self.lock().push(warning);
    }
}

/// Forwards warnings to `tracing` only
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, warning: Warning) {
        log_warning(&warning);
    }
}

/// Discards warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _warning: Warning) {}
}

fn log_warning(warning: &Warning) {
    tracing::warn!(category = %warning.category, "{}", warning.message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let sink = Diagnostics::new();
        sink.warn(Warning::new(WarningCategory::UnknownColor, "first"));
        sink.warn(Warning::new(WarningCategory::UnknownPreset, "second"));
        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message, "first");
        assert!(sink.has(WarningCategory::UnknownPreset));
    }

    #[test]
    fn test_take_drains() {
        let sink = Diagnostics::new();
        sink.warn(Warning::new(WarningCategory::Unsupported, "x"));
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_display() {
        let w = Warning::new(WarningCategory::CircularColorMap, "tx1 -> bg1 -> tx1");
        assert_eq!(w.to_string(), "[circular-color-map] tx1 -> bg1 -> tx1");
    }

    #[test]
    fn test_shared_across_threads() {
        let sink = Diagnostics::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let sink = &sink;
                s.spawn(move || {
                    sink.warn(Warning::new(WarningCategory::Unsupported, format!("{i}")))
                });
            }
        });
        assert_eq!(sink.warnings().len(), 4);
    }
}

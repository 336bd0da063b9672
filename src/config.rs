//! Configuration for the resolvers

/// What to do when a scheme color is requested and no theme is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMissingTheme {
    /// Return [`ResolveError::MissingTheme`](crate::ResolveError::MissingTheme)
    Fail,
    /// Resolve to fully transparent black and emit a warning
    #[default]
    DefaultTransparent,
}

/// Configuration options for color and geometry resolution
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Policy for scheme colors without a theme
    pub on_missing_theme: OnMissingTheme,

    /// Maximum number of color-map hops before a chain is treated as a cycle
    pub max_color_map_depth: usize,

    /// Distance (fraction of the local box) within which a custom path counts as closed
    pub ellipse_tolerance: f64,

    /// Decimal places kept in the alpha channel
    pub alpha_precision: u32,

    /// Decimal places kept in path coordinates
    pub coordinate_precision: u32,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            on_missing_theme: OnMissingTheme::default(),
            max_color_map_depth: 10,
            ellipse_tolerance: 0.01,
            alpha_precision: 3,
            coordinate_precision: 3,
        }
    }
}

impl ResolveConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-theme policy
    pub fn with_on_missing_theme(mut self, policy: OnMissingTheme) -> Self {
        self.on_missing_theme = policy;
        self
    }

    /// Set the color-map depth bound
    pub fn with_max_color_map_depth(mut self, depth: usize) -> Self {
        self.max_color_map_depth = depth;
        self
    }

    /// Set the closure tolerance used by ellipse detection
    pub fn with_ellipse_tolerance(mut self, tolerance: f64) -> Self {
        self.ellipse_tolerance = tolerance;
        self
    }

    /// Set the alpha precision
    pub fn with_alpha_precision(mut self, places: u32) -> Self {
        self.alpha_precision = places;
        self
    }

    /// Set the path coordinate precision
    pub fn with_coordinate_precision(mut self, places: u32) -> Self {
        self.coordinate_precision = places;
        self
    }
}

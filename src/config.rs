/// Knobs for collection and binding.
///
/// ```
/// use go125_aster::Config;
///
/// let staged = Config::default()
///     .with_bind_methods(false)
///     .with_render_fallback("invalid type");
/// assert!(!staged.bind_methods);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Run the method binder right after collection. Turn off to stage
    /// collection and binding separately.
    pub bind_methods: bool,
    /// Text recorded when a type cannot be rendered. `None` makes rendering
    /// failures abort collection of the file.
    pub render_fallback: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_methods: true,
            render_fallback: None,
        }
    }
}

impl Config {
    pub fn with_bind_methods(mut self, bind: bool) -> Self {
        self.bind_methods = bind;
        self
    }

    pub fn with_render_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.render_fallback = Some(fallback.into());
        self
    }
}

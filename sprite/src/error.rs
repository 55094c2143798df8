/// Why the knight could not be set up.
///
/// All of these are precondition failures: they are reported once and the
/// controller is never constructed. Nothing inside a running controller
/// fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    /// No element with the given id exists in the document.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// The element exists but is of the wrong kind.
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    /// The browser refused an event listener or animation frame request.
    #[error("could not register {0}")]
    Listener(String),
    /// The canvas refused to hand out a 2D context.
    #[error("2d rendering context unavailable")]
    NoContext,
    /// The sprite sheet image has not finished loading (or failed to).
    #[error("sprite sheet is not loaded")]
    SheetNotLoaded,
    /// The sprite sheet does not cover every frame the layout refers to.
    #[error("sprite sheet is {width}x{height}, layout needs at least {need_width}x{need_height}")]
    SheetTooSmall { width: f64, height: f64, need_width: f64, need_height: f64 },
    /// The rendering surface has no area to walk on.
    #[error("rendering surface has no area ({width}x{height})")]
    EmptySurface { width: f64, height: f64 },
    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The config JSON could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

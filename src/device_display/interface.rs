use std::error::Error;

/// What a display surface shows. Lines that are `None` are not drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View {
    pub status: String,
    pub result: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace everything on the surface with `view`.
    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}

use crate::domain::model::RenderContext;
use crate::utils::error::Result;
use handlebars::Handlebars;
use std::path::Path;

pub const INDEX_TEMPLATE: &str = "index";

const DEFAULT_INDEX: &str = include_str!("../../templates/index.hbs");

/// Compiled page templates, shared read-only across requests.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Renderer using the template compiled into the binary.
    pub fn new() -> Result<Self> {
        Self::from_source(DEFAULT_INDEX)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading page template from {}", path.as_ref().display());
        let source = std::fs::read_to_string(path)?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_template_string(INDEX_TEMPLATE, source)?;
        Ok(Self { handlebars })
    }

    pub fn render_index(&self, context: &RenderContext) -> Result<String> {
        Ok(self.handlebars.render(INDEX_TEMPLATE, context)?)
    }
}

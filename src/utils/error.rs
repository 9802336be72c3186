use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream fetch failed with status {status}: {payload}")]
    UpstreamFetchError { status: u16, payload: String },

    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    #[error("Invalid breed selection: {value:?}")]
    InvalidSelection { value: String },

    #[error("Template error: {0}")]
    TemplateError(#[from] Box<handlebars::TemplateError>),

    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Input,
    Render,
    Configuration,
    System,
}

impl GalleryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GalleryError::HttpError(_)
            | GalleryError::UpstreamFetchError { .. }
            | GalleryError::MalformedResponse { .. } => ErrorCategory::Upstream,
            GalleryError::InvalidSelection { .. } => ErrorCategory::Input,
            GalleryError::TemplateError(_) | GalleryError::RenderError(_) => ErrorCategory::Render,
            GalleryError::ConfigError { .. }
            | GalleryError::ConfigValidationError { .. }
            | GalleryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GalleryError::IoError(_) => ErrorCategory::System,
        }
    }

    /// True for every failure talking to the dog API, whatever the cause.
    pub fn is_upstream(&self) -> bool {
        self.category() == ErrorCategory::Upstream
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Upstream => "The dog breed service could not be reached".to_string(),
            ErrorCategory::Input => format!("{}", self),
            ErrorCategory::Render => "The page could not be rendered".to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GalleryError::HttpError(_) => "Check network connectivity and upstream.base_url",
            GalleryError::UpstreamFetchError { status, .. } if *status == 404 => {
                "The breed does not exist upstream; pick one from the list"
            }
            GalleryError::UpstreamFetchError { .. } | GalleryError::MalformedResponse { .. } => {
                "Verify upstream.base_url points at a Dog CEO compatible API"
            }
            GalleryError::InvalidSelection { .. } => "Select a breed from the list",
            GalleryError::TemplateError(_) | GalleryError::RenderError(_) => {
                "Check the template file set by server.template_path"
            }
            GalleryError::ConfigError { .. }
            | GalleryError::ConfigValidationError { .. }
            | GalleryError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            GalleryError::IoError(_) => "Check file paths and permissions",
        }
    }
}

impl From<handlebars::TemplateError> for GalleryError {
    fn from(err: handlebars::TemplateError) -> Self {
        GalleryError::TemplateError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;

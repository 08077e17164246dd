//! Error types for loading style configuration

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in a configuration source
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid style TOML: {message}")]
    Toml { message: String, span: Option<Span> },

    #[error("invalid colour '{value}' for '{key}'")]
    InvalidColor {
        key: String,
        value: String,
        span: Span,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml {
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}

impl ConfigError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            ConfigError::Io(_) => None,
            ConfigError::Toml { span, .. } => span.as_ref(),
            ConfigError::InvalidColor { span, .. } => Some(span),
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their `Display` text.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let label = match self {
            ConfigError::InvalidColor { .. } => {
                "expected #RGB, #RRGGBB, #AARRGGBB or a colour name".to_string()
            }
            _ => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

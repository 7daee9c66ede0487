use std::borrow::Cow;

/// Errors raised while writing the config document.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The destination could not be created, truncated or written.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, EmitError>;

pub trait EmitErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> EmitErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                EmitError::Io { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> EmitErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| EmitError::Io { source, context: Some(context.into()) })
    }
}

impl From<std::io::Error> for EmitError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element is not mounted")]
    NotMounted,
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("style update rejected: {0}")]
    Style(String),
}

impl EnvError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoWindow => "no_window",
            Self::NoDocument => "no_document",
            Self::NoBody => "no_body",
            Self::NotMounted => "not_mounted",
            Self::ObserverUnavailable(_) => "observer_unavailable",
            Self::Style(_) => "style",
        }
    }
}

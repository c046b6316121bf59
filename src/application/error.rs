#[derive(Debug)]
pub enum ApplicationError {
    NotFound(String),
    BadRequest(String),
    Corrupt(String),
    InternalError(String),
}

impl ApplicationError {
    pub fn message(&self) -> &str {
        match self {
            ApplicationError::NotFound(msg)
            | ApplicationError::BadRequest(msg)
            | ApplicationError::Corrupt(msg)
            | ApplicationError::InternalError(msg) => msg,
        }
    }
}

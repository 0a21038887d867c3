/// Authentication failure surfaced to the login form.
///
/// The bundled mock login never produces one, but the login call site must
/// handle it so a real credential check can slot in behind the same
/// signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    Unavailable(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::Unavailable(reason) => {
                write!(f, "Authentication unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// One or more required fields were left empty.
///
/// Recovered locally by the form that produced it; never propagates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(fields: Vec<&'static str>) -> Self {
        Self { fields }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fields.is_empty() {
            write!(f, "Please fill in all fields")
        } else {
            write!(f, "Missing required fields: {}", self.fields.join(", "))
        }
    }
}

impl std::error::Error for ValidationError {}

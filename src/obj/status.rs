use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StatusCode {
    Ok = 0,
    Corruption = 2,
    InvalidArgument = 4,
}

/// Outcome reported by callers of the key codec; the codec itself never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: StatusCode,
    message: Option<String>,
}

pub type Result<T> = std::result::Result<T, Status>;

impl Status {
    pub fn ok() -> Self {
        Status {
            code: StatusCode::Ok,
            message: None,
        }
    }

    pub fn corruption(msg: &str, msg2: Option<&str>) -> Self {
        Self::new(StatusCode::Corruption, msg, msg2)
    }

    pub fn invalid_argument(msg: &str, msg2: Option<&str>) -> Self {
        Self::new(StatusCode::InvalidArgument, msg, msg2)
    }

    fn new(code: StatusCode, msg: &str, msg2: Option<&str>) -> Self {
        let message = match msg2 {
            Some(m2) => format!("{}: {}", msg, m2),
            None => msg.to_string(),
        };
        Status {
            code,
            message: Some(message),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == StatusCode::Ok
    }

    pub fn is_corruption(&self) -> bool {
        self.code == StatusCode::Corruption
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == StatusCode::InvalidArgument
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "OK")
        } else {
            match &self.message {
                Some(msg) => write!(f, "{:?}: {}", self.code, msg),
                None => write!(f, "{:?}", self.code),
            }
        }
    }
}

impl std::error::Error for Status {}

/// An unquoted SQL identifier. Quoting happens at serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub String);

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

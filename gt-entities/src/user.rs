use std::fmt;

/// Opaque account identifier issued by the identity provider.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for AuthorId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for AuthorId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A signed-in account as reported by the identity provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid          : AuthorId,
    pub display_name : Option<String>,
    pub email        : Option<String>,
    /// Elevated-privilege claim. Only trustworthy after a token refresh.
    pub admin        : bool,
}

impl Identity {
    /// Label shown in the account corner: display name, else email,
    /// else the raw uid.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_else(|| self.uid.as_str())
    }
}

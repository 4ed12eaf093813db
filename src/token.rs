//! Type tokens and the identity a registered type is stamped with.

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a logical record family, independent of any version's
/// implementing type.
///
/// Tokens are declared by the application, usually as constants next to the
/// versions they describe:
///
/// ```
/// use netabase_migrate::TypeToken;
///
/// const WIDGET: TypeToken = TypeToken::new("Widget");
/// assert_eq!(WIDGET.name(), "Widget");
/// assert_eq!(WIDGET, TypeToken::new("Widget"));
/// ```
///
/// The name doubles as the wire tag written into serialized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeToken(&'static str);

impl TypeToken {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Display name, used for diagnostics and as the wire tag.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Lets families be looked up by the wire tag without building a token.
impl Borrow<str> for TypeToken {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl From<&'static str> for TypeToken {
    fn from(name: &'static str) -> Self {
        Self(name)
    }
}

/// The `{type token, version}` pair a constructing type was registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registration {
    pub token: TypeToken,
    pub version: u32,
}

impl Registration {
    pub const fn new(token: TypeToken, version: u32) -> Self {
        Self { token, version }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.token, self.version)
    }
}

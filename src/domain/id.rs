use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// Error returned when an identifier is empty or only whitespace.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid {kind} '{value}': must contain at least one non-whitespace character")]
pub struct InvalidIdError {
    kind: &'static str,
    value: String,
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(NonEmptyString);

        impl $name {
            /// Creates a new identifier.
            ///
            /// Surrounding whitespace is trimmed. Identifiers are
            /// case-sensitive.
            ///
            /// # Errors
            ///
            /// Returns [`InvalidIdError`] if nothing remains after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, InvalidIdError> {
                let value = value.into();
                NonEmptyString::new(value.trim().to_string())
                    .map(Self)
                    .map_err(|_| InvalidIdError { kind: $kind, value })
            }

            /// Returns the string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = InvalidIdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.as_str().to_string()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

identifier!(
    /// The identity of a student, e.g. `S001`.
    StudentId,
    "student ID"
);

identifier!(
    /// The identity of a faculty member, e.g. `F001`.
    FacultyId,
    "faculty ID"
);

identifier!(
    /// The identity of a course, e.g. `CS101`.
    CourseCode,
    "course code"
);

use std::fmt::{self, Display};

use serde::Serialize;

///
/// A reference SNP accession number, e.g. `rs6311`.
///
/// The value is kept exactly as it was read (minus surrounding whitespace); nothing checks
/// that it looks like an rsid. A malformed one simply yields a request the service rejects.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rsid(String);

impl Rsid {
    pub fn new(value: &str) -> Self {
        Rsid(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Rsid {
    fn from(value: &str) -> Self {
        Rsid::new(value)
    }
}

impl From<String> for Rsid {
    fn from(value: String) -> Self {
        Rsid::new(&value)
    }
}

impl AsRef<str> for Rsid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Rsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("rs6311", "rs6311")]
    #[case("  rs6311\t", "rs6311")]
    #[case("not-an-rsid", "not-an-rsid")]
    fn test_rsid_is_trimmed_but_not_validated(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(Rsid::from(raw).as_str(), expected);
    }

    #[rstest]
    fn test_rsid_display() {
        assert_eq!(format!("{}", Rsid::from("rs123")), "rs123");
    }
}

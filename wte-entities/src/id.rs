use std::fmt;

/// Opaque identifier assigned by an external provider.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

impl Id {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_provider_ids_verbatim() {
        let id = Id::from("ChIJ-mesa");
        assert_eq!("ChIJ-mesa", id.as_str());
        assert_eq!("ChIJ-mesa", id.to_string());
        assert_eq!(id, Id::from("ChIJ-mesa".to_string()));
    }
}

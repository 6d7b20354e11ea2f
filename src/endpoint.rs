use derive_more::{AsRef, Deref, Display, Into};

/// A REST API endpoint, with no leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Display, Into, AsRef, Deref)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(endpoint: &str) -> Self {
        Self(endpoint.trim_start_matches('/').to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_strips_leading_slash() {
        assert_eq!(Endpoint::new("/changes/").to_string(), "changes/");
        assert_eq!(Endpoint::new("changes/").to_string(), "changes/");
    }
}

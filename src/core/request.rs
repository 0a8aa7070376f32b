use crate::config::AdapterConfig;
use reqwest::{Method, StatusCode};

/// The three calls the adapter makes against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    List,
    Activate,
}

impl Operation {
    pub fn method(self) -> Method {
        match self {
            Operation::Upload => Method::POST,
            Operation::List => Method::GET,
            Operation::Activate => Method::PUT,
        }
    }

    /// Status codes that count as success for this call.
    pub fn accepted_statuses(self) -> &'static [u16] {
        match self {
            Operation::Upload => &[200, 201, 204],
            Operation::List => &[200],
            Operation::Activate => &[200, 204],
        }
    }

    pub fn accepts(self, status: StatusCode) -> bool {
        self.accepted_statuses().contains(&status.as_u16())
    }

    fn purpose(self) -> &'static str {
        match self {
            Operation::Upload => "to add revision",
            Operation::List => "to get revisions",
            Operation::Activate => "to activate revision",
        }
    }

    /// `POST 'http://x/res' to add revision`
    pub fn describe(self, url: &str) -> String {
        format!("{} '{}' {}", self.method(), url, self.purpose())
    }
}

/// 組出 `{host}/{resource}` 以及 `{host}/{resource}/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    resource: String,
}

impl Endpoint {
    /// Expects an already normalized config.
    pub fn new(config: &AdapterConfig) -> Self {
        Self {
            host: config.host.clone(),
            resource: config.resource.clone(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.host, self.resource)
    }

    pub fn revision_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(host: &str, resource: &str) -> Endpoint {
        Endpoint::new(&AdapterConfig::new(host, resource).normalize().unwrap())
    }

    #[test]
    fn test_collection_url_after_normalization() {
        assert_eq!(endpoint("http://x/", "/res/").collection_url(), "http://x/res");
    }

    #[test]
    fn test_revision_url_percent_encodes_id() {
        let endpoint = endpoint("http://x", "res");
        assert_eq!(endpoint.revision_url("a b"), "http://x/res/a%20b");
        assert_eq!(endpoint.revision_url("web:3f78685"), "http://x/res/web%3A3f78685");
        assert_eq!(endpoint.revision_url("a/b?c"), "http://x/res/a%2Fb%3Fc");
        assert_eq!(endpoint.revision_url("plain-id_1.0~x"), "http://x/res/plain-id_1.0~x");
    }

    #[test]
    fn test_status_policies() {
        for code in [200, 201, 204] {
            assert!(Operation::Upload.accepts(StatusCode::from_u16(code).unwrap()));
        }
        assert!(!Operation::Upload.accepts(StatusCode::ACCEPTED));
        assert!(!Operation::Upload.accepts(StatusCode::INTERNAL_SERVER_ERROR));

        assert!(Operation::List.accepts(StatusCode::OK));
        assert!(!Operation::List.accepts(StatusCode::NO_CONTENT));
        assert!(!Operation::List.accepts(StatusCode::CREATED));

        assert!(Operation::Activate.accepts(StatusCode::OK));
        assert!(Operation::Activate.accepts(StatusCode::NO_CONTENT));
        assert!(!Operation::Activate.accepts(StatusCode::CREATED));
        assert!(!Operation::Activate.accepts(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Operation::Activate.describe("http://x/res/abc"),
            "PUT 'http://x/res/abc' to activate revision"
        );
        assert_eq!(
            Operation::List.describe("http://x/res"),
            "GET 'http://x/res' to get revisions"
        );
    }
}

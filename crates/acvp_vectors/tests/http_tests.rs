//! HttpVectorSource against a wiremock server
//!
//! The source is blocking, so the mock server is driven from a runtime owned
//! by the test rather than from `#[tokio::test]`.

use acvp_vectors::store::{etag_path, read_stored_token};
use acvp_vectors::{
    Dataset, FetchOutcome, HttpVectorSource, RemoteResource, VectorError, VectorFetcher,
    VectorSource,
};
use std::fs;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct VectorServer {
    server: MockServer,
    runtime: Runtime,
}

impl VectorServer {
    fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    fn uri(&self) -> String {
        self.server.uri()
    }

    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn get(&self, request_path: &str, response: ResponseTemplate) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(request_path))
                .respond_with(response),
        );
    }

    fn request_paths(&self) -> Vec<String> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

fn local_source() -> HttpVectorSource {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    HttpVectorSource::with_client(client)
}

#[test]
fn etag_header_is_returned_verbatim() {
    let body = r#"{"testGroups":[{"parameterSet":"SLH-DSA-SHA2-128s"}]}"#;
    let server = VectorServer::start();
    server.get(
        "/doc.json",
        ResponseTemplate::new(200)
            .insert_header("ETag", "\"0123abcd\"")
            .set_body_string(body),
    );

    let doc = local_source().get(&format!("{}/doc.json", server.uri())).unwrap();
    assert_eq!(doc.etag(), "\"0123abcd\"");
    assert_eq!(doc.read_body().unwrap(), body.as_bytes());

    assert_eq!(server.request_paths(), vec!["/doc.json"]);
}

#[test]
fn missing_etag_is_empty() {
    let server = VectorServer::start();
    server.get(
        "/doc.json",
        ResponseTemplate::new(200).set_body_string(r#"{"testGroups":[]}"#),
    );

    let doc = local_source().get(&format!("{}/doc.json", server.uri())).unwrap();
    assert_eq!(doc.etag(), "");
}

#[test]
fn error_status_is_network_error() {
    let server = VectorServer::start();
    server.get(
        "/doc.json",
        ResponseTemplate::new(404).set_body_string("404: Not Found"),
    );

    let err = match local_source().get(&format!("{}/doc.json", server.uri())) {
        Ok(_) => panic!("404 must not succeed"),
        Err(e) => e,
    };
    match err {
        VectorError::Network { reason, .. } => assert!(reason.contains("404")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn server_error_is_network_error() {
    let server = VectorServer::start();
    server.get("/doc.json", ResponseTemplate::new(503));

    let result = local_source().get(&format!("{}/doc.json", server.uri()));
    assert!(matches!(result, Err(VectorError::Network { .. })));
}

#[test]
fn connection_refused_is_network_error() {
    let result = local_source().get("http://127.0.0.1:1/doc.json");
    assert!(matches!(result, Err(VectorError::Network { .. })));
}

#[test]
fn end_to_end_fetch_over_http() {
    let body = r#"{"testGroups":[{"tgId":1,"parameterSet":"SLH-DSA-SHA2-128s"},{"tgId":2,"parameterSet":"SLH-DSA-SHA2-128f"}]}"#;
    let server = VectorServer::start();
    let resource = RemoteResource::new(Dataset::Keygen, &server.uri(), "rev");
    let request_path = "/rev/gen-val/json-files/SLH-DSA-keyGen-FIPS205/internalProjection.json";
    server.get(
        request_path,
        ResponseTemplate::new(200)
            .insert_header("ETag", "xyz")
            .set_body_string(body),
    );

    let temp = TempDir::new().unwrap();
    let out = temp.path().join("keygen.json");
    let fetcher = VectorFetcher::new(local_source());

    let outcome = fetcher.fetch_if_changed(&resource, &out).unwrap();
    assert_eq!(outcome, FetchOutcome::Updated { groups: 1 });
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        r#"[{"tgId":1,"parameterSet":"SLH-DSA-SHA2-128s"}]"#
    );
    assert_eq!(fs::read_to_string(etag_path(&out)).unwrap(), "xyz");

    // Same ETag on the second run leaves the output alone.
    fs::write(&out, "kept").unwrap();
    let outcome = fetcher.fetch_if_changed(&resource, &out).unwrap();
    assert_eq!(outcome, FetchOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&out).unwrap(), "kept");
    assert_eq!(read_stored_token(&out), "xyz");

    assert_eq!(server.request_paths(), vec![request_path, request_path]);
}

//! Tests for the TMDB search client

use super::*;
use proptest::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

const MATRIX_BODY: &str = r#"{"page":1,"results":[{"id":603,"title":"The Matrix","release_date":"1999-03-31","vote_average":8.2,"vote_count":26000},{"id":604,"title":"The Matrix Reloaded","release_date":"2003-05-15","vote_average":7.0,"vote_count":11000}],"total_pages":1,"total_results":2}"#;

/// Serve exactly one canned HTTP response on a loopback port
///
/// Returns the base URL and a handle yielding the raw request head.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}/3", addr), handle)
}

fn test_client(base_url: &str) -> TmdbClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    TmdbClient::with_http_client(http, "test-token".to_string(), &api)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

#[test]
fn test_debug_output_hides_token() {
    let client = test_client("https://api.themoviedb.org/3");
    let debug = format!("{:?}", client);
    assert!(debug.contains("TmdbClient"));
    assert!(!debug.contains("test-token"));
}

#[test]
fn test_search_url_strips_trailing_slash() {
    let client = test_client("https://api.themoviedb.org/3/");
    assert_eq!(client.search_url(), "https://api.themoviedb.org/3/search/movie");
}

#[test]
fn test_build_request_sets_bearer_and_query() {
    let client = test_client("https://api.themoviedb.org/3");
    let request = client.build_request("Matrix").unwrap();

    assert_eq!(request.method(), &reqwest::Method::GET);
    assert_eq!(request.url().path(), "/3/search/movie");

    let pairs: Vec<(String, String)> = request
        .url()
        .query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert!(pairs.contains(&("query".to_string(), "Matrix".to_string())));
    assert!(pairs.contains(&("include_adult".to_string(), "false".to_string())));
    assert!(pairs.contains(&("language".to_string(), "en-US".to_string())));

    let auth = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer test-token");
}

#[test]
fn test_build_request_forwards_empty_query() {
    let client = test_client("https://api.themoviedb.org/3");
    let request = client.build_request("").unwrap();
    let query = request
        .url()
        .query_pairs()
        .find(|(k, _)| k == "query")
        .map(|(_, v)| v.to_string());
    assert_eq!(query.as_deref(), Some(""));
}

#[test]
fn test_build_request_omits_blank_language() {
    let api = ApiConfig {
        language: Some(String::new()),
        ..ApiConfig::default()
    };
    let client = TmdbClient::with_http_client(reqwest::Client::new(), "t".to_string(), &api);
    let request = client.build_request("x").unwrap();
    assert!(!request.url().query_pairs().any(|(k, _)| k == "language"));
}

#[test]
fn test_search_success_returns_results_in_order() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", MATRIX_BODY);
    let client = test_client(&base_url);

    let movies = block_on(client.search("Matrix")).unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "The Matrix");
    assert_eq!(movies[1].id, 604);

    let request_head = server.join().unwrap();
    assert!(request_head.starts_with("GET /3/search/movie?"));
    assert!(request_head.contains("query=Matrix"));
    assert!(
        request_head
            .to_ascii_lowercase()
            .contains("authorization: bearer test-token")
    );
}

#[test]
fn test_search_empty_results() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", r#"{"page":1,"results":[]}"#);
    let client = test_client(&base_url);

    let movies = block_on(client.search("zzzznomovie")).unwrap();

    assert!(movies.is_empty());
    server.join().unwrap();
}

#[test]
fn test_search_non_2xx_is_api_error() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 401 Unauthorized",
        r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#,
    );
    let client = test_client(&base_url);

    let result = block_on(client.search("Matrix"));

    match result {
        Err(SearchError::Api { code, message }) => {
            assert_eq!(code, 401);
            assert!(message.starts_with("Invalid API key"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
    server.join().unwrap();
}

#[test]
fn test_search_malformed_body_is_parse_error() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", r#"{"movies":[]}"#);
    let client = test_client(&base_url);

    let result = block_on(client.search("Matrix"));

    assert!(matches!(result, Err(SearchError::Parse(_))));
    server.join().unwrap();
}

#[test]
fn test_search_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = test_client(&format!("http://{}/3", addr));

    let result = block_on(client.search("Matrix"));

    assert!(matches!(result, Err(SearchError::Network(_))));
}

#[test]
fn test_pre_cancelled_token_skips_request() {
    let client = test_client("http://127.0.0.1:9/3");
    let cancel_token = CancellationToken::new();
    cancel_token.cancel();

    let result = block_on(client.search_with_cancel("Matrix", &cancel_token));

    assert_eq!(result, Err(SearchError::Cancelled));
}

#[test]
fn test_search_with_live_token_completes() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", MATRIX_BODY);
    let client = test_client(&base_url);
    let cancel_token = CancellationToken::new();

    let movies = block_on(client.search_with_cancel("Matrix", &cancel_token)).unwrap();

    assert_eq!(movies.len(), 2);
    server.join().unwrap();
}

#[test]
fn test_api_error_message_falls_back_to_body() {
    assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
    assert_eq!(api_error_message("   "), "Unknown error");
}

#[test]
fn test_api_error_message_is_truncated() {
    let long = "x".repeat(1000);
    assert_eq!(api_error_message(&long).chars().count(), MAX_ERROR_BODY_CHARS);
}

// Any query string survives URL encoding unchanged
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_query_param_round_trips(query in ".{0,40}") {
        let client = test_client("https://api.themoviedb.org/3");
        let request = client.build_request(&query).unwrap();
        let sent = request
            .url()
            .query_pairs()
            .find(|(k, _)| k == "query")
            .map(|(_, v)| v.to_string());
        prop_assert_eq!(sent, Some(query));
    }
}

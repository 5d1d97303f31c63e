use hello_goodbye::http::request::ParsedRequest;

#[test]
fn test_new_request_is_empty() {
    let req = ParsedRequest::new();

    assert!(req.is_empty());
    assert_eq!(req.method(), None);
    assert_eq!(req.path(), None);
    assert!(req.headers.is_empty());
}

#[test]
fn test_request_line_sets_method_and_path_together() {
    let req = ParsedRequest::with_request_line("GET", "/index.html");

    assert!(!req.is_empty());
    assert_eq!(req.method(), Some("GET"));
    assert_eq!(req.path(), Some("/index.html"));
    assert!(req.headers.is_empty());
}

#[test]
fn test_header_lookup_is_exact() {
    let mut req = ParsedRequest::with_request_line("GET", "/");
    req.headers.insert("Content-Type".to_string(), "text/plain".to_string());

    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.header("content-type"), None);
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_display_lists_request_details() {
    let mut req = ParsedRequest::with_request_line("GET", "/x");
    req.headers.insert("Foo".to_string(), "bar".to_string());

    let text = req.to_string();

    assert!(text.contains("Method: GET"));
    assert!(text.contains("Path:   /x"));
    assert!(text.contains("\tFoo : bar"));
}

#[test]
fn test_display_empty_request() {
    let text = ParsedRequest::new().to_string();

    assert!(text.contains("Method: -"));
    assert!(text.ends_with("Headers:"));
}

#[test]
fn test_request_clone_and_eq() {
    let mut req = ParsedRequest::with_request_line("PUT", "/item");
    req.headers.insert("X-Id".to_string(), "7".to_string());

    assert_eq!(req.clone(), req);
    assert_ne!(req, ParsedRequest::new());
}

use wwwd::error::ServeError;
use wwwd::http::parser::parse_request_line;
use wwwd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_bare_newline_line_endings() {
    let req = b"GET /base.css HTTP/1.1\nHost: example.com\n\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.path, "/base.css");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_request_line_without_terminator() {
    let parsed = parse_request_line(b"GET /index.html HTTP/1.0").unwrap();
    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_extra_whitespace_between_tokens() {
    let parsed = parse_request_line(b"GET    /a.html \t HTTP/1.1\r\n").unwrap();
    assert_eq!(parsed.path, "/a.html");
}

#[test]
fn test_parse_version_not_validated() {
    let parsed = parse_request_line(b"GET / banana\r\n\r\n").unwrap();
    assert_eq!(parsed.version, "banana");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let parsed = parse_request_line(b"GET /search?q=rust HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_unknown_method_still_parses() {
    let parsed = parse_request_line(b"FROB / HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.method, Method::Other("FROB".to_string()));
}

#[test]
fn test_parse_single_token() {
    let result = parse_request_line(b"GET\r\n\r\n");
    assert!(matches!(result, Err(ServeError::MalformedRequestLine { tokens: 1 })));
}

#[test]
fn test_parse_four_tokens() {
    let result = parse_request_line(b"GET / HTTP/1.1 extra\r\n\r\n");
    assert!(matches!(result, Err(ServeError::MalformedRequestLine { tokens: 4 })));
}

#[test]
fn test_parse_empty_input() {
    assert!(matches!(
        parse_request_line(b""),
        Err(ServeError::MalformedRequestLine { tokens: 0 })
    ));
    assert!(matches!(
        parse_request_line(b"\r\n\r\n"),
        Err(ServeError::MalformedRequestLine { tokens: 0 })
    ));
}

#[test]
fn test_parse_only_first_line_counts() {
    // The second line has three tokens, the first does not.
    let result = parse_request_line(b"GET /\r\nGET / HTTP/1.1\r\n");
    assert!(matches!(result, Err(ServeError::MalformedRequestLine { tokens: 2 })));
}

#[test]
fn test_parse_invalid_utf8_does_not_panic() {
    let parsed = parse_request_line(b"GET /\xff\xfe.html HTTP/1.1\r\n").unwrap();
    assert!(parsed.path.ends_with(".html"));
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::Router;
use http::Method;

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_register_and_route() {
    let mut router = Router::new();
    router.register(Method::GET, "a1", patterns(&["/api/v1/a"]));
    router.register(Method::GET, "a2", patterns(&["/api/v2/a", "/api/v3/a"]));

    assert_eq!(router.route(Method::GET, "/api/v1/a").unwrap().handler_name(), "a1");
    let matched = router.route(Method::GET, "/api/v3/a").unwrap();
    assert_eq!(matched.handler_name(), "a2");
    assert_eq!(matched.pattern.as_ref(), "/api/v3/a");
    assert!(router.route(Method::GET, "/api/a").is_none());
    assert!(router.route(Method::POST, "/api/v1/a").is_none());
}

#[test]
fn test_repeats_collapse_within_an_entry() {
    let mut router = Router::new();
    let entry = router.register(Method::GET, "h", patterns(&["/v1/a", "/v1/a", "/v2/a"]));
    assert_eq!(entry.patterns, patterns(&["/v1/a", "/v2/a"]));
}

#[test]
fn test_repeats_across_entries_are_kept() {
    let mut router = Router::new();
    router.register(Method::GET, "a1", patterns(&["/v1/a", "/v3/a"]));
    router.register(Method::GET, "a2", patterns(&["/v3/a"]));

    assert_eq!(router.all_patterns(), vec!["/v1/a", "/v3/a", "/v3/a"]);
    assert_eq!(router.len(), 2);
    // First registration answers.
    assert_eq!(router.route(Method::GET, "/v3/a").unwrap().handler_name(), "a1");
}

#[test]
fn test_path_params() {
    let mut router = Router::new();
    router.register(
        Method::GET,
        "get_post",
        patterns(&["/v1/users/{user_id}/posts/{post_id}"]),
    );
    let matched = router.route(Method::GET, "/v1/users/7/posts/42").unwrap();
    assert_eq!(matched.get_path_param("user_id"), Some("7"));
    assert_eq!(matched.get_path_param("post_id"), Some("42"));
    assert_eq!(matched.get_path_param("missing"), None);
}

#[test]
fn test_empty_router() {
    let router = Router::new();
    assert!(router.is_empty());
    assert!(router.all_patterns().is_empty());
    assert!(router.route(Method::GET, "/").is_none());
}

#[test]
fn test_dump_routes() {
    let mut router = Router::new();
    router.register(Method::GET, "d", patterns(&["/api/d"]));
    router.register(Method::POST, "c", patterns(&["/api/v1/c"]));

    let mut out = Vec::new();
    router.dump_routes(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "GET /api/d -> d\nPOST /api/v1/c -> c\n"
    );
}

#[test]
fn test_variant_shares_pattern_with_first_registration() {
    let mut router = Router::new();
    router.register(Method::GET, "error", patterns(&["/error"]));
    let variant = router.register_variant(Method::GET, "error_html", patterns(&["/error"]));

    assert_eq!(variant.handler_name, "error_html");
    assert_eq!(router.all_patterns(), vec!["/error", "/error"]);
    assert_eq!(router.route(Method::GET, "/error").unwrap().handler_name(), "error");
}

use crate::matcher::{RequestParts, RouteRequest};
use crate::route::Route;
use http::Method;

fn get(path: &str) -> RequestParts {
    RequestParts::new(Method::GET, path, "localhost", "http")
}

#[test]
fn literal_route_matches_exact_path() {
    let route = Route::new("/about/", "About:index").expect("compile failed");
    assert!(route.matches(&get("/about/")).is_some());
    assert!(route.matches(&get("/about")).is_some());
    assert!(route.matches(&get("/contact/")).is_none());
}

#[test]
fn mandatory_placeholder_is_captured() {
    let route = Route::new("/{foo}/", "Foo:index").expect("compile failed");
    let matched = route.matches(&get("/bar/")).expect("should match");
    assert_eq!(matched.get("foo"), Some("bar"));
}

#[test]
fn match_is_case_insensitive() {
    let route = Route::new("/{foo:[a-z]}/", "Foo:index").expect("compile failed");
    let matched = route.matches(&get("/BAR/")).expect("should match");
    assert_eq!(matched.get("foo"), Some("BAR"));
}

#[test]
fn conditional_segment_may_be_absent() {
    let route = Route::new("/{foo}/({bar:[a-z]}.json)/", "Foo:index").expect("compile failed");

    let matched = route.matches(&get("/x/")).expect("should match without bar");
    assert_eq!(matched.get("foo"), Some("x"));
    assert_eq!(matched.get("bar"), None);

    let matched = route.matches(&get("/x/y.json/")).expect("should match with bar");
    assert_eq!(matched.get("foo"), Some("x"));
    assert_eq!(matched.get("bar"), Some("y"));
}

#[test]
fn conditional_suffix_is_stripped_from_binding() {
    // default fragment contains '.', so the capture can swallow the suffix
    let route = Route::new("/({doc}.json)/", "Docs:show").expect("compile failed");
    let matched = route.matches(&get("/report.json/")).expect("should match");
    assert_eq!(matched.get("doc"), Some("report"));
}

#[test]
fn method_guard_short_circuits() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("compile failed")
        .methods([Method::POST]);

    let request = RequestParts::new(Method::GET, "/bar/", "localhost", "http");
    assert!(route.matches(&request).is_none());

    let request = RequestParts::new(Method::POST, "/bar/", "localhost", "http");
    assert!(route.matches(&request).is_some());
}

#[test]
fn schema_guard_uses_substring() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("compile failed")
        .schema("https");

    let http = RequestParts::new(Method::GET, "/bar/", "localhost", "http");
    assert!(route.matches(&http).is_none());

    let https = RequestParts::new(Method::GET, "/bar/", "localhost", "https");
    assert!(route.matches(&https).is_some());
}

#[test]
fn host_guard_supports_basename_wildcard() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("compile failed")
        .host("{basename}.example.com")
        .expect("host should compile");

    let good = RequestParts::new(Method::GET, "/bar/", "blog.example.com", "http");
    assert!(route.matches(&good).is_some());

    let bad = RequestParts::new(Method::GET, "/bar/", "example.org", "http");
    assert!(route.matches(&bad).is_none());
}

#[test]
fn host_guard_is_case_sensitive() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("compile failed")
        .host("example.com")
        .expect("host should compile");

    let exact = RequestParts::new(Method::GET, "/bar/", "example.com", "http");
    assert!(route.matches(&exact).is_some());

    let upper = RequestParts::new(Method::GET, "/bar/", "EXAMPLE.COM", "http");
    assert!(route.matches(&upper).is_none());
}

#[test]
fn default_arguments_seed_the_bindings() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("compile failed")
        .arguments([("locale", "en")])
        .expect("arguments should bind");
    let matched = route.matches(&get("/bar/")).expect("should match");
    assert_eq!(matched.get("locale"), Some("en"));
    assert_eq!(matched.get("foo"), Some("bar"));
}

#[test]
fn capture_overrides_default_argument() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("compile failed")
        .arguments([("foo", "default")])
        .expect("arguments should bind");
    let matched = route.matches(&get("/actual/")).expect("should match");
    assert_eq!(matched.get("foo"), Some("actual"));
}

#[test]
fn duplicate_placeholder_matches_without_panicking() {
    let route = Route::new("/{id}/{id}/", "Dup:index").expect("compile failed");
    let matched = route.matches(&get("/a/b/")).expect("should match");
    // last non-empty capture wins
    assert_eq!(matched.get("id"), Some("b"));
}

#[test]
fn refined_requirement_narrows_the_match() {
    let mut route = Route::new("/{id}/", "Item:show").expect("compile failed");
    assert!(route.matches(&get("/abc/")).is_some());

    route
        .set_requirements(&[("id".to_string(), "[0-9]+".to_string())])
        .expect("refinement failed");
    assert!(route.matches(&get("/abc/")).is_none());
    assert!(route.matches(&get("/123/")).is_some());
}

#[test]
fn request_parts_expose_their_fields() {
    let request = RequestParts::new(Method::GET, "/x/", "example.com", "https");
    assert_eq!(request.path(), "/x/");
    assert_eq!(request.host(), "example.com");
    assert_eq!(request.schema(), "https");
    assert_eq!(request.method(), &Method::GET);
}

use http::Method;
use retrace::{RequestParts, Route, RouteMatch, Router};
use std::collections::HashMap;

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn assert_bindings(matched: &RouteMatch, expected: &[(&str, &str)]) {
    for (name, value) in expected {
        assert_eq!(
            matched.get(name),
            Some(*value),
            "binding mismatch for '{}': expected '{}', got {:?}",
            name,
            value,
            matched.get(name)
        );
    }
}

#[test]
fn end_to_end_pages_scenario() {
    let route = Route::new("/{lang:[a-z]{2}}/({page:[a-z-]}.html)/", "Pages:show")
        .expect("pattern should compile")
        .methods([Method::GET]);

    let get = RequestParts::new(Method::GET, "/en/about.html/", "localhost", "http");
    let matched = route.matches(&get).expect("GET should match");
    assert_bindings(&matched, &[("lang", "en"), ("page", "about")]);

    let post = RequestParts::new(Method::POST, "/en/about.html/", "localhost", "http");
    assert!(route.matches(&post).is_none(), "POST must be rejected");

    let url = route
        .generate("http://localhost", &args(&[("lang", "en")]))
        .expect("generation should succeed");
    assert_eq!(url, "http://localhost/en/");
}

#[test]
fn method_guard_rejects_before_path_matching() {
    let route = Route::new("/{foo}/", "Foo:index")
        .expect("pattern should compile")
        .methods([Method::POST]);

    // matching path, wrong method: rejected with no bindings produced
    let get = RequestParts::new(Method::GET, "/bar/", "localhost", "http");
    assert!(route.matches(&get).is_none());

    // non-matching path, right method: the guard passes but the path does not
    let post = RequestParts::new(Method::POST, "/too/deep/", "localhost", "http");
    assert!(route.matches(&post).is_none());
}

#[test]
fn trailing_separator_is_equivalent() {
    let route = Route::new("/{lang:[a-z]{2}}/", "Pages:index").expect("pattern should compile");
    for path in ["/en/", "/en"] {
        let request = RequestParts::new(Method::GET, path, "localhost", "http");
        let matched = route.matches(&request);
        assert!(matched.is_some(), "path '{}' should match", path);
    }
}

#[test]
fn duplicate_placeholder_pattern_parses_and_matches() {
    let route = Route::new("/{id}/{id}/", "Dup:index").expect("pattern should compile");
    assert_eq!(route.compiled().requirements().len(), 1);
    let request = RequestParts::new(Method::GET, "/12/12/", "localhost", "http");
    assert!(route.matches(&request).is_some());
}

#[test]
fn router_table_end_to_end() {
    let mut router = Router::new();
    router.add(Route::new("/", "Home:index").expect("pattern should compile"));
    router.add(
        Route::new("/{lang:[a-z]{2}}/({page:[a-z-]}.html)/", "Pages:show")
            .expect("pattern should compile")
            .methods([Method::GET]),
    );

    let request = RequestParts::new(Method::GET, "/", "localhost", "http");
    let (route, _) = router.matched(&request).expect("home should match");
    assert_eq!(route.controller(), "Home:index");

    let request = RequestParts::new(Method::GET, "/de/impressum.html/", "localhost", "http");
    let (route, matched) = router.matched(&request).expect("pages should match");
    assert_eq!(route.controller(), "Pages:show");
    assert_bindings(&matched, &[("lang", "de"), ("page", "impressum")]);

    let url = router
        .url(
            "Pages:show",
            "http://localhost",
            &args(&[("lang", "de"), ("page", "impressum")]),
        )
        .expect("reverse lookup should succeed");
    assert_eq!(url, "http://localhost/de/impressum.html/");
}

#[test]
fn https_only_route_behind_wildcard_host() {
    let route = Route::new("/admin/{section}/", "Admin:panel")
        .expect("pattern should compile")
        .schema("https")
        .host("{basename}.example.com")
        .expect("host should compile");

    let good = RequestParts::new(Method::GET, "/admin/users/", "ops.example.com", "https");
    let matched = route.matches(&good).expect("should match");
    assert_bindings(&matched, &[("section", "users")]);

    let wrong_schema = RequestParts::new(Method::GET, "/admin/users/", "ops.example.com", "http");
    assert!(route.matches(&wrong_schema).is_none());

    let wrong_host = RequestParts::new(Method::GET, "/admin/users/", "ops.example.org", "https");
    assert!(route.matches(&wrong_host).is_none());
}

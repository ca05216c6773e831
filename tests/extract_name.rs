use nicru_dns01::extract_name;

#[test]
fn apex_challenge() {
    assert_eq!(
        extract_name("_acme-challenge.example.com", "example.com"),
        "_acme-challenge"
    );
}

#[test]
fn subdomain_challenge() {
    assert_eq!(
        extract_name("_acme-challenge.test.example.com", "example.com"),
        "_acme-challenge.test"
    );
}

#[test]
fn wildcard_prefix_is_stripped() {
    assert_eq!(extract_name("*.test.example.com", "example.com"), "test");
}

#[test]
fn wildcard_prefix_without_zone_suffix() {
    assert_eq!(
        extract_name("*.test.other.org", "example.com"),
        "test.other.org"
    );
}

#[test]
fn unrelated_zone_leaves_the_name_alone() {
    assert_eq!(
        extract_name("_acme-challenge.other.org", "example.com"),
        "_acme-challenge.other.org"
    );
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(
        extract_name("_acme-challenge.Example.com", "example.com"),
        "_acme-challenge.Example.com"
    );
}

#[test]
fn zone_matches_on_a_label_boundary() {
    // "badexample.com" must not lose its "example.com" tail
    assert_eq!(
        extract_name("_acme-challenge.badexample.com", "example.com"),
        "_acme-challenge.badexample.com"
    );
}

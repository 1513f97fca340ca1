use super::*;

#[test]
fn route_table_is_valid() {
    assert_eq!(validate(&route_table()), Ok(()));
}

#[test]
fn every_path_resolves_to_exactly_one_entry() {
    let table = route_table();
    for entry in &table {
        let matches = table.iter().filter(|e| e.path == entry.path).count();
        assert_eq!(matches, 1, "{} declared {matches} times", entry.path);
        assert_eq!(resolve(&table, entry.path), Some(entry));
    }
}

#[test]
fn home_uses_home_header_and_others_inner() {
    let table = route_table();
    let home = resolve(&table, "/").unwrap();
    assert_eq!(home.page, "HomePage");
    assert_eq!(home.meta.get("headerVariant"), Some(&HEADER_HOME));

    for entry in table.iter().filter(|e| e.path != "/") {
        assert_eq!(entry.meta.get("headerVariant"), Some(&HEADER_INNER), "{}", entry.path);
    }
}

#[test]
fn resolve_unknown_path_is_none() {
    assert!(resolve(&route_table(), "/missing").is_none());
    assert!(resolve(&route_table(), "/about/").is_none());
}

#[test]
fn validate_rejects_duplicate_root() {
    let mut table = route_table();
    table.push(RouteEntry::new("/", "MonitorPage", HEADER_INNER));
    assert_eq!(validate(&table), Err(RouteTableError::DuplicatePath("/".into())));
}

#[test]
fn validate_rejects_relative_path() {
    let table = vec![RouteEntry::new("about", "AboutPage", HEADER_INNER)];
    assert_eq!(validate(&table), Err(RouteTableError::RelativePath("about".into())));
}

#[test]
fn validate_rejects_blank_page() {
    let table = vec![RouteEntry::new("/faq", "  ", HEADER_INNER)];
    assert_eq!(validate(&table), Err(RouteTableError::MissingPage("/faq".into())));
}

#[test]
fn resolve_prefers_first_declared() {
    let table = vec![
        RouteEntry::new("/", "HomePage", HEADER_HOME),
        RouteEntry::new("/", "MonitorPage", HEADER_INNER),
    ];
    assert_eq!(resolve(&table, "/").unwrap().page, "HomePage");
}


//! Serialization of names and search paths (`serde` feature).

use sqlfunc::{ArraySubscript, SearchPath, UnresolvedName};

#[test]
fn test_search_path_is_a_json_array() {
    let path = SearchPath::new(["pg_catalog", "public"]);
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#"["pg_catalog","public"]"#);
    assert_eq!(serde_json::from_str::<SearchPath>(&json).unwrap(), path);
}

#[test]
fn test_unresolved_name_survives_json() {
    let name =
        UnresolvedName::from_dotted("pg_catalog.f").with_part(ArraySubscript::slice("1", "2"));
    let json = serde_json::to_string(&name).unwrap();
    let back: UnresolvedName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
    assert_eq!(back.to_string(), "pg_catalog.f[1:2]");
}

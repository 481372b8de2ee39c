// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::parser::parse;

fn doc(input: &str) -> Document {
    parse(input, &Output::silent())
}

#[test]
fn test_typed_get() {
    let d = doc("Name=<Deutsch>;\r\nLines=40;\r\nScale=1.5;\r\nRtl=false;\r\n");

    let name: String = d.get("Name").expect("Failed to get Name");
    assert_eq!(name, "Deutsch");

    let lines: u16 = d.get("Lines").expect("Failed to get Lines");
    assert_eq!(lines, 40);

    let scale: f64 = d.get("Scale").expect("Failed to get Scale");
    assert_eq!(scale, 1.5);

    let rtl: bool = d.get("Rtl").expect("Failed to get Rtl");
    assert!(!rtl);

    // integers widen to floating point
    let lines_f: f32 = d.get("Lines").unwrap();
    assert_eq!(lines_f, 40.0);
}

#[test]
fn test_missing_key() {
    let d = doc("a=1;");
    let err = d.get::<i64>("b").unwrap_err();
    assert!(matches!(err, PackError::KeyNotFound { ref key, .. } if key == "b"));
    assert_eq!(err.code(), Some(304));
}

#[test]
fn test_type_mismatch() {
    let d = doc("a=hello;\r\nb=1;");
    assert!(matches!(d.get::<i64>("a"), Err(PackError::TypeError { code: Some(402), .. })));
    assert!(matches!(d.get::<String>("b"), Err(PackError::TypeError { code: Some(401), .. })));
}

#[test]
fn test_boolean_typo_hint() {
    let d = doc("flag=ture;");
    let err = d.get::<bool>("flag").unwrap_err();
    assert!(err.to_string().contains("Did you mean"));
}

#[test]
fn test_integer_range() {
    let d = doc("big=70000;\r\nneg=-1;");
    assert!(d.get::<u16>("big").is_err());
    assert_eq!(d.get::<u32>("big").unwrap(), 70000);
    assert!(d.get::<usize>("neg").is_err());
    assert_eq!(d.get::<i32>("neg").unwrap(), -1);
}

#[test]
fn test_get_optional_and_or() {
    let d = doc("set=5;\r\nplaceholder=");
    assert_eq!(d.get_optional::<i64>("set").unwrap(), Some(5));
    assert_eq!(d.get_optional::<i64>("placeholder").unwrap(), None);
    assert_eq!(d.get_optional::<i64>("absent").unwrap(), None);

    assert_eq!(d.get_or("absent", 9i64), 9);
    assert_eq!(d.get_or("set", 9i64), 5);
    assert!(d.has("placeholder"));
}

#[test]
fn test_empty_payload_error_mentions_missing_terminator() {
    let d = doc("k=v");
    let err = d.get::<String>("k").unwrap_err();
    assert!(err.to_string().contains("empty Unset value"));
}

#[test]
fn test_string_enum_validation() {
    let d = doc("direction=<RTL>;\r\nbad=<diagonal>;");
    assert_eq!(d.get_string_enum("direction", &["ltr", "rtl"]).unwrap(), "RTL");
    let err = d.get_string_enum("bad", &["ltr", "rtl"]).unwrap_err();
    assert_eq!(err.code(), Some(451));
}

#[test]
fn test_get_validated() {
    let d = doc("page=3;");
    let ok: Result<i64, _> = d.get_validated("page", |p: &i64| (1..=5).contains(p), "1-5");
    assert_eq!(ok.unwrap(), 3);
    let bad: Result<i64, _> = d.get_validated("page", |p: &i64| *p < 2, "1");
    assert!(matches!(bad, Err(PackError::TypeError { code: Some(450), .. })));
}

#[test]
fn test_pack_options_builder() {
    let options = PackOptions::default()
        .with_descriptor_file("pack.txt")
        .with_adapter_file("paths.txt")
        .with_fallback("/tmp/default");
    assert_eq!(options.descriptor_file, "pack.txt");
    assert_eq!(options.adapter_file, "paths.txt");
    assert_eq!(options.fallback, Some(PathBuf::from("/tmp/default")));
}

#[test]
fn test_resolve_pack_path() {
    let plain = resolve_pack_path(Path::new("packs/en")).unwrap();
    assert_eq!(plain, PathBuf::from("packs/en"));

    if let Some(home) = dirs::home_dir() {
        let expanded = resolve_pack_path(Path::new("~/packs/en")).unwrap();
        assert_eq!(expanded, home.join("packs/en"));
    }
}

#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::{Value, ValueKind};
use std::sync::{Arc, Mutex};

fn quiet() -> Output {
    Output::silent()
}

fn recording() -> (Output, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let output = Output::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));
    (output, seen)
}

// ===== Inference =====

#[test]
fn test_infer_scalars() {
    let out = quiet();
    assert_eq!(Value::infer("42", &out), Value::Integer(Some(42)));
    assert_eq!(Value::infer("+7", &out), Value::Integer(Some(7)));
    assert_eq!(Value::infer("-3.5", &out), Value::Double(Some(-3.5)));
    assert_eq!(Value::infer("0.5", &out), Value::Double(Some(0.5)));
    assert_eq!(Value::infer("12.", &out), Value::Double(Some(12.0)));
    assert_eq!(Value::infer("TRUE", &out), Value::Boolean(true));
    assert_eq!(Value::infer("false", &out), Value::Boolean(false));
    assert_eq!(Value::infer("hello", &out), Value::Text("hello".into()));
}

#[test]
fn test_infer_edge_numbers_fall_back_to_text() {
    let out = quiet();
    // zero-only fractions and an explicit '+' are not doubles
    assert_eq!(Value::infer("0.0", &out), Value::Text("0.0".into()));
    assert_eq!(Value::infer("+1.5", &out), Value::Text("+1.5".into()));
    assert_eq!(Value::infer(".5", &out), Value::Text(".5".into()));
    assert_eq!(Value::infer("", &out), Value::Text(String::new()));
    assert_eq!(Value::infer("1e5", &out), Value::Text("1e5".into()));
}

#[test]
fn test_infer_integer_overflow_reports() {
    let (out, seen) = recording();
    let value = Value::infer("99999999999999999999", &out);
    assert_eq!(value, Value::Integer(None));
    assert!(value.is_empty());
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("out of Integer range"));
}

// ===== Coercion =====

#[test]
fn test_coerce_integer_failure_keeps_kind() {
    let (out, seen) = recording();
    let value = Value::coerce("abc", ValueKind::Integer, &out);
    assert_eq!(value.kind(), ValueKind::Integer);
    assert!(value.is_empty());
    assert!(!value.is_error());
    assert!(seen.lock().unwrap()[0].contains("invalid Integer format"));
}

#[test]
fn test_coerce_double() {
    let (out, seen) = recording();
    assert_eq!(Value::coerce("2", ValueKind::Double, &out), Value::Double(Some(2.0)));
    assert_eq!(Value::coerce("1e400", ValueKind::Double, &out), Value::Double(None));
    assert_eq!(Value::coerce("nope", ValueKind::Double, &out), Value::Double(None));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].contains("out of Double range"));
    assert!(seen[1].contains("invalid Double format"));
}

#[test]
fn test_coerce_boolean() {
    let (out, seen) = recording();
    assert_eq!(Value::coerce("False", ValueKind::Boolean, &out), Value::Boolean(false));
    assert_eq!(Value::coerce("yes", ValueKind::Boolean, &out), Value::Unset);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_coerce_text_and_function_verbatim() {
    let (out, seen) = recording();
    assert_eq!(Value::coerce("42", ValueKind::Text, &out), Value::Text("42".into()));
    assert_eq!(
        Value::coerce("open menu", ValueKind::Function, &out),
        Value::Function("open menu".into())
    );
    assert!(seen.lock().unwrap().is_empty());
}

// ===== Documents =====

#[test]
fn test_parser_basic_document() {
    let input = "Name=<English (US)>;\r\nVersion=1.25;\r\nLines=12;\r\nDefault=true;\r\n";
    let doc = parse(input, &quiet());

    assert_eq!(doc.len(), 4);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["Name", "Version", "Lines", "Default"]);
    assert_eq!(doc.value("Name"), Some(&Value::Text("English (US)".into())));
    assert_eq!(doc.value("Version"), Some(&Value::Double(Some(1.25))));
    assert_eq!(doc.value("Lines"), Some(&Value::Integer(Some(12))));
    assert_eq!(doc.value("Default"), Some(&Value::Boolean(true)));
}

#[test]
fn test_unterminated_assignment_is_dropped() {
    let (out, seen) = recording();
    let doc = parse("key=value", &out);
    assert_eq!(doc.value("key"), Some(&Value::Unset));
    assert!(doc.value("key").unwrap().is_empty());
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_escaped_newline_in_value() {
    let doc = parse(r"k=a\nb;", &quiet());
    assert_eq!(doc.value("k"), Some(&Value::Text("a\nb".into())));
}

#[test]
fn test_nested_delimiters_preserved() {
    let doc = parse("k=<outer<inner>tail>;", &quiet());
    assert_eq!(doc.value("k"), Some(&Value::Text("outer<inner>tail".into())));
}

#[test]
fn test_quoted_numbers_still_infer() {
    let doc = parse("k=< 5 >;", &quiet());
    // whitespace inside quotes is kept, so this is not an integer
    assert_eq!(doc.value("k"), Some(&Value::Text(" 5 ".into())));

    let doc = parse("k=<5>;", &quiet());
    assert_eq!(doc.value("k"), Some(&Value::Integer(Some(5))));
}

#[test]
fn test_value_without_key_is_discarded() {
    let doc = parse("orphan;\rk=v;", &quiet());
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.value("k"), Some(&Value::Text("v".into())));
}

#[test]
fn test_key_following_key_leaves_placeholder() {
    let doc = parse("a=b=c;", &quiet());
    assert_eq!(doc.value("a"), Some(&Value::Unset));
    assert_eq!(doc.value("b"), Some(&Value::Text("c".into())));
}

#[test]
fn test_comments_swallow_lf_only_lines() {
    // only CR ends a comment, so an LF-only file collapses after the first ';'
    let doc = parse("a=1;\nb=2;\n", &quiet());
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.value("a"), Some(&Value::Integer(Some(1))));

    let doc = parse("a=1; first\r\nb=2; second\r\n", &quiet());
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let doc = parse("x=1;\r\ny=2;\r\nx=3;\r\n", &quiet());
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(doc.value("x"), Some(&Value::Integer(Some(3))));
}

#[test]
fn test_empty_input() {
    let doc = parse("", &quiet());
    assert!(doc.is_empty());
}

#[test]
fn test_parse_file_missing() {
    let err = parse_file("/definitely/not/here.txt", &quiet()).unwrap_err();
    assert!(matches!(err, PackError::FileError { code: Some(301), .. }));
}

#[test]
fn test_inference_round_trip() {
    let input = "i=-12;\r\nd=3.25;\r\nz=0.125;\r\nb=FALSE;\r\nt=<semi; colon = and <nested> \\\\ slash>;\r\n";
    let out = quiet();
    let doc = parse(input, &out);

    for (key, value) in doc.iter() {
        let source = value.to_source().expect("inferred values have a source form");
        let reparsed = parse(&format!("{}={};", key, source), &out);
        assert_eq!(reparsed.value(key), Some(value), "round trip of '{}'", key);
    }
}

#[test]
fn test_document_info_and_print() {
    let (out, seen) = recording();
    let doc = parse("a=5;\r\nb=", &quiet());
    assert_eq!(doc.info("a"), "5");
    assert_eq!(doc.info("b"), "");
    assert_eq!(doc.info("zzz"), "");

    doc.print(&out);
    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        ["[key]:a", "[Integer]: 5", "[key]:b", "[Unset]:"]
    );
}

#[test]
fn test_value_at_out_of_range() {
    let args = vec![Value::Integer(Some(1))];
    assert_eq!(crate::ast::value_at(&args, 0), Value::Integer(Some(1)));
    assert!(crate::ast::value_at(&args, 1).is_error());
}

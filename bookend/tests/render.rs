use std::{collections::HashMap, io};

use bookend::{Delimiter, Error, ScanConfig, Template, Writer, render, render_mapped, resolve::{Escape, Map}};
use pretty_assertions::assert_eq;

fn upper(key: &str, out: &mut String) {
    out.push_str(&key.to_uppercase());
}

#[test]
fn identity_without_delimiter() {
    let long = "x".repeat(1000);
    for src in ["", "plain", "<html>\n  <body>é ü ✓</body>\n</html>", long.as_str()] {
        assert_eq!(render(src, upper).unwrap(), src);
    }
}

#[test]
fn keys_interleave_in_order() {
    let out = render("a%one%b%two%c%three%", upper).unwrap();
    assert_eq!(out, "aONEbTWOcTHREE");
}

#[test]
fn escaped_delimiter_after_substitution() {
    let out = render_mapped("%POWER%\\%", |key: &str| match key {
        "POWER" => "ON",
        _ => "",
    })
    .unwrap();
    assert_eq!(out, "ON%");
}

#[test]
fn escaped_escape_before_key() {
    assert_eq!(render("C:\\\\%dir%", upper).unwrap(), "C:\\\\DIR");
    assert_eq!(render("a\\b %K%", upper).unwrap(), "a\\b K");
}

#[test]
fn empty_key() {
    let out = render_mapped("%%", |key: &str| if key.is_empty() { "EMPTY" } else { "" }).unwrap();
    assert_eq!(out, "EMPTY");
}

#[test]
fn unterminated_key() {
    let err = render("abc%XYZ", upper).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn empty_substitution_keeps_surrounding_text() {
    let out = render_mapped("before %GONE% after", |_: &str| "").unwrap();
    assert_eq!(out, "before  after");
}

#[test]
fn sink_failure_stops_rendering() {
    #[derive(Default)]
    struct Closed {
        writes: usize,
    }

    impl Writer for Closed {
        fn write_bytes(&mut self, _: &[u8]) -> bookend::Result<()> {
            self.writes += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe).into())
        }
    }

    let mut sink = Closed::default();
    let err = Template::new("head %A% tail %B%").render_into(upper, &mut sink).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(!err.is_malformed());
    assert_eq!(sink.writes, 1);
}

#[test]
fn second_pass_is_identity() {
    let first = render_mapped("Hello %NAME%!", |_: &str| "World").unwrap();
    let second = render(&first, upper).unwrap();
    assert_eq!(first, "Hello World!");
    assert_eq!(second, first);
}

#[test]
fn buffer_size_does_not_change_output() {
    let src = "<p>%A%</p>\\% %B% and some trailing text";
    let expected = render(src, upper).unwrap();

    for size in 1..=src.len() + 1 {
        let template = Template::new(src).with_config(ScanConfig::new().with_buffer_size(size));
        assert_eq!(template.render(upper).unwrap(), expected, "buffer size {size}");
    }
}

#[test]
fn multibyte_across_buffer_boundary() {
    let template = Template::new("ééé %K% ✓✓").with_config(ScanConfig::new().with_buffer_size(1));
    assert_eq!(template.render(upper).unwrap(), "ééé K ✓✓");
}

#[test]
fn custom_delimiter() {
    let template = Template::new("50% off, $ITEM$ \\$5").with_delimiter(Delimiter::new('$').unwrap());
    assert_eq!(template.render(upper).unwrap(), "50% off, ITEM $5");
}

#[test]
fn resolver_state_survives_calls() {
    let mut count = 0;
    let out = render_mapped("%a%,%b%,%c%", |_: &str| {
        count += 1;
        count
    })
    .unwrap();
    assert_eq!(out, "1,2,3");
}

#[test]
fn map_resolver() {
    let values = HashMap::from([
        ("TITLE".to_owned(), "Status".to_owned()),
        ("POWER".to_owned(), "ON".to_owned()),
    ]);
    let out = render("<h1>%TITLE%</h1><p>%POWER% %UNKNOWN%</p>", &values).unwrap();
    assert_eq!(out, "<h1>Status</h1><p>ON </p>");
}

#[test]
fn escaped_values() {
    let out = render("<p>%NAME%</p>", Escape::new(Map(|_: &str| "<script>"))).unwrap();
    assert_eq!(out, "<p>&lt;script&gt;</p>");
}

#[test]
fn keys() {
    let keys = Template::new("%A% x %B%%% \\%C").keys().unwrap();
    assert_eq!(keys, ["A", "B", ""]);
}

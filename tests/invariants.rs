use pix_brcode::{
    build, encode, encode_map, verify_checksum, EncodingRequest, Tag, TlvMap, TlvValue,
};

#[derive(Debug, PartialEq)]
struct Field<'a> {
    tag: u8,
    value: &'a str,
}

/// Split `s` into `TT LL V` fields, checking that every declared length fits.
fn walk(s: &str) -> Vec<Field<'_>> {
    let mut out = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let tag: u8 = rest[0..2].parse().unwrap();
        let len: usize = rest[2..4].parse().unwrap();
        let value = &rest[4..4 + len];
        out.push(Field { tag, value });
        rest = &rest[4 + len..];
    }
    out
}

fn tag(id: u8) -> Tag {
    Tag::new(id).unwrap()
}

#[test]
fn walk_reconstructs_every_field() {
    let req = EncodingRequest::new("jonnasfonini@gmail.com", "Jonnas Fonini", "Marau")
        .with_amount(20.67)
        .with_description("Invoice #4");
    let code = encode(&req).unwrap();
    let fields = walk(code.as_str());

    let tags: Vec<u8> = fields.iter().map(|f| f.tag).collect();
    assert_eq!(tags, vec![0, 26, 52, 53, 54, 58, 59, 60, 62, 63]);

    let account = walk(fields[1].value);
    assert_eq!(
        account,
        vec![
            Field { tag: 0, value: "BR.GOV.BCB.PIX" },
            Field { tag: 1, value: "jonnasfonini@gmail.com" },
            Field { tag: 2, value: "Invoice #4" },
        ]
    );

    let data = walk(fields[8].value);
    assert_eq!(data[0], Field { tag: 5, value: "***" });
    assert_eq!(
        walk(data[1].value),
        vec![
            Field { tag: 0, value: "BR.GOV.BCB.BRCODE" },
            Field { tag: 1, value: "1.0.0" },
        ]
    );

    assert_eq!(fields[9].value, "CF13");
    assert!(verify_checksum(code.as_str()).is_ok());
}

#[test]
fn empty_description_leaves_no_child_two() {
    let req = EncodingRequest::new("jonnasfonini@gmail.com", "Jonnas Fonini", "Marau");
    let code = encode(&req).unwrap();
    let fields = walk(code.as_str());
    let account = walk(fields[1].value);
    assert!(account.iter().all(|f| f.tag != 2));

    let amount = fields.iter().find(|f| f.tag == 54).unwrap();
    assert_eq!(amount.value, "0.00");
}

#[test]
fn output_order_ignores_construction_order() {
    let mut forward = TlvMap::new();
    forward.insert(tag(1), "a");
    forward.insert(tag(10), TlvValue::decimal(2.5));
    forward.insert(tag(99), "z");

    let mut backward = TlvMap::new();
    backward.insert(tag(99), "z");
    backward.insert(tag(10), TlvValue::decimal(2.5));
    backward.insert(tag(1), "a");

    let a = encode_map(&forward).unwrap();
    let b = encode_map(&backward).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "0101a10042.509901z");
}

#[test]
fn nested_templates_are_sorted_too() {
    let mut inner = TlvMap::new();
    inner.insert(tag(50), "y");
    inner.insert(tag(5), "x");
    let mut root = TlvMap::new();
    root.insert(tag(62), inner);
    root.insert(tag(0), "01");
    assert_eq!(encode_map(&root).unwrap(), "00020162100501x5001y");
}

#[test]
fn built_tree_is_independent_per_call() {
    let a = build(&EncodingRequest::new("k1", "n", "c"));
    let b = build(&EncodingRequest::new("k2", "n", "c"));
    assert_ne!(a, b);
    assert_eq!(a, build(&EncodingRequest::new("k1", "n", "c")));
}

#[test]
fn encoder_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let req = EncodingRequest::new(format!("key-{i}"), "Jonnas Fonini", "Marau");
                encode(&req).unwrap().into_string()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let payload = h.join().unwrap();
        assert!(payload.contains(&format!("key-{i}")));
        assert!(verify_checksum(&payload).is_ok());
    }
}

use criterion::{criterion_group, criterion_main, Criterion};

mod group;

group!(
    "./../test_data/domains",
    ascii,
    test_ascii,
    "to_ascii",
    "idna",
    |domain: &str| idna::domain_to_ascii(domain).map_or(0, |d| d.len())
);

group!(
    "./../test_data/domains",
    unicode,
    test_unicode,
    "to_unicode",
    "idna",
    |domain: &str| idna::domain_to_unicode(domain).0.len()
);

criterion_group!(benches, ascii, unicode);
criterion_main!(benches);

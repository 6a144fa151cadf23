use criterion::{criterion_group, criterion_main, Criterion};
use unicode_uts46::{to_ascii, to_unicode, Options};

mod group;

group!(
    "./../test_data/domains",
    ascii,
    test_ascii,
    "to_ascii",
    "uts46",
    |domain: &str| to_ascii(domain, Options::default()).domain().len()
);

group!(
    "./../test_data/domains",
    unicode,
    test_unicode,
    "to_unicode",
    "uts46",
    |domain: &str| to_unicode(domain, Options::default()).domain().len()
);

criterion_group!(benches, ascii, unicode);
criterion_main!(benches);

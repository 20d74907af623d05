use criterion::{criterion_group, criterion_main, Criterion};
use pomkit_core::Document;
use std::fmt::Write as _;
use std::hint::black_box;

fn descriptor_with_dependencies(count: usize) -> String {
    let mut xml = String::from("<project><groupId>bench</groupId><dependencies>");
    for i in 0..count {
        write!(
            xml,
            "<dependency><groupId>org.bench.g{i}</groupId><artifactId>a{i}</artifactId>\
             <version>1.0.{i}</version></dependency>"
        )
        .unwrap();
    }
    xml.push_str("</dependencies></project>");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let xml = descriptor_with_dependencies(500);
    c.bench_function("document_parse_500deps", |b| {
        b.iter(|| Document::from_slice(black_box(xml.as_bytes())).unwrap());
    });
}

fn bench_search(c: &mut Criterion) {
    let doc = Document::from_slice(descriptor_with_dependencies(500).as_bytes()).unwrap();
    c.bench_function("document_search_hit", |b| {
        b.iter(|| doc.search(black_box("org.bench.g250"), black_box("a250")).unwrap());
    });
    c.bench_function("document_search_miss", |b| {
        b.iter(|| doc.search(black_box("org.bench.none"), black_box("none")).is_err());
    });
}

fn bench_marshal(c: &mut Criterion) {
    let xml = descriptor_with_dependencies(500);
    c.bench_function("document_marshal_500deps", |b| {
        b.iter_with_setup(
            || Document::from_slice(xml.as_bytes()).unwrap(),
            |mut doc| doc.marshal().unwrap(),
        );
    });
}

criterion_group!(benches, bench_parse, bench_search, bench_marshal);
criterion_main!(benches);

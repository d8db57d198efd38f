use criterion::{black_box, criterion_group, criterion_main, Criterion};

use morse_core::transmitter::total_units;
use morse_core::{CodeTable, Script};
use morse_tests::translator;

const LATIN: &str = "cq cq cq de ja1xyz ja1xyz k the quick brown fox 0123456789";
const KANA: &str = "いろはにほへと ちりぬるを わかよたれそ つねならむ ばびぶべぼ ぱぴぷぺぽ";

fn bench_tables(c: &mut Criterion) {
    c.bench_function("build_tables", |b| b.iter(|| CodeTable::new()));
}

fn bench_encode(c: &mut Criterion) {
    let t = translator();
    c.bench_function("encode_latin", |b| b.iter(|| t.encode(black_box(LATIN))));
    c.bench_function("encode_kana", |b| b.iter(|| t.encode(black_box(KANA))));
}

fn bench_decode(c: &mut Criterion) {
    let t = translator();
    let latin = t.encode(LATIN).unwrap();
    let kana = t.encode(KANA).unwrap();
    c.bench_function("decode_latin", |b| {
        b.iter(|| t.decode(black_box(&latin), Script::En))
    });
    c.bench_function("decode_kana", |b| {
        b.iter(|| t.decode(black_box(&kana), Script::Ja))
    });
    c.bench_function("schedule_units", |b| b.iter(|| total_units(black_box(&kana))));
}

criterion_group!(benches, bench_tables, bench_encode, bench_decode);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rtk_core::romaji::{Strategy, Syllabary, Transliterator};

static INPUTS: &[(&str, &str)] = &[
    ("short", "kyou"),
    ("word", "kieteshimatta"),
    ("phrase", "ohayou gozaimasu kyou wa ii tenki desu ne"),
    (
        "line",
        "watashi no namae wa tanaka desu. toukyou ni sunde imasu. shumi wa ryokou to shashin desu.",
    ),
];

fn bench_strategy(c: &mut Criterion, name: &str, syllabary: Syllabary, strategy: Strategy) {
    let t = Transliterator::default();
    let mut group = c.benchmark_group(name);
    for &(label, romaji) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, romaji.len()), &romaji, |b, &romaji| {
            b.iter(|| t.transliterate_with(romaji, syllabary, strategy));
        });
    }
    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    bench_strategy(c, "hiragana/replace", Syllabary::Hiragana, Strategy::Replace);
    bench_strategy(c, "katakana/replace", Syllabary::Katakana, Strategy::Replace);
}

fn bench_longest_match(c: &mut Criterion) {
    bench_strategy(
        c,
        "hiragana/longest-match",
        Syllabary::Hiragana,
        Strategy::LongestMatch,
    );
    bench_strategy(
        c,
        "katakana/longest-match",
        Syllabary::Katakana,
        Strategy::LongestMatch,
    );
}

criterion_group!(benches, bench_replace, bench_longest_match);
criterion_main!(benches);

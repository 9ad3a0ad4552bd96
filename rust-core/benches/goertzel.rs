//! Goertzel bank and streaming decoder benchmarks
//!
//! Run with: cargo bench -p dtmf-decoder-core --bench goertzel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dtmf_decoder::detection::Keypad;
use dtmf_decoder::{decode, GoertzelBank, ToneClassifier, WindowType};
use std::f64::consts::PI;

fn dual_tone(low: f64, high: f64, sample_rate: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| {
            let t = n as f64 / sample_rate;
            0.4 * (2.0 * PI * low * t).sin() + 0.4 * (2.0 * PI * high * t).sin()
        })
        .collect()
}

fn bench_goertzel_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("goertzel_bank");
    let keypad = Keypad::standard();

    for (rate, block) in [(8000.0, 205), (44100.0, 1130), (48000.0, 1230)] {
        let mut bank = GoertzelBank::new(keypad.low(), rate, block).unwrap();
        let samples = dual_tone(852.0, 1477.0, rate, block);

        group.throughput(Throughput::Elements(block as u64));
        group.bench_with_input(BenchmarkId::new("block", block), &samples, |b, samples| {
            b.iter(|| {
                bank.reset();
                bank.feed(black_box(samples));
                black_box(bank.magnitude()[0])
            })
        });
    }

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let keypad = Keypad::standard();
    let mut classifier =
        ToneClassifier::for_keypad(&keypad, 8000.0, 205, WindowType::Hamming).unwrap();
    let block = dual_tone(941.0, 1336.0, 8000.0, 205);

    c.bench_function("classify_205", |b| {
        b.iter(|| classifier.classify(black_box(&block)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let rate = 8000.0;
    let keypad = Keypad::standard();

    let mut signal = vec![0.0; 800];
    for key in "0123456789".chars() {
        let (low, high) = keypad.frequencies_of(key).unwrap();
        signal.extend(dual_tone(low, high, rate, 800));
        signal.extend(vec![0.0; 800]);
    }

    group.throughput(Throughput::Elements(signal.len() as u64));
    group.bench_function("ten_keys_8k", |b| {
        b.iter(|| decode(black_box(&signal), rate, 7).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_goertzel_bank, bench_classifier, bench_decode);
criterion_main!(benches);

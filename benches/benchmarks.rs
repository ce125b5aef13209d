use chart_ta::prelude::*;
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_series(len: usize) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let bars = (0..len)
        .map(|i| {
            let close = 40_000.0 + (i as f64 * 0.21).sin() * 800.0 + i as f64 * 0.5;
            Bar::new(
                start + Duration::minutes(i as i64),
                close - 10.0,
                close + 60.0,
                close - 60.0,
                close,
            )
            .with_volume(1_500.0)
        })
        .collect();
    PriceSeries::from_sorted_unchecked(bars)
}

fn benchmark_ema(c: &mut Criterion) {
    let series = synthetic_series(10_000);
    c.bench_function("ema_50_10k_bars", |b| {
        b.iter(|| Ema::new(50).compute(black_box(&series)));
    });
}

fn benchmark_bollinger(c: &mut Criterion) {
    let series = synthetic_series(10_000);
    c.bench_function("bollinger_20_10k_bars", |b| {
        b.iter(|| Bollinger::new(20, 2.0).compute(black_box(&series)));
    });
}

fn benchmark_macd(c: &mut Criterion) {
    let series = synthetic_series(10_000);
    c.bench_function("macd_standard_10k_bars", |b| {
        b.iter(|| Macd::new().compute(black_box(&series)));
    });
}

fn benchmark_overlay_fanout(c: &mut Criterion) {
    let series = synthetic_series(10_000);
    let specs = [
        OverlaySpec::Ema { period: 9 },
        OverlaySpec::Ema { period: 21 },
        OverlaySpec::Ema { period: 50 },
        OverlaySpec::Bollinger {
            period: 20,
            std_dev: 2.0,
        },
        OverlaySpec::Macd {
            fast: 12,
            slow: 26,
            signal: 9,
        },
        OverlaySpec::Rsi { period: 14 },
    ];
    c.bench_function("overlay_fanout_10k_bars", |b| {
        b.iter(|| compute_overlays(black_box(&series), black_box(&specs)));
    });
}

criterion_group!(
    benches,
    benchmark_ema,
    benchmark_bollinger,
    benchmark_macd,
    benchmark_overlay_fanout
);
criterion_main!(benches);

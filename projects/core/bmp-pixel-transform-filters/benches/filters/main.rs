use bmp_pixel_transform_common::{Color, Raster};
use bmp_pixel_transform_filters::{Filter, FilterKind};
use core::num::NonZeroUsize;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

// Helper to generate a raster with a spread of in-range colours
fn generate_test_raster(width: usize, height: usize) -> Raster {
    Raster::from_fn(
        NonZeroUsize::new(width).unwrap(),
        NonZeroUsize::new(height).unwrap(),
        |row, col| {
            Color::new(
                ((row * 3 + col) % 256) as i32,
                ((row + col * 7) % 256) as i32,
                ((row * col) % 256) as i32,
            )
        },
    )
}

fn filter_for(kind: FilterKind) -> Filter {
    let scale = NonZeroUsize::new(2).unwrap();
    match kind {
        FilterKind::Vignette => Filter::Vignette,
        FilterKind::Clarendon => Filter::Clarendon {
            scaling_factor: 0.5,
        },
        FilterKind::Grayscale => Filter::Grayscale,
        FilterKind::Rotate90 => Filter::Rotate90,
        FilterKind::Rotate => Filter::Rotate { turns: 3 },
        FilterKind::Enlarge => Filter::Enlarge {
            x_scale: scale,
            y_scale: scale,
        },
        FilterKind::HighContrast => Filter::HighContrast,
        FilterKind::Lighten => Filter::Lighten {
            scaling_factor: 0.5,
        },
        FilterKind::Darken => Filter::Darken {
            scaling_factor: 0.5,
        },
        FilterKind::QuantizePrimaries => Filter::QuantizePrimaries,
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    // 512x512, 3 bytes per pixel once encoded
    let size = 512;
    let input = generate_test_raster(size, size);
    group.throughput(Throughput::Bytes((size * size * 3) as u64));

    for kind in FilterKind::all_values().iter().copied() {
        let filter = filter_for(kind);
        group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, &_size| {
            b.iter(|| filter.apply(black_box(&input)));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);

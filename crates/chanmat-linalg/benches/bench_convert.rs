use chanmat_linalg::{matrix_to_plane, matrix_to_volume, plane_to_matrix, volume_to_matrix};
use chanmat_matrix::{ChannelMatrix, MatrixSize};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{Array2, Array3, ShapeBuilder};
use std::hint::black_box;

fn sample_matrix(channels: usize) -> ChannelMatrix<f32> {
    ChannelMatrix::from_size_val(
        MatrixSize {
            rows: 1080,
            cols: 1920,
        },
        channels,
        0.5,
    )
    .unwrap()
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let single = sample_matrix(1);
    let multi = sample_matrix(3);

    group.bench_function(BenchmarkId::new("matrix_to_plane", "1080x1920"), |b| {
        let mut plane = Array2::<f32>::zeros((1080, 1920).f());
        b.iter(|| matrix_to_plane(black_box(&single), &mut plane).unwrap())
    });

    group.bench_function(BenchmarkId::new("matrix_to_volume", "1080x1920x3"), |b| {
        let mut volume = Array3::<f32>::zeros((1080, 1920, 3).f());
        b.iter(|| matrix_to_volume(black_box(&multi), &mut volume).unwrap())
    });

    let plane_f = Array2::<f32>::from_elem((1080, 1920).f(), 0.5);
    let plane_c = Array2::<f32>::from_elem((1080, 1920), 0.5);

    group.bench_function(BenchmarkId::new("plane_to_matrix", "fortran"), |b| {
        let mut mat = ChannelMatrix::empty();
        b.iter(|| plane_to_matrix(black_box(&plane_f), &mut mat))
    });

    group.bench_function(BenchmarkId::new("plane_to_matrix", "c"), |b| {
        let mut mat = ChannelMatrix::empty();
        b.iter(|| plane_to_matrix(black_box(&plane_c), &mut mat))
    });

    let volume = Array3::<f32>::from_elem((1080, 1920, 3).f(), 0.5);

    group.bench_function(BenchmarkId::new("volume_to_matrix", "1080x1920x3"), |b| {
        let mut mat = ChannelMatrix::empty();
        b.iter(|| volume_to_matrix(black_box(&volume), &mut mat))
    });

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);

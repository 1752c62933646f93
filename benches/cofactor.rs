use criterion::{criterion_group, criterion_main, Criterion};
use shadermath::{vec3, vec4, Matrix};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned square matrices
// ---------------------------------------------------------------------------

fn diag_dominant(n: usize) -> Matrix<f64> {
    let entries: Vec<f64> = (0..n * n)
        .map(|k| {
            let (i, j) = (k / n, k % n);
            ((i + 1) * (j + 1)) as f64 + if i == j { 10.0 } else { 0.0 }
        })
        .collect();
    Matrix::from_row_major(n, n, &entries).unwrap()
}

// ---------------------------------------------------------------------------
// Determinant / inverse
// ---------------------------------------------------------------------------

fn det(c: &mut Criterion) {
    let mut g = c.benchmark_group("det");
    for n in 2..=4 {
        let m = diag_dominant(n);
        g.bench_function(format!("{n}x{n}"), |b| {
            b.iter(|| std::hint::black_box(&m).det().unwrap())
        });
    }
    g.finish();
}

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");
    for n in 2..=4 {
        let m = diag_dominant(n);
        g.bench_function(format!("{n}x{n}"), |b| {
            b.iter(|| std::hint::black_box(&m).inverse().unwrap())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Products and swizzles
// ---------------------------------------------------------------------------

fn matmul_4x4(c: &mut Criterion) {
    let a = diag_dominant(4);
    let m = a.transposed();
    c.bench_function("matmul_4x4", |b| {
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });
}

fn swizzle(c: &mut Criterion) {
    let mut g = c.benchmark_group("swizzle");
    let v = vec4(1.0, 2.0, 3.0, 4.0);
    g.bench_function("read wzyx", |b| {
        b.iter(|| std::hint::black_box(&v).swizzle(std::hint::black_box("wzyx")).unwrap())
    });
    g.bench_function("write zx", |b| {
        b.iter(|| {
            let mut w = v;
            w.set_swizzle(std::hint::black_box("zx"), vec3(0.0, 1.0, 2.0).swizzle("xy").unwrap())
                .unwrap();
            w
        })
    });
    g.finish();
}

criterion_group!(benches, det, inverse, matmul_4x4, swizzle);
criterion_main!(benches);

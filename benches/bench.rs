use criterion::{criterion_group, criterion_main};

mod validation_benchmark {
    use criterion::{black_box, Criterion};
    use es_fiscal_id::{validate, IdentifierFamily, ValidationOptions};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let samples = vec![
            (IdentifierFamily::Nif, "12345678Z"),
            (IdentifierFamily::Nif, "12345678a"),
            (IdentifierFamily::Nie, "X0000000T"),
            (IdentifierFamily::Nie, "z0000001y"),
            (IdentifierFamily::Cif, "B1234567D"),
            (IdentifierFamily::Cif, "A58818501"),
            (IdentifierFamily::Other, "PASSPORT123"),
        ];
        let options = ValidationOptions::default();
        c.bench_function("validate", |b| {
            b.iter(|| {
                for (family, value) in &samples {
                    validate(black_box(value), *family, &options);
                }
            })
        });

        let appending = ValidationOptions::appending();
        c.bench_function("validate-append", |b| {
            b.iter(|| {
                for (family, value) in [
                    (IdentifierFamily::Nif, "12345678"),
                    (IdentifierFamily::Nie, "X0000000"),
                    (IdentifierFamily::Cif, "B1234567"),
                    (IdentifierFamily::Cif, "P0000019"),
                ] {
                    validate(black_box(value), family, &appending);
                }
            })
        });
    }
}

mod classifier_benchmark {
    use criterion::{black_box, Criterion};
    use es_fiscal_id::guess_family;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let values = vec![
            "12345678Z",
            "Y1234567X",
            "B1234567D",
            "PASSPORT123",
            "not a document",
            "",
        ];
        c.bench_function("guess-family", |b| {
            b.iter(|| {
                for value in &values {
                    guess_family(black_box(value));
                }
            })
        });
    }
}

mod multithreaded_benchmark {
    use criterion::Criterion;
    use es_fiscal_id::{validate_nif, ValidationOptions};
    use threadpool::ThreadPool;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let num_threads = 8;
        let num_jobs = num_threads * 25;
        let thread_pool = ThreadPool::new(num_threads);

        c.bench_function("validate nifs (multi-threaded)", |b| {
            b.iter(|| {
                for job in 0..num_jobs {
                    thread_pool.execute(move || {
                        let options = ValidationOptions::appending();
                        let numeral = format!("{:08}", job * 104_729);
                        assert!(validate_nif(&numeral, &options).is_valid());
                    });
                }
                thread_pool.join();
            })
        });
    }
}

criterion_group!(
    benches,
    validation_benchmark::criterion_benchmark,
    classifier_benchmark::criterion_benchmark,
    multithreaded_benchmark::criterion_benchmark
);
criterion_main!(benches);

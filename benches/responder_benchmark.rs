use admission_bot::classifier::tokenize;
use admission_bot::{Classifier, ClassDefinition, KnowledgeBase, Responder, TrainingConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn setup_benchmark_responder() -> Responder {
    Responder::train(KnowledgeBase::builtin(), &TrainingConfig::default()).unwrap()
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenization");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("short_text", |b| b.iter(|| {
        tokenize(black_box("What is the fee structure?"))
    }));

    group.bench_function("long_text", |b| b.iter(|| {
        tokenize(black_box(
            "I would like to know about the admission process, the annual fees, \
             whether hostel facilities are available for first year students, \
             and what the placement record looked like over the last few years."
        ))
    }));

    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("Training");
    group.sample_size(20);

    let configs = [
        ("default", TrainingConfig::default()),
        ("short", TrainingConfig { max_iter: 50, ..Default::default() }),
        ("long", TrainingConfig { max_iter: 1000, tolerance: 0.0, ..Default::default() }),
    ];

    for (name, config) in configs {
        group.bench_function(format!("train_{}", name), |b| b.iter(|| {
            Responder::train(KnowledgeBase::builtin(), black_box(&config)).unwrap()
        }));
    }

    group.finish();
}

fn bench_respond(c: &mut Criterion) {
    let responder = setup_benchmark_responder();
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("Respond");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("course_lookup", |b| b.iter(|| {
        responder.respond_with(black_box("Tell me about mechanical"), &mut rng)
    }));
    group.bench_function("intent", |b| b.iter(|| {
        responder.respond_with(black_box("What about placements?"), &mut rng)
    }));
    group.bench_function("unrecognized", |b| b.iter(|| {
        responder.respond_with(black_box("qwerty zxcv"), &mut rng)
    }));

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);

    let class_counts = [2, 10, 50];
    for &count in &class_counts {
        let mut builder = Classifier::builder();
        for i in 0..count {
            builder = builder
                .add_class(
                    ClassDefinition::new(format!("class_{}", i), format!("Class {}", i))
                        .with_examples(vec![
                            format!("example {} one", i),
                            format!("example {} two", i),
                        ])
                )
                .unwrap();
        }

        let classifier = builder.build().unwrap();

        group.bench_function(format!("classes_{}", count), |b| b.iter(|| {
            classifier.predict(black_box("example text for the scaling benchmark")).unwrap()
        }));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenization,
    bench_training,
    bench_respond,
    bench_scaling
);
criterion_main!(benches);

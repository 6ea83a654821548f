use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strum::IntoEnumIterator;

use rphone::{NamedFormat, PHONE_UTIL, PhoneNumber};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "+385 91 512 5486",
        "00385 1 234 5678 x22",
        "+1 212 555 1234",
        "+49 30 12345678",
        "+44 20 8765 4321",
        "+43 1 5125486",
    ]
}

fn convert_to_phone_numbers(numbers: &[&str]) -> Vec<PhoneNumber> {
    numbers
        .iter()
        .filter_map(|s| PHONE_UTIL.parse(s).ok().flatten())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let numbers = convert_to_phone_numbers(&setup_numbers());

    let mut group = c.benchmark_group("Formatting");

    for format in NamedFormat::iter() {
        group.bench_function(format!("render({})", format.as_ref()), |b| {
            b.iter(|| {
                for number in &numbers {
                    number.render_named(black_box(format));
                }
            })
        });
    }

    group.bench_function("render(custom)", |b| {
        b.iter(|| {
            for number in &numbers {
                number.render(black_box("%A/%f-%l %x"));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);

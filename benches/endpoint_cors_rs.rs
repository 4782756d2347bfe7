use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use endpoint_cors_rs::constants::method;
use endpoint_cors_rs::{CorsConfiguration, CorsNegotiator, RequestContext};

const ORIGIN: &str = "https://edge.bench.allowed";

fn header_line(count: usize) -> String {
    (0..count)
        .map(|idx| format!("X-Bench-Header-{idx:03}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn configuration(accepted: usize) -> CorsConfiguration {
    let mut config =
        CorsConfiguration::new((0..64).map(|idx| format!("https://svc{idx:02}.bench")));
    config.allow_origin(ORIGIN);
    config.allow_method(method::GET).allow_method(method::POST);
    config.credentials_supported = true;
    for idx in 0..accepted {
        config.accept_header(format!("X-Bench-Header-{idx:03}"));
    }
    config
}

fn bench_simple(c: &mut Criterion) {
    let negotiator = CorsNegotiator::new();
    let config = configuration(0);
    let mut group = c.benchmark_group("simple");

    for (label, origin) in [
        ("allowed", Some(ORIGIN)),
        ("denied", Some("https://nope.bench")),
        ("absent", None),
    ] {
        let request = RequestContext {
            method: method::GET,
            origin,
            ..RequestContext::default()
        };
        group.bench_function(label, |b| {
            b.iter(|| negotiator.annotate_simple(black_box(&config), black_box(&request), false))
        });
    }

    group.finish();
}

fn bench_preflight(c: &mut Criterion) {
    let negotiator = CorsNegotiator::new();
    let mut group = c.benchmark_group("preflight");

    for count in [0usize, 8, 64, 256] {
        let config = configuration(count);
        let headers = header_line(count);
        let request = RequestContext {
            method: method::OPTIONS,
            origin: Some(ORIGIN),
            access_control_request_method: Some(method::POST),
            access_control_request_headers: Some(headers.as_str()),
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("accepted", count), &request, |b, request| {
            b.iter(|| {
                negotiator.preflight(black_box(&config), black_box(request), method::SUPPORTED)
            })
        });
    }

    group.finish();
}

criterion_group!(endpoint_cors_rs_benches, bench_simple, bench_preflight);
criterion_main!(endpoint_cors_rs_benches);

#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: miniurl vs url crate vs ada-url
///
/// miniurl only splits strings, so these numbers are a floor for what a
/// full WHATWG parser costs on the same inputs, not a like-for-like race.
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::process::Command;

// Rust url crate
use url::Url as UrlCrate;

// ada-url
use ada_url::Url as AdaUrl;

const TOP100_PATH: &str = "./benchmarks/url-various-datasets/top100.txt";

/// Download dataset file before running benchmarks
fn ensure_dataset(path: &str, url: &str, name: &str) {
    // Download if file doesn't exist or is older than 24 hours
    let is_fresh = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .and_then(|t| t.elapsed().ok().ok_or(std::io::Error::other("elapsed")))
        .is_ok_and(|elapsed| elapsed.as_secs() <= 86400);

    if is_fresh {
        println!("✓ Using cached {name}");
        return;
    }

    println!("📥 Downloading latest {name}...");
    if let Some(dir) = std::path::Path::new(path).parent() {
        if let Err(err) = std::fs::create_dir_all(dir) {
            println!("⚠ Failed to create {}: {err}", dir.display());
        }
    }

    let output = Command::new("curl").args(["-fsSL", "-o", path, url]).output();
    match output {
        Ok(result) if result.status.success() => {
            println!("✓ Downloaded {name} successfully");
        }
        _ => {
            println!("⚠ Failed to download, using existing file if available");
        }
    }
}

/// Dataset: https://github.com/ada-url/url-various-datasets
fn ensure_top100_txt() {
    ensure_dataset(
        TOP100_PATH,
        "https://raw.githubusercontent.com/ada-url/url-various-datasets/main/top100/top100.txt",
        "top100.txt",
    );
}

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "https://foo.com/go";

    group.bench_function("miniurl", |b| {
        b.iter(|| miniurl::Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.bench_function("ada_url", |b| {
        b.iter(|| AdaUrl::parse(black_box(input), None).unwrap());
    });

    group.finish();
}

fn bench_parse_with_port_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_with_port");
    let input = "http://192.168.1.1:3000/api/v1/items";

    group.bench_function("miniurl", |b| {
        b.iter(|| miniurl::Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.bench_function("ada_url", |b| {
        b.iter(|| AdaUrl::parse(black_box(input), None).unwrap());
    });

    group.finish();
}

fn bench_getters_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("getters");
    let input = "https://example.com:8080/path";

    let miniurl_url = miniurl::Url::parse(input).unwrap();
    let url_crate_url = UrlCrate::parse(input).unwrap();
    let ada_url = AdaUrl::parse(input, None).unwrap();

    group.bench_function("miniurl", |b| {
        b.iter(|| {
            black_box(miniurl_url.hostname());
            black_box(miniurl_url.port());
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            black_box(url_crate_url.host_str());
            black_box(url_crate_url.port());
        });
    });

    group.bench_function("ada_url", |b| {
        b.iter(|| {
            black_box(ada_url.hostname());
            black_box(ada_url.port());
        });
    });

    group.finish();
}

fn bench_format_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let urls = [
        miniurl::Url::new("https", "", ""),
        miniurl::Url::new("https", "foo.com", ""),
        miniurl::Url::new("https", "foo.com", "go"),
    ];

    for url in &urls {
        group.bench_function(url.to_string(), |b| {
            b.iter(|| miniurl::format(Some(black_box(url))));
        });
    }

    group.finish();
}

fn bench_parse_top100urls(c: &mut Criterion) {
    // Ensure we have the latest top100.txt before benchmarking
    ensure_top100_txt();

    let urls_content = std::fs::read_to_string(TOP100_PATH).expect("Failed to read top100.txt");
    let urls: Vec<&str> = urls_content.lines().collect();

    let mut group = c.benchmark_group("parse_top100urls");

    group.bench_function("miniurl", |b| {
        b.iter(|| {
            for url in &urls {
                let _ = miniurl::Url::parse(black_box(url));
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for url in &urls {
                let _ = UrlCrate::parse(black_box(url));
            }
        });
    });

    group.bench_function("ada_url", |b| {
        b.iter(|| {
            for url in &urls {
                let _ = AdaUrl::parse(black_box(url), None);
            }
        });
    });

    group.finish();
}

fn bench_can_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_parse");
    let valid = "https://example.com/path";
    let invalid = "example.com/path";

    group.bench_function("miniurl_valid", |b| {
        b.iter(|| miniurl::Url::can_parse(black_box(valid)));
    });

    group.bench_function("miniurl_invalid", |b| {
        b.iter(|| miniurl::Url::can_parse(black_box(invalid)));
    });

    group.bench_function("ada_url_valid", |b| {
        b.iter(|| AdaUrl::can_parse(black_box(valid), None));
    });

    group.bench_function("ada_url_invalid", |b| {
        b.iter(|| AdaUrl::can_parse(black_box(invalid), None));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_with_port_all,
    bench_getters_all,
    bench_format_all,
    bench_parse_top100urls,
    bench_can_parse_all
);

criterion_main!(benches);

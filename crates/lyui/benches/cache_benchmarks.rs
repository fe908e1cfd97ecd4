use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lystyle::{SerializeContext, serialize};
use lyui::{LyTheme, StyleObject, Theme, style};

fn button_style(index: usize) -> StyleObject {
    style! {
        "display" => "inline-flex",
        "paddingBefore" => format!("{index}px"),
        "color" => "$primary",
        "&:hover" => {
            "background" => "$background.tertiary",
            "& span" => { "opacity" => 0.8 },
        },
        "@media $Handset" => { "minWidth" => "48px" },
    }
}

fn bench_serialize(c: &mut Criterion) {
    let theme = Theme::light();
    let description = button_style(8);

    c.bench_function("serialize_button", |b| {
        b.iter(|| serialize(black_box(&description), &SerializeContext::new(&theme, "e0")))
    });
}

fn bench_add_style_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_style_hit");

    for entries in [10, 100, 1000] {
        let mut theme = LyTheme::new(Theme::light());
        for i in 0..entries {
            theme.add_style(&format!("button:{i}"), button_style(i), -1).unwrap();
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("cached", entries), &entries, |b, _| {
            b.iter(|| theme.add_style(black_box("button:0"), button_style(0), -1))
        });
    }

    group.finish();
}

fn bench_set_theme(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_theme");

    for entries in [10, 100] {
        let mut theme = LyTheme::new(Theme::light());
        for i in 0..entries {
            theme.add_style(&format!("button:{i}"), button_style(i), -1).unwrap();
        }

        let mut dark = false;
        group.bench_with_input(BenchmarkId::new("rebuild", entries), &entries, |b, _| {
            b.iter(|| {
                dark = !dark;
                let next = if dark { Theme::dark() } else { Theme::light() };
                theme.set_theme(next)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serialize, bench_add_style_hit, bench_set_theme);
criterion_main!(benches);

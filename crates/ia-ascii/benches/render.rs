use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ia_ascii::render::render;
use ia_core::charset::RampPreset;
use ia_core::config::RenderConfig;
use ia_core::frame::ImageBuffer;

fn test_image(width: u32, height: u32) -> ImageBuffer {
    let mut img = ImageBuffer::new(width, height);
    for (i, px) in img.data.chunks_exact_mut(3).enumerate() {
        let v = (i % 256) as u8;
        px.copy_from_slice(&[v, 255 - v, v / 2]);
    }
    img
}

fn bench_render(c: &mut Criterion) {
    let img = test_image(200, 110);

    let plain = RenderConfig {
        ramp: RampPreset::Extended.ramp(),
        ..RenderConfig::default()
    };
    c.bench_function("render_plain_200x110", |b| {
        b.iter(|| render(black_box(&img), black_box(&plain)));
    });

    let colored = RenderConfig {
        color_enabled: true,
        ..plain.clone()
    };
    c.bench_function("render_truecolor_200x110", |b| {
        b.iter(|| render(black_box(&img), black_box(&colored)));
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixbot_image::{Image, ImageSize};
use pixbot_imgproc::filter::box_blur;
use pixbot_imgproc::gradient::sobel_magnitude;

use rand::Rng;

fn random_image<const C: usize>(width: usize, height: usize) -> Image<u8, C> {
    let mut rng = rand::rng();
    let data = (0..width * height * C).map(|_| rng.random()).collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_bgr = random_image::<3>(*width, *height);
        let image_gray = random_image::<1>(*width, *height);

        let mut blurred = Image::<u8, 3>::from_size_val(image_bgr.size(), 0).unwrap();
        group.bench_with_input(
            BenchmarkId::new("box_blur_3x3", &parameter_string),
            &image_bgr,
            |b, src| b.iter(|| black_box(box_blur(src, &mut blurred, 3))),
        );

        let mut grad = Image::<u8, 1>::from_size_val(image_gray.size(), 0).unwrap();
        group.bench_with_input(
            BenchmarkId::new("sobel_magnitude", &parameter_string),
            &image_gray,
            |b, src| b.iter(|| black_box(sobel_magnitude(src, &mut grad))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);

use logo_rendr::{Charset, ColorMode, RenderOptions, process_image, target_height};
use image::{Rgba, RgbaImage};

fn main() {
    println!("Logo Renderer - Aspect Correction Demo");
    println!("======================================\n");

    // Source images with various aspect ratios
    let test_cases = vec![
        (100, 100, "100x100 (square)"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (300, 600, "300x600 (portrait)"),
        (800, 20, "800x20 (banner strip)"),
    ];

    let columns = 32;

    for (width, height, description) in test_cases {
        println!("Testing: {}", description);

        // Diagonal gray gradient
        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let gray = ((x + y) % 256) as u8;
                img.put_pixel(x, y, Rgba([gray, gray, gray, 255]));
            }
        }

        let rows = target_height(columns, width, height);
        println!("  Source: {}x{} px", width, height);
        println!("  Cells:  {}x{}", columns, rows);

        let options = RenderOptions {
            width: columns,
            color_mode: ColorMode::None,
            charset: Charset::Detailed,
            ..Default::default()
        };
        match process_image(&img, &options) {
            Ok(art) if art.is_empty() => println!("  (too flat for a single row)"),
            Ok(art) => print!("{art}"),
            Err(e) => println!("  ✗ {e}"),
        }
        println!();
    }

    println!("Rows are halved because terminal cells are about twice as tall as wide.");
}

/// Basic example: render a synthetic logo to the terminal
///
/// Draws a dark disc with a white "eye" on a white canvas and prints it with
/// background removal on, so the canvas disappears but the eye stays.
use logo_rendr::{Charset, ColorMode, RenderOptions, process_image};
use image::{Rgba, RgbaImage};

fn main() {
    println!("Logo Renderer - Basic Example");
    println!("=============================\n");

    let width = 160;
    let height = 160;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 60.0;
    let eye_radius = 14.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < eye_radius {
                // White eye, enclosed by the disc
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if dist < radius {
                // Blue to purple gradient across the disc
                let t = x as f32 / width as f32;
                img.put_pixel(x, y, Rgba([(40.0 + 160.0 * t) as u8, 40, 200, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    for (color_mode, charset) in [
        (ColorMode::Truecolor, Charset::Blocks),
        (ColorMode::Indexed256, Charset::Detailed),
        (ColorMode::None, Charset::Detailed),
    ] {
        let options = RenderOptions {
            width: 40,
            color_mode,
            charset,
            background_transparent: true,
            ..Default::default()
        };

        println!("\ncolor: {}, charset: {}", color_mode, charset);
        match process_image(&img, &options) {
            Ok(art) => print!("{art}"),
            Err(e) => eprintln!("render failed: {e}"),
        }
    }
}

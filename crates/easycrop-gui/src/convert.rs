use image::DynamicImage;

/// Convert any decoded image to an egui ColorImage (RGBA, unmultiplied alpha).
pub fn image_to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    let rgba = image.to_rgba8();
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_rgb_gains_opaque_alpha() {
        let img = RgbImage::from_fn(2, 1, |x, _| Rgb([x as u8 * 100, 10, 20]));
        let color = image_to_color_image(&DynamicImage::ImageRgb8(img));
        assert_eq!(color.size, [2, 1]);
        assert_eq!(color.pixels[1], egui::Color32::from_rgb(100, 10, 20));
    }
}

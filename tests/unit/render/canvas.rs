//! Tests for rectangle painting on the output canvas

#[cfg(test)]
mod tests {
    use quadmosaic::render::canvas::Canvas;
    use quadmosaic::spatial::rect::Rect;

    #[test]
    fn test_paint_fills_inclusive_bounds() {
        let mut canvas = Canvas::new(8, 8, false);

        canvas.paint(Rect::new(2, 5, 1, 3), [10, 20, 30]);

        let image = canvas.image();
        assert_eq!(image.get_pixel(2, 1).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(5, 3).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(6, 3).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(2, 4).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_later_paints_overwrite_earlier_ones() {
        let mut canvas = Canvas::new(4, 4, false);

        canvas.paint(Rect::new(0, 3, 0, 3), [100, 100, 100]);
        canvas.paint(Rect::new(0, 1, 0, 1), [200, 0, 0]);

        assert_eq!(canvas.image().get_pixel(0, 0).0, [200, 0, 0, 255]);
        assert_eq!(canvas.image().get_pixel(3, 3).0, [100, 100, 100, 255]);
    }

    // Tests clipping of regions that extend past the canvas
    // Verified by removing the bound clamps and observing the panic
    #[test]
    fn test_out_of_bounds_regions_are_clipped() {
        let mut canvas = Canvas::new(4, 4, false);

        canvas.paint(Rect::new(-2, 5, -2, 5), [50, 60, 70]);
        canvas.paint(Rect::new(3, 1, 0, 3), [255, 255, 255]);

        assert_eq!(canvas.image().get_pixel(0, 0).0, [50, 60, 70, 255]);
        assert_eq!(canvas.image().get_pixel(3, 3).0, [50, 60, 70, 255]);
    }

    #[test]
    fn test_outline_draws_border_over_fill() {
        let mut canvas = Canvas::new(8, 8, true);

        canvas.paint(Rect::new(1, 6, 1, 6), [200, 200, 200]);

        let image = canvas.image();
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(6, 4).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(4, 6).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(3, 3).0, [200, 200, 200, 255]);
    }

    #[test]
    fn test_into_image_preserves_dimensions() {
        let canvas = Canvas::new(5, 9, false);

        let image = canvas.into_image();

        assert_eq!(image.dimensions(), (5, 9));
    }
}

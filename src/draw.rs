//! Opaque, non-antialiased drawing on a `tiny_skia` pixmap.
//!
//! Box coordinates are inclusive pixel indices, as stored in `Bounds`.
//! Line and polygon points name pixels too and are drawn through pixel
//! centres. With antialiasing off and opaque colours, a pixel ends up either
//! untouched (alpha 0) or fully covered (alpha 255).

use crate::models::{Bounds, Point};
use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Cubic control-point distance for a quarter circle, relative to its radius.
const KAPPA: f32 = 0.552_284_8;

/// Outline colour and width, drawn inward from a shape's bounds.
#[derive(Clone, Copy, Debug)]
pub struct Outline {
    pub color: Rgba<u8>,
    pub width: i32,
}

impl Outline {
    pub fn new(color: Rgba<u8>, width: i32) -> Self {
        Self { color, width }
    }
}

fn paint(color: Rgba<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    let [r, g, b, a] = color.0;
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

/// The area covered by an inclusive pixel box.
fn pixel_rect(bounds: Bounds) -> Option<Rect> {
    if bounds.is_empty() {
        return None;
    }
    Rect::from_ltrb(
        bounds.x0 as f32,
        bounds.y0 as f32,
        (bounds.x1 + 1) as f32,
        (bounds.y1 + 1) as f32,
    )
}

fn centre(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let k = r * (1.0 - KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - k, y, x + w, y + k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - k, x + w - k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + k, y + h, x, y + h - k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + k, x + k, y, x + r, y);
    pb.close();
    pb.finish()
}

/// A square drawing surface, converted to an `RgbaImage` once painting is done.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// A fully transparent canvas; `None` for a zero size.
    pub fn new(size: u32) -> Option<Self> {
        Pixmap::new(size, size).map(|pixmap| Self { pixmap })
    }

    fn fill(&mut self, path: &Path, color: Rgba<u8>) {
        self.pixmap
            .fill_path(path, &paint(color), FillRule::Winding, Transform::identity(), None);
    }

    pub fn fill_rect(&mut self, bounds: Bounds, color: Rgba<u8>) {
        if let Some(rect) = pixel_rect(bounds) {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    /// Filled rectangle with an optional outline of `outline.width` pixels
    /// laid along the inside of `bounds`.
    pub fn rect(&mut self, bounds: Bounds, fill: Rgba<u8>, outline: Option<Outline>) {
        match outline {
            Some(outline) => {
                self.fill_rect(bounds, outline.color);
                self.fill_rect(bounds.inset(outline.width), fill);
            }
            None => self.fill_rect(bounds, fill),
        }
    }

    /// Filled rectangle with circular corners of `radius` pixels.
    pub fn rounded_rect(&mut self, bounds: Bounds, radius: i32, fill: Rgba<u8>) {
        if let Some(path) = pixel_rect(bounds).and_then(|rect| rounded_rect_path(rect, radius as f32)) {
            self.fill(&path, fill);
        }
    }

    fn oval(&mut self, bounds: Bounds, color: Rgba<u8>) {
        if let Some(path) = pixel_rect(bounds).and_then(PathBuilder::from_oval) {
            self.fill(&path, color);
        }
    }

    /// Ellipse inscribed in `bounds`, with an optional ring outline drawn inward.
    pub fn ellipse(&mut self, bounds: Bounds, fill: Rgba<u8>, outline: Option<Outline>) {
        match outline {
            Some(outline) => {
                self.oval(bounds, outline.color);
                self.oval(bounds.inset(outline.width), fill);
            }
            None => self.oval(bounds, fill),
        }
    }

    /// Straight segment of `width` pixels with flat ends.
    pub fn line(&mut self, from: Point, to: Point, color: Rgba<u8>, width: i32) {
        let (x0, y0) = centre(from);
        let (x1, y1) = centre(to);
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: width.max(1) as f32,
            line_cap: LineCap::Butt,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Filled polygon through the centres of the given pixels.
    pub fn polygon(&mut self, points: &[Point], fill: Rgba<u8>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        let (x, y) = centre(*first);
        pb.move_to(x, y);
        for p in rest {
            let (x, y) = centre(*p);
            pb.line_to(x, y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.fill(&path, fill);
        }
    }

    /// Straight-alpha RGBA copy of the canvas.
    pub fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (pixel, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *pixel = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn canvas(size: u32) -> Canvas {
        Canvas::new(size).expect("non-zero canvas")
    }

    fn painted(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn zero_size_has_no_canvas() {
        assert!(Canvas::new(0).is_none());
    }

    #[test]
    fn fresh_canvas_is_transparent() {
        let image = canvas(8).into_image();
        assert_eq!(image.dimensions(), (8, 8));
        assert_eq!(painted(&image), 0);
    }

    #[test]
    fn rect_covers_inclusive_bounds() {
        let mut c = canvas(10);
        c.fill_rect(Bounds::new(2, 3, 5, 4), RED);
        let image = c.into_image();
        assert_eq!(painted(&image), 4 * 2);
        assert_eq!(*image.get_pixel(5, 4), RED);
        assert_eq!(image.get_pixel(6, 4)[3], 0);
    }

    #[test]
    fn rect_outline_is_drawn_inward() {
        let mut c = canvas(10);
        c.rect(Bounds::new(0, 0, 9, 9), GREEN, Some(Outline::new(RED, 2)));
        let image = c.into_image();
        assert_eq!(*image.get_pixel(0, 0), RED);
        assert_eq!(*image.get_pixel(1, 5), RED);
        assert_eq!(*image.get_pixel(2, 2), GREEN);
        assert_eq!(*image.get_pixel(8, 8), RED);
    }

    #[test]
    fn shapes_outside_the_canvas_are_clipped() {
        let mut c = canvas(4);
        c.fill_rect(Bounds::new(-5, -5, 1, 1), RED);
        c.line(Point::new(-10.0, 2.0), Point::new(20.0, 2.0), RED, 3);
        let image = c.into_image();
        assert_eq!(*image.get_pixel(0, 0), RED);
        assert_eq!(*image.get_pixel(3, 2), RED);
        assert_eq!(image.get_pixel(3, 0)[3], 0);
    }

    #[test]
    fn ellipse_ring_surrounds_fill() {
        let mut c = canvas(21);
        c.ellipse(Bounds::around(10, 10, 10), RED, Some(Outline::new(GREEN, 2)));
        let image = c.into_image();
        assert_eq!(*image.get_pixel(10, 10), RED);
        assert_eq!(*image.get_pixel(0, 10), GREEN);
        assert_eq!(image.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn rounded_rect_trims_corners_only() {
        let mut c = canvas(20);
        c.rounded_rect(Bounds::new(0, 0, 19, 19), 6, RED);
        let image = c.into_image();
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(19, 19)[3], 0);
        assert_eq!(*image.get_pixel(10, 0), RED);
        assert_eq!(*image.get_pixel(0, 10), RED);
        assert_eq!(*image.get_pixel(10, 10), RED);
    }

    #[test]
    fn thick_line_spans_its_width() {
        let mut c = canvas(20);
        c.line(Point::new(2.0, 10.0), Point::new(17.0, 10.0), RED, 4);
        let image = c.into_image();
        for y in 9..=11 {
            assert_eq!(*image.get_pixel(8, y), RED, "row {y}");
        }
        assert_eq!(image.get_pixel(8, 7)[3], 0);
        assert_eq!(image.get_pixel(8, 13)[3], 0);
    }

    #[test]
    fn thin_line_is_visible() {
        let mut c = canvas(10);
        c.line(Point::new(1.0, 5.0), Point::new(8.0, 5.0), RED, 1);
        let image = c.into_image();
        assert_eq!(*image.get_pixel(4, 5), RED);
        assert_eq!(image.get_pixel(4, 3)[3], 0);
    }

    #[test]
    fn polygon_fills_triangle() {
        let mut c = canvas(12);
        let tri = [Point::new(1.0, 1.0), Point::new(10.0, 1.0), Point::new(1.0, 10.0)];
        c.polygon(&tri, RED);
        let image = c.into_image();
        assert_eq!(*image.get_pixel(2, 2), RED);
        assert_eq!(image.get_pixel(10, 10)[3], 0);
    }

    #[test]
    fn painting_never_leaves_partial_alpha() {
        let mut c = canvas(32);
        c.ellipse(Bounds::new(3, 5, 27, 19), GREEN, Some(Outline::new(RED, 3)));
        c.rounded_rect(Bounds::new(10, 12, 30, 30), 7, RED);
        c.line(Point::new(0.0, 31.0), Point::new(31.0, 3.0), GREEN, 5);
        let image = c.into_image();
        assert!(painted(&image) > 0);
        assert!(image.pixels().all(|p| p[3] == 0 || p[3] == 255));
    }
}

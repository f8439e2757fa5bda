//! The backup icon: a hard drive, a USB stick, and a blue arrow from one to
//! the other, laid out on a 256-unit grid and scaled to the requested size.

use crate::draw::{Canvas, Outline};
use crate::models::{Bounds, Palette, Point, Scale};
use image::RgbaImage;
use log::debug;

/// Lateral spread of each arrowhead wing relative to the head length.
const WING_RATIO: f64 = 0.7;

/// Every scaled coordinate needed to paint the icon at one size.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub size: u32,
    pub drive: Bounds,
    pub drive_outline: i32,
    pub top_edge: Bounds,
    pub vents: [(Point, Point); 3],
    pub vent_width: i32,
    pub platter: Bounds,
    pub platter_outline: i32,
    pub usb_body: Bounds,
    pub usb_radius: i32,
    pub connector: Bounds,
    pub contacts: [Bounds; 2],
    pub led: Bounds,
    pub arrow_start: Point,
    pub arrow_end: Point,
    pub shaft_width: i32,
    pub head_length: f64,
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        let s = Scale::for_size(size);

        // --- Hard drive (top-left) ---
        let drive = Bounds::new(s.sc(10), s.sc(12), s.sc(140), s.sc(125));
        let top_edge = Bounds::new(drive.x0, drive.y0, drive.x1, drive.y0 + s.stroke(14));
        let vent = |offset: i32| {
            let y = drive.y0 + s.sc(offset);
            (
                Point::from_grid(drive.x0 + s.sc(6), y),
                Point::from_grid(drive.x1 - s.sc(6), y),
            )
        };
        let vents = [vent(28), vent(42), vent(56)];
        let (platter_x, platter_y) = drive.center();
        let platter = Bounds::around(platter_x, platter_y, s.stroke(15));

        // --- USB stick (bottom-right) ---
        let usb = Bounds::new(s.sc(155), s.sc(150), s.sc(245), s.sc(240));
        let usb_body = Bounds::new(usb.x0 + s.sc(10), usb.y0 + s.sc(15), usb.x1, usb.y1);
        let connector = Bounds::new(usb.x0 + s.sc(12), usb.y0, usb.x1 - s.sc(12), usb.y0 + s.sc(15));
        let contacts = [
            Bounds::new(
                connector.x0 + s.sc(5),
                connector.y0 + s.sc(3),
                connector.x0 + s.sc(10),
                connector.y0 + s.sc(10),
            ),
            Bounds::new(
                connector.x1 - s.sc(10),
                connector.y0 + s.sc(3),
                connector.x1 - s.sc(5),
                connector.y0 + s.sc(10),
            ),
        ];
        let led = Bounds::new(usb.x0 + s.sc(18), usb.y0 + s.sc(42), usb.x0 + s.sc(30), usb.y0 + s.sc(54));
        let (usb_x, usb_y) = usb.center();

        Self {
            size,
            drive,
            drive_outline: s.stroke(2),
            top_edge,
            vents,
            vent_width: s.stroke(2),
            platter,
            platter_outline: s.stroke(2),
            usb_body,
            usb_radius: s.stroke(12),
            connector,
            contacts,
            led,
            arrow_start: Point::from_grid(platter_x, platter_y),
            arrow_end: Point::from_grid(usb_x, usb_y),
            shaft_width: s.stroke(9),
            head_length: s.sc(18) as f64,
        }
    }
}

/// Tip and both wings of the arrowhead, or `None` when the shaft has no
/// direction to point along.
pub fn arrowhead(start: Point, end: Point, head_length: f64) -> Option<[Point; 3]> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return None;
    }
    let (ux, uy) = (dx / length, dy / length);
    let (px, py) = (-uy, ux);

    let base = Point::new(end.x - ux * head_length, end.y - uy * head_length);
    let spread = head_length * WING_RATIO;
    let wing_a = Point::new(base.x + px * spread, base.y + py * spread);
    let wing_b = Point::new(base.x - px * spread, base.y - py * spread);
    Some([end, wing_a, wing_b])
}

fn draw_arrow(canvas: &mut Canvas, layout: &Layout) {
    canvas.line(layout.arrow_start, layout.arrow_end, Palette::BLUE, layout.shaft_width);
    if let Some(head) = arrowhead(layout.arrow_start, layout.arrow_end, layout.head_length) {
        canvas.polygon(&head, Palette::BLUE);
    }
}

/// Paints a precomputed layout onto a fresh transparent canvas.
pub fn paint(layout: &Layout) -> RgbaImage {
    let Some(mut canvas) = Canvas::new(layout.size) else {
        return RgbaImage::new(layout.size, layout.size);
    };

    canvas.rect(
        layout.drive,
        Palette::LIGHT_GRAY,
        Some(Outline::new(Palette::BLACK, layout.drive_outline)),
    );
    canvas.fill_rect(layout.top_edge, Palette::DARK_GRAY);
    for (from, to) in layout.vents {
        canvas.line(from, to, Palette::BLACK, layout.vent_width);
    }
    canvas.ellipse(
        layout.platter,
        Palette::BLACK,
        Some(Outline::new(Palette::MID_GRAY, layout.platter_outline)),
    );

    canvas.rounded_rect(layout.usb_body, layout.usb_radius, Palette::BLACK);
    canvas.rect(layout.connector, Palette::GOLD, Some(Outline::new(Palette::BLACK, 1)));
    for contact in layout.contacts {
        canvas.fill_rect(contact, Palette::BLACK);
    }
    canvas.ellipse(layout.led, Palette::BLUE, None);

    draw_arrow(&mut canvas, layout);
    canvas.into_image()
}

/// Renders the icon as a `size` x `size` RGBA canvas.
pub fn render_icon(size: u32) -> RgbaImage {
    let layout = Layout::for_size(size);
    debug!("Rendering {size}x{size} icon, arrow {:?} -> {:?}", layout.arrow_start, layout.arrow_end);
    paint(&layout)
}

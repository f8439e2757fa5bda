use image::Rgba;

/// Side length of the design grid every coordinate is expressed in.
pub const DESIGN_GRID: u32 = 256;

/// Sizes written into the icon container, largest (primary) first.
pub const ICON_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

/// Relative path of the generated container.
pub const OUTPUT_FILE: &str = "backup-icon.ico";

/// Largest side length an ICO directory entry can describe.
pub const MAX_ICON_SIZE: u32 = 256;

/// Fixed colours shared by every shape of the icon.
pub struct Palette;

impl Palette {
    pub const LIGHT_GRAY: Rgba<u8> = Rgba([200, 200, 200, 255]);
    pub const DARK_GRAY: Rgba<u8> = Rgba([100, 100, 100, 255]);
    pub const MID_GRAY: Rgba<u8> = Rgba([120, 120, 120, 255]);
    pub const BLACK: Rgba<u8> = Rgba([20, 20, 20, 255]);
    pub const BLUE: Rgba<u8> = Rgba([0, 102, 204, 255]);
    pub const GOLD: Rgba<u8> = Rgba([218, 165, 32, 255]);
}

/// A point in pixel coordinates; `(x, y)` names the pixel at column x, row y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_grid(x: i32, y: i32) -> Self {
        Self::new(x as f64, y as f64)
    }
}

/// An axis-aligned box whose corners are both inclusive pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A square box of half-width `r` around `(cx, cy)`.
    pub fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// True when the box covers no pixel at all.
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// The box shrunk by `by` on every side.
    pub fn inset(&self, by: i32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.x0 + self.x1).div_euclid(2), (self.y0 + self.y1).div_euclid(2))
    }
}

/// Maps design-grid units onto a concrete canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    factor: f64,
}

impl Scale {
    pub fn for_size(size: u32) -> Self {
        Self {
            factor: size as f64 / DESIGN_GRID as f64,
        }
    }

    /// Scales a grid coordinate, truncating toward zero.
    pub fn sc(&self, value: i32) -> i32 {
        (value as f64 * self.factor) as i32
    }

    /// Scales a stroke width or radius, never letting it vanish.
    pub fn stroke(&self, value: i32) -> i32 {
        self.sc(value).max(1)
    }
}

/// GLIDE Project
/// `File` surface.rs
/// `Description` Software frame surface module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::math::Ext2su;

/// Screenshot saving error
#[derive(Debug, thiserror::Error)]
pub enum ScreenshotError {
    #[error("screenshot file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
} // enum ScreenshotError

/// 0x00RRGGBB pixel surface
pub struct Surface {
    data: Vec<u32>,
    extent: Ext2su,
} // struct Surface

impl Surface {
    /// Surface creation function
    /// * `width`, `height` - surface extent
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height],
            extent: Ext2su { width, height },
        }
    } // fn new

    /// Surface resizing function. Contents are cleared.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.extent = Ext2su { width, height };
        self.data.clear();
        self.data.resize(width * height, 0);
    } // fn resize

    pub fn get_extent(&self) -> Ext2su {
        self.extent
    } // fn get_extent

    pub fn get_data(&self) -> &[u32] {
        &self.data
    } // fn get_data

    /// Whole surface filling function
    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
    } // fn clear

    /// Single pixel putting function. Out of surface pixels are ignored.
    pub fn put_pixel(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.extent.width && (y as usize) < self.extent.height {
            self.data[y as usize * self.extent.width + x as usize] = color;
        }
    } // fn put_pixel

    /// Bar drawing function
    /// * `x0`, `y0` - top left corner, inclusive
    /// * `x1`, `y1` - bottom right corner, exclusive
    pub fn draw_bar(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: u32) {
        let clamp_x = |x: isize| x.clamp(0, self.extent.width as isize) as usize;
        let clamp_y = |y: isize| y.clamp(0, self.extent.height as isize) as usize;
        let (x0, x1, y0, y1) = (clamp_x(x0), clamp_x(x1), clamp_y(y0), clamp_y(y1));

        for y in y0..y1 {
            let line = y * self.extent.width;
            self.data[line + x0..line + x1.max(x0)].fill(color);
        }
    } // fn draw_bar

    /// Bresenham line drawing function
    pub fn draw_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: u32) {
        let (dx, dy) = ((x1 - x0).abs(), -(y1 - y0).abs());
        let (sx, sy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let (mut x, mut y) = (x0, y0);
        let mut error = dx + dy;

        loop {
            self.put_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let doubled = error * 2;
            if doubled >= dy {
                error += dy;
                x += sx;
            }
            if doubled <= dx {
                error += dx;
                y += sy;
            }
        }
    } // fn draw_line

    /// PNG screenshot saving function
    /// * `path` - output file path
    pub fn save_png(&self, path: &std::path::Path) -> Result<(), ScreenshotError> {
        let file = std::io::BufWriter::new(std::fs::File::create(path)?);
        let mut encoder = png::Encoder::new(file, self.extent.width as u32, self.extent.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let rgb = self.data
            .iter()
            .flat_map(|pixel| [(pixel >> 16) as u8, (pixel >> 8) as u8, *pixel as u8])
            .collect::<Vec<u8>>();

        encoder.write_header()?.write_image_data(&rgb)?;
        Ok(())
    } // fn save_png
} // impl Surface


// file surface.rs

//! Linear framebuffer surface for embedded-graphics
use core::convert::Infallible;

use alloc::vec;
use alloc::vec::Vec;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::{Rgb888, RgbColor},
    primitives::Rectangle,
    Pixel,
};

/// A pixel surface the display console can draw on and scroll.
///
/// Besides being a regular `DrawTarget`, a surface can move whole rows
/// around, which is how text output scrolls.
pub trait Surface: DrawTarget<Color = Rgb888> + OriginDimensions {
    /// Copy row `src_y` over row `dst_y`.
    ///
    /// Returns `false` without touching anything when `src_y` is not a row
    /// of the surface.
    fn copy_scanline(&mut self, src_y: u32, dst_y: u32) -> bool;

    /// Paint row `y` with a single color.
    fn fill_scanline(&mut self, y: u32, color: Rgb888);
}

/// Byte order of a pixel in the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Bgr,
    /// One gray level per pixel.
    U8,
}

/// Geometry of a linear framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub width: usize,
    pub height: usize,
    /// Pixels per row, including padding.
    pub stride: usize,
    pub bytes_per_pixel: usize,
    pub pixel_format: PixelFormat,
}

impl FrameInfo {
    /// Tightly packed 32-bit BGR, the usual firmware framebuffer layout.
    pub const fn bgr32(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width,
            bytes_per_pixel: 4,
            pixel_format: PixelFormat::Bgr,
        }
    }

    /// One byte of gray per pixel, as on monochrome LCD panels.
    pub const fn gray8(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width,
            bytes_per_pixel: 1,
            pixel_format: PixelFormat::U8,
        }
    }

    fn row_bytes(&self) -> usize {
        self.stride * self.bytes_per_pixel
    }

    fn required_len(&self) -> usize {
        self.row_bytes() * self.height
    }
}

pub struct FramebufferWriter<B> {
    framebuffer: B,
    info: FrameInfo,
}

impl FramebufferWriter<Vec<u8>> {
    /// Framebuffer backed by heap memory, zero filled.
    pub fn in_memory(info: FrameInfo) -> Self {
        let framebuffer = vec![0u8; info.required_len()];
        Self { framebuffer, info }
    }
}

impl<B> FramebufferWriter<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap an existing framebuffer.
    ///
    /// Rows that do not fit in `framebuffer` are treated as outside the
    /// surface.
    pub fn new(framebuffer: B, info: FrameInfo) -> Self {
        let rows = framebuffer.as_ref().len() / info.row_bytes().max(1);
        let info = FrameInfo {
            height: info.height.min(rows),
            ..info
        };
        Self { framebuffer, info }
    }

    pub fn info(&self) -> FrameInfo {
        self.info
    }

    pub fn width(&self) -> usize {
        self.info.width
    }

    pub fn height(&self) -> usize {
        self.info.height
    }

    /// Raw bytes of the framebuffer.
    pub fn buffer(&self) -> &[u8] {
        self.framebuffer.as_ref()
    }

    fn byte_offset(&self, x: usize, y: usize) -> usize {
        (y * self.info.stride + x) * self.info.bytes_per_pixel
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.info.width && (y as usize) < self.info.height
    }

    /// Read back the color stored at a pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let offset = self.byte_offset(x as usize, y as usize);
        let bytes = self.buffer().get(offset..offset + self.info.bytes_per_pixel)?;
        let color = match self.info.pixel_format {
            PixelFormat::Rgb => Rgb888::new(bytes[0], bytes[1], bytes[2]),
            PixelFormat::Bgr => Rgb888::new(bytes[2], bytes[1], bytes[0]),
            PixelFormat::U8 => Rgb888::new(bytes[0], bytes[0], bytes[0]),
        };
        Some(color)
    }

    /// Colors of one row, left to right.
    pub fn row(&self, y: i32) -> Option<Vec<Rgb888>> {
        if y < 0 || y as usize >= self.info.height {
            return None;
        }
        (0..self.info.width as i32)
            .map(|x| self.pixel(x, y))
            .collect()
    }

    fn put_pixel(&mut self, x: usize, y: usize, color: Rgb888) {
        let offset = self.byte_offset(x, y);
        let format = self.info.pixel_format;
        let bytes_per_pixel = self.info.bytes_per_pixel;
        if let Some(bytes) = self
            .framebuffer
            .as_mut()
            .get_mut(offset..offset + bytes_per_pixel)
        {
            write_color(bytes, format, color);
        }
    }
}

fn write_color(bytes: &mut [u8], format: PixelFormat, color: Rgb888) {
    match format {
        PixelFormat::Rgb => {
            bytes[0] = color.r();
            bytes[1] = color.g();
            bytes[2] = color.b();
        }
        PixelFormat::Bgr => {
            bytes[0] = color.b();
            bytes[1] = color.g();
            bytes[2] = color.r();
            if bytes.len() == 4 {
                bytes[3] = 255;
            }
        }
        PixelFormat::U8 => {
            bytes[0] = color.r() / 3 + color.g() / 3 + color.b() / 3;
        }
    }
}

impl<B> DrawTarget for FramebufferWriter<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if self.in_bounds(x, y) {
                self.put_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        let start_x = area.top_left.x as usize;
        let start_y = area.top_left.y as usize;
        let width = area.size.width as usize;
        let format = self.info.pixel_format;
        let bytes_per_pixel = self.info.bytes_per_pixel;

        for y in start_y..start_y + area.size.height as usize {
            let row_start = self.byte_offset(start_x, y);
            let row_end = row_start + width * bytes_per_pixel;
            if let Some(row) = self.framebuffer.as_mut().get_mut(row_start..row_end) {
                for bytes in row.chunks_exact_mut(bytes_per_pixel) {
                    write_color(bytes, format, color);
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.bounding_box();
        self.fill_solid(&area, color)
    }
}

impl<B> OriginDimensions for FramebufferWriter<B> {
    fn size(&self) -> Size {
        Size::new(self.info.width as u32, self.info.height as u32)
    }
}

impl<B> Surface for FramebufferWriter<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn copy_scanline(&mut self, src_y: u32, dst_y: u32) -> bool {
        let height = self.info.height as u32;
        if src_y >= height {
            return false;
        }
        if dst_y >= height || src_y == dst_y {
            return true;
        }

        let row_bytes = self.info.row_bytes();
        let src = src_y as usize * row_bytes;
        let dst = dst_y as usize * row_bytes;
        let buffer = self.framebuffer.as_mut();
        if src + row_bytes > buffer.len() || dst + row_bytes > buffer.len() {
            return false;
        }
        buffer.copy_within(src..src + row_bytes, dst);
        true
    }

    fn fill_scanline(&mut self, y: u32, color: Rgb888) {
        let row = Rectangle::new(Point::new(0, y as i32), Size::new(self.info.width as u32, 1));
        self.fill_solid(&row, color).ok();
    }
}

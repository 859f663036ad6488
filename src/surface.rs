use crate::color::Color;

/// A drawable target for [`crate::board::ColorBoard::render_to`].
///
/// Implementations only need pixel dimensions, a clear, and a filled
/// rectangle; the board never reads anything back.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color);
}

/// [`Surface`] over a borrowed RGBA8 framebuffer, the format handed out by
/// `pixels::Pixels::frame_mut`.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameSurface<'a> {
    /// # Panics
    ///
    /// Panics if `frame` is not exactly `width * height` RGBA pixels.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            frame.len(),
            width as usize * height as usize * 4,
            "frame length does not match {width}x{height} RGBA"
        );

        Self {
            frame,
            width,
            height,
        }
    }
}

impl Surface for FrameSurface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 0xff]);
        }
    }

    /// Fills a rectangle, clipped against the frame. Rectangles that
    /// overhang the right/bottom edge (the ceil'd cells of the last row and
    /// column) are silently cut off.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }

        let rgba = color.to_rgba();
        let x_end = (x + w).min(self.width) as usize;
        let y_end = (y + h).min(self.height) as usize;

        for row in y as usize..y_end {
            let start = (row * self.width as usize + x as usize) * 4;
            let end = (row * self.width as usize + x_end) * 4;

            for pixel in self.frame[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn clear_fills_opaque_black() {
        let mut frame = vec![0x55u8; 2 * 2 * 4];
        let mut surface = FrameSurface::new(&mut frame, 2, 2);

        surface.clear();

        assert!(frame.chunks_exact(4).all(|p| p == [0, 0, 0, 0xff]));
    }

    #[test]
    fn fill_rect_writes_only_the_rectangle() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut surface = FrameSurface::new(&mut frame, 4, 4);

        surface.fill_rect(1, 1, 2, 2, red());

        for y in 0..4usize {
            for x in 0..4usize {
                let pixel = &frame[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
                if (1..3).contains(&x) && (1..3).contains(&y) {
                    assert_eq!(pixel, [255, 0, 0, 0xff]);
                } else {
                    assert_eq!(pixel, [0, 0, 0, 0]);
                }
            }
        }
    }

    #[test]
    fn fill_rect_clips_overhanging_cells() {
        let mut frame = vec![0u8; 3 * 3 * 4];
        let mut surface = FrameSurface::new(&mut frame, 3, 3);

        surface.fill_rect(2, 2, 2, 2, red());

        let corner = &frame[(2 * 3 + 2) * 4..(2 * 3 + 2) * 4 + 4];
        assert_eq!(corner, [255, 0, 0, 0xff]);
    }

    #[test]
    fn fill_rect_ignores_rects_past_the_edge() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        let mut surface = FrameSurface::new(&mut frame, 2, 2);

        surface.fill_rect(2, 0, 2, 2, red());
        surface.fill_rect(0, 5, 1, 1, red());

        assert!(frame.iter().all(|&byte| byte == 0));
    }

    #[test]
    #[should_panic(expected = "frame length")]
    fn mismatched_frame_length_panics() {
        let mut frame = vec![0u8; 7];
        FrameSurface::new(&mut frame, 2, 2);
    }
}

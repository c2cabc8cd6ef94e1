// Frame atlas: slices a frame sheet into per-frame sub-images

use super::AssetError;
use glam::Vec2;
use image::{imageops, RgbaImage};

/// A rectangular frame region within a sheet (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check that the rect is non-empty and lies fully inside a sheet
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }

        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);

        matches!(
            (right, bottom),
            (Some(r), Some(b)) if r <= sheet_width && b <= sheet_height
        )
    }
}

/// An ordered, fixed-length sequence of frames extracted from one sheet
#[derive(Debug, Clone)]
pub struct FrameSequence {
    name: String,
    frames: Vec<RgbaImage>,
    max_height: u32,
}

impl FrameSequence {
    /// Name of the sheet this sequence was cut from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All extracted frames, in authored order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Get a single frame
    pub fn frame(&self, index: usize) -> Option<&RgbaImage> {
        self.frames.get(index)
    }

    /// Number of frames (never zero)
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Height of the tallest frame
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Size of every frame in pixels
    pub fn frame_sizes(&self) -> Vec<Vec2> {
        self.frames
            .iter()
            .map(|f| Vec2::new(f.width() as f32, f.height() as f32))
            .collect()
    }
}

/// Cuts sheets into frame sequences
pub struct FrameAtlas;

impl FrameAtlas {
    /// Extract one sub-image per rect
    ///
    /// Fails if any rect is empty or reaches outside the sheet, or if there
    /// are no rects at all.
    pub fn build(
        name: &str,
        sheet: &RgbaImage,
        rects: &[FrameRect],
    ) -> Result<FrameSequence, AssetError> {
        if rects.is_empty() {
            return Err(AssetError::EmptySequence(name.to_string()));
        }

        let (sheet_width, sheet_height) = sheet.dimensions();
        let mut frames = Vec::with_capacity(rects.len());
        let mut max_height = 0;

        for (index, rect) in rects.iter().enumerate() {
            if !rect.fits_within(sheet_width, sheet_height) {
                return Err(AssetError::RegionOutOfBounds {
                    sheet: name.to_string(),
                    index,
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    sheet_width,
                    sheet_height,
                });
            }

            let frame = imageops::crop_imm(sheet, rect.x, rect.y, rect.width, rect.height).to_image();
            max_height = max_height.max(rect.height);
            frames.push(frame);
        }

        Ok(FrameSequence {
            name: name.to_string(),
            frames,
            max_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 8x4 sheet: left half red, right half blue
    fn two_tone_sheet() -> RgbaImage {
        RgbaImage::from_fn(8, 4, |x, _| {
            if x < 4 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        })
    }

    #[test]
    fn test_rect_fits_within() {
        assert!(FrameRect::new(0, 0, 8, 4).fits_within(8, 4));
        assert!(FrameRect::new(4, 1, 4, 3).fits_within(8, 4));
        assert!(!FrameRect::new(5, 0, 4, 4).fits_within(8, 4));
        assert!(!FrameRect::new(0, 1, 8, 4).fits_within(8, 4));
    }

    #[test]
    fn test_empty_rect_does_not_fit() {
        assert!(!FrameRect::new(0, 0, 0, 4).fits_within(8, 4));
        assert!(!FrameRect::new(0, 0, 4, 0).fits_within(8, 4));
    }

    #[test]
    fn test_rect_overflow_does_not_fit() {
        assert!(!FrameRect::new(u32::MAX, 0, 2, 2).fits_within(u32::MAX, 4));
    }

    #[test]
    fn test_build_extracts_pixels_in_order() {
        let sheet = two_tone_sheet();
        let rects = [FrameRect::new(0, 0, 4, 4), FrameRect::new(4, 0, 4, 2)];

        let sequence = FrameAtlas::build("two_tone", &sheet, &rects).unwrap();

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.name(), "two_tone");
        assert_eq!(sequence.frame(0).unwrap().dimensions(), (4, 4));
        assert_eq!(sequence.frame(1).unwrap().dimensions(), (4, 2));
        assert_eq!(*sequence.frame(0).unwrap().get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*sequence.frame(1).unwrap().get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_build_tracks_max_height() {
        let sheet = two_tone_sheet();
        let rects = [
            FrameRect::new(0, 0, 2, 1),
            FrameRect::new(2, 0, 2, 3),
            FrameRect::new(4, 0, 2, 2),
        ];

        let sequence = FrameAtlas::build("heights", &sheet, &rects).unwrap();
        assert_eq!(sequence.max_height(), 3);
        assert_eq!(
            sequence.frame_sizes(),
            vec![Vec2::new(2.0, 1.0), Vec2::new(2.0, 3.0), Vec2::new(2.0, 2.0)]
        );
    }

    #[test]
    fn test_build_rejects_out_of_bounds_rect() {
        let sheet = two_tone_sheet();
        let rects = [FrameRect::new(0, 0, 4, 4), FrameRect::new(6, 0, 4, 4)];

        let err = FrameAtlas::build("bad", &sheet, &rects).unwrap_err();
        assert!(matches!(
            err,
            AssetError::RegionOutOfBounds { index: 1, x: 6, .. }
        ));
    }

    #[test]
    fn test_build_rejects_empty_rect_list() {
        let sheet = two_tone_sheet();
        let err = FrameAtlas::build("none", &sheet, &[]).unwrap_err();
        assert!(matches!(err, AssetError::EmptySequence(name) if name == "none"));
    }
}

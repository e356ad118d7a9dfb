use crate::cursor::BitCursor;

const ON: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
const OFF: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// Streams the bits of a file into RGBA frames, one bit per pixel. The
/// cursor carries over between frames so consecutive frames continue where
/// the previous one stopped.
#[derive(Debug, Default)]
pub struct BitRenderer {
    cursor: BitCursor,
}

impl BitRenderer {
    pub fn new() -> Self {
        Self {
            cursor: BitCursor::new(),
        }
    }

    pub fn cursor(&self) -> BitCursor {
        self.cursor
    }

    /// Paints every whole pixel of `output_frame`. `bytes` must be non-empty.
    pub fn draw(&mut self, bytes: &[u8], output_frame: &mut [u8]) {
        debug_assert!(!bytes.is_empty());
        for pixel in output_frame.chunks_exact_mut(4) {
            let color = if self.cursor.read(bytes) { ON } else { OFF };
            pixel.copy_from_slice(&color);
            self.cursor.advance(bytes.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &[u8]) -> Vec<bool> {
        frame
            .chunks_exact(4)
            .map(|pixel| match pixel {
                [0xFF, 0xFF, 0xFF, 0xFF] => true,
                [0x00, 0x00, 0x00, 0x00] => false,
                other => panic!("unsaturated pixel {:?}", other),
            })
            .collect()
    }

    #[test]
    fn two_bytes_on_a_sixteen_pixel_row() {
        let mut renderer = BitRenderer::new();
        let mut frame = [0x7Fu8; 16 * 4];
        renderer.draw(&[0xFF, 0x00], &mut frame);

        let pixels = lit(&frame);
        assert!(pixels[..8].iter().all(|&on| on));
        assert!(pixels[8..].iter().all(|&on| !on));
        assert_eq!(renderer.cursor(), BitCursor::new());
    }

    #[test]
    fn single_byte_repeats() {
        let mut renderer = BitRenderer::new();
        let mut frame = [0u8; 20 * 4];
        renderer.draw(&[0xB0], &mut frame);

        let pattern = [false, false, false, false, true, true, false, true];
        let expected: Vec<bool> = pattern.iter().cycle().take(20).copied().collect();
        assert_eq!(lit(&frame), expected);
    }

    #[test]
    fn cursor_persists_across_frames() {
        let bytes = [0x12, 0x34, 0x56];
        let mut renderer = BitRenderer::new();
        let mut frame = [0u8; 5 * 4];
        let mut painted = 0usize;
        for _ in 0..11 {
            renderer.draw(&bytes, &mut frame);
            painted += 5;
            let cursor = renderer.cursor();
            assert_eq!(cursor.byte_index, (painted / 8) % bytes.len());
            assert_eq!(cursor.bit_index as usize, painted % 8);
        }
    }

    #[test]
    fn frames_drift_through_the_file() {
        let bytes = [0x0F, 0xA5, 0x3C];
        let mut renderer = BitRenderer::new();
        let mut first = [0u8; 7 * 4];
        let mut second = [0u8; 7 * 4];
        renderer.draw(&bytes, &mut first);
        renderer.draw(&bytes, &mut second);

        let mut whole = [0u8; 14 * 4];
        BitRenderer::new().draw(&bytes, &mut whole);
        assert_eq!(&whole[..7 * 4], &first[..]);
        assert_eq!(&whole[7 * 4..], &second[..]);
    }

    #[test]
    fn full_cycle_returns_to_first_pixel() {
        let bytes = [0x01, 0x80];
        let mut renderer = BitRenderer::new();
        let mut one = [0u8; 4];
        renderer.draw(&bytes, &mut one);
        let first = one;

        let mut rest = vec![0u8; (bytes.len() * 8 - 1) * 4];
        renderer.draw(&bytes, &mut rest);
        renderer.draw(&bytes, &mut one);
        assert_eq!(one, first);
    }

    #[test]
    fn trailing_partial_pixel_is_untouched() {
        let mut renderer = BitRenderer::new();
        let mut frame = [0x42u8; 4 + 3];
        renderer.draw(&[0x01], &mut frame);
        assert_eq!(&frame[..4], &ON);
        assert_eq!(&frame[4..], &[0x42, 0x42, 0x42]);
        assert_eq!(renderer.cursor().bit_index, 1);
    }
}

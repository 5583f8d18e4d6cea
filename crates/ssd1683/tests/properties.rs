//! Property-based tests for frame buffer merging.
//! Checks the invariants over random rectangles and prior content.

use proptest::prelude::*;
use ssd1683::{Bitmap, Color, Dimensions, FrameBuffer};

/// Panel size, then a rectangle that fits inside it.
fn panel_and_rect() -> impl Strategy<Value = (u16, u16, u16, u16, u16, u16)> {
    (1u16..=48, 1u16..=40).prop_flat_map(|(cols, rows)| {
        (1..=cols, 1..=rows).prop_flat_map(move |(w, h)| {
            (Just(cols), Just(rows), 0..=cols - w, 0..=rows - h, Just(w), Just(h))
        })
    })
}

proptest! {
    /// Merging then reading back the same rectangle yields the bitmap, and
    /// every pixel outside it keeps its prior value.
    #[test]
    fn merge_round_trips(
        (cols, rows, x, y, w, h) in panel_and_rect(),
        seed in any::<u64>(),
        ink in any::<u64>(),
    ) {
        let dims = Dimensions::new(rows, cols).unwrap();
        let mut fb = FrameBuffer::new(dims);
        let noise = |s: u64, x: u16, y: u16| {
            Color::from_bit((s.rotate_left((x as u32 * 7 + y as u32 * 13) % 64) & 1) == 1)
        };
        for py in 0..rows {
            for px in 0..cols {
                fb.set_pixel(px, py, noise(seed, px, py));
            }
        }
        let before = fb.to_bitmap();
        let bitmap = Bitmap::from_fn(w, h, |bx, by| noise(ink, bx, by));

        fb.merge(x, y, &bitmap).unwrap();

        for py in 0..rows {
            for px in 0..cols {
                let inside = (x..x + w).contains(&px) && (y..y + h).contains(&py);
                let expected = if inside {
                    bitmap.pixel(px - x, py - y)
                } else {
                    before.pixel(px, py)
                };
                prop_assert_eq!(fb.pixel(px, py), expected, "pixel ({}, {})", px, py);
            }
        }
    }

    /// A rectangle that overhangs either edge is rejected and changes nothing.
    #[test]
    fn overhanging_merge_is_rejected(
        (cols, rows, x, y, w, h) in panel_and_rect(),
        grow_x in any::<bool>(),
    ) {
        let dims = Dimensions::new(rows, cols).unwrap();
        let mut fb = FrameBuffer::new(dims);
        let (x, y) = if grow_x { (cols - w + 1, y) } else { (x, rows - h + 1) };

        prop_assert!(fb.merge(x, y, &Bitmap::new(w, h, Color::Black)).is_err());
        prop_assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }
}

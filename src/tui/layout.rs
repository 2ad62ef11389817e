//! Layout helpers for the TUI

use ratatui::layout::Rect;

/// Create a fixed-size rect centered in `r`, clipped to fit
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let rect = centered_rect_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }

    #[test]
    fn test_clipped_to_area() {
        let rect = centered_rect_fixed(50, 20, Rect::new(2, 1, 30, 10));
        assert_eq!(rect, Rect::new(2, 1, 30, 10));
    }
}

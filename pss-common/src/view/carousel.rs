//! Home page flyer carousel
//!
//! A fixed-window viewport over the events sorted most-recent-first. The
//! state machine is a single clamped index: prev/next move by one, resize
//! recomputes the window size, and the index is re-clamped after every
//! transition. Layout is a fixed per-item stride converted to a pixel
//! translation of the strip.

use crate::model::Event;
use crate::SiteData;

/// Carousel item width in logical pixels
pub const ITEM_WIDTH_PX: u32 = 300;

/// Gap between carousel items in logical pixels
pub const ITEM_GAP_PX: u32 = 32;

/// Per-item stride (item width + gap) used for the strip translation
pub const ITEM_STRIDE_PX: u32 = ITEM_WIDTH_PX + ITEM_GAP_PX;

/// Viewport widths strictly above this show three items, else one
pub const WIDE_VIEWPORT_PX: u32 = 768;

/// Number of items visible at a given viewport width
pub fn items_to_show(viewport_px: u32) -> usize {
    if viewport_px > WIDE_VIEWPORT_PX {
        3
    } else {
        1
    }
}

/// Transient carousel state: current index plus the visible window size.
///
/// Owned by the home page alone and reset on page (re)load. Every
/// transition re-clamps the index to `[0, max(0, n - items_to_show)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub items_to_show: usize,
}

impl CarouselState {
    /// State for a fresh page load at the given viewport width
    pub fn new(index: usize, viewport_px: u32) -> Self {
        Self {
            index,
            items_to_show: items_to_show(viewport_px),
        }
    }

    /// Largest valid index for `item_count` items
    pub fn max_index(&self, item_count: usize) -> usize {
        item_count.saturating_sub(self.items_to_show)
    }

    /// Re-clamp the index into `[0, max_index]`
    pub fn clamp(mut self, item_count: usize) -> Self {
        self.index = self.index.min(self.max_index(item_count));
        self
    }

    /// Move one item back, clamped at the start
    pub fn prev(mut self, item_count: usize) -> Self {
        self.index = self.index.saturating_sub(1);
        self.clamp(item_count)
    }

    /// Move one item forward, clamped at the end
    pub fn next(mut self, item_count: usize) -> Self {
        self.index = self.index.saturating_add(1);
        self.clamp(item_count)
    }

    /// Recompute the window for a new viewport width.
    ///
    /// The index is preserved beyond what re-clamping requires.
    pub fn resize(mut self, viewport_px: u32, item_count: usize) -> Self {
        self.items_to_show = items_to_show(viewport_px);
        self.clamp(item_count)
    }

    /// Pixel translation applied to the strip
    pub fn offset_px(&self) -> u32 {
        self.index as u32 * ITEM_STRIDE_PX
    }
}

/// One flyer in the strip
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub flyer: String,
    pub title: String,
    /// Navigation target when the flyer is clicked
    pub href: String,
}

/// Everything the home page binder needs to draw the carousel
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub slides: Vec<Slide>,
    pub state: CarouselState,
    pub offset_px: u32,
    /// False iff the index sits at the start (control dims to 0.5)
    pub prev_enabled: bool,
    /// False iff the index sits at the end
    pub next_enabled: bool,
}

/// Derive the carousel view: flyers sorted by date descending, state
/// re-clamped against the slide count.
pub fn render(data: &SiteData, state: CarouselState) -> CarouselView {
    let sorted = data.events_by_date_desc();
    let slides: Vec<Slide> = sorted.iter().map(|e| slide(e)).collect();

    let state = state.clamp(slides.len());
    let max = state.max_index(slides.len());

    CarouselView {
        offset_px: state.offset_px(),
        prev_enabled: state.index > 0,
        next_enabled: state.index < max,
        slides,
        state,
    }
}

fn slide(event: &Event) -> Slide {
    Slide {
        flyer: event.flyer.clone(),
        title: event.title.clone(),
        href: "/events".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;
    use chrono::NaiveDate;

    fn events(n: usize) -> SiteData {
        let events = (0..n)
            .map(|i| Event {
                id: format!("e{}", i),
                title: format!("The People's Saturday School: Topic {}", i),
                date: NaiveDate::from_ymd_opt(2024, 1, (i + 1) as u32).unwrap(),
                time: String::new(),
                location: String::new(),
                flyer: format!("assets/flyer{}.jpg", i),
                blurb: String::new(),
                speakers: vec![],
            })
            .collect();
        SiteData::new(events, vec![])
    }

    #[test]
    fn test_items_to_show_breakpoint() {
        assert_eq!(items_to_show(1024), 3);
        assert_eq!(items_to_show(769), 3);
        assert_eq!(items_to_show(768), 1);
        assert_eq!(items_to_show(500), 1);
    }

    #[test]
    fn test_prev_next_clamped() {
        let n = 5;
        let mut s = CarouselState::new(0, 1024); // shows 3, max index 2

        s = s.prev(n);
        assert_eq!(s.index, 0); // clamped at start

        s = s.next(n);
        s = s.next(n);
        assert_eq!(s.index, 2);
        s = s.next(n);
        assert_eq!(s.index, 2); // clamped at end
    }

    #[test]
    fn test_index_bounds_after_any_sequence() {
        let n = 7;
        let mut s = CarouselState::new(0, 1024);
        for op in [0, 1, 1, 1, 1, 1, 0, 1, 1, 1] {
            s = if op == 0 { s.prev(n) } else { s.next(n) };
            assert!(s.index <= s.max_index(n));
        }
    }

    #[test]
    fn test_resize_preserves_index_beyond_clamping() {
        // 7 events at index 2, viewport 1024 -> 500: itemsToShow 3 -> 1,
        // max index grows to 6, index stays 2
        let s = CarouselState::new(2, 1024).clamp(7);
        assert_eq!(s.index, 2);

        let s = s.resize(500, 7);
        assert_eq!(s.items_to_show, 1);
        assert_eq!(s.index, 2);
    }

    #[test]
    fn test_resize_narrow_to_wide_reclamps() {
        let s = CarouselState::new(5, 500).clamp(7); // max 6 at 1 item
        assert_eq!(s.index, 5);

        let s = s.resize(1024, 7); // max becomes 4
        assert_eq!(s.index, 4);
    }

    #[test]
    fn test_fewer_items_than_window() {
        let s = CarouselState::new(0, 1024).clamp(2);
        assert_eq!(s.max_index(2), 0);
        assert_eq!(s.index, 0);
    }

    #[test]
    fn test_offset_uses_fixed_stride() {
        let s = CarouselState::new(2, 1024);
        assert_eq!(s.offset_px(), 2 * 332);
    }

    #[test]
    fn test_render_sorted_desc_with_end_flags() {
        let data = events(4);
        let view = render(&data, CarouselState::new(0, 1024));

        assert_eq!(view.slides.len(), 4);
        // Latest date first
        assert_eq!(view.slides[0].flyer, "assets/flyer3.jpg");
        assert_eq!(view.slides[3].flyer, "assets/flyer0.jpg");
        assert!(view.slides.iter().all(|s| s.href == "/events"));

        assert!(!view.prev_enabled);
        assert!(view.next_enabled);

        let view = render(&data, CarouselState::new(99, 1024));
        assert_eq!(view.state.index, 1); // clamped to max
        assert!(view.prev_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn test_render_empty_collection() {
        let data = SiteData::empty();
        let view = render(&data, CarouselState::new(3, 1024));
        assert!(view.slides.is_empty());
        assert_eq!(view.state.index, 0);
        assert_eq!(view.offset_px, 0);
        assert!(!view.prev_enabled && !view.next_enabled);
    }
}

//! Horizontal layout of the looped card strip.
//!
//! Everything here is in terminal columns. The strip is the brand list laid
//! out twice in a row; the scroll position selects a shift inside the first
//! copy, so the view at 99.9% and at 0% show the same cards.

use crate::model::{looped, BrandEntry};
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// Blank columns on each side of a card's content.
pub const CARD_PADDING: u16 = 1;

/// Blank columns between neighbouring cards.
pub const CARD_GAP: u16 = 2;

/// One card's place in the looped strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Position in the looped (doubled) sequence, `0..2L`.
    pub index: usize,
    /// Position in the original brand list, `0..L`.
    pub brand: usize,
    /// First column of the card in strip coordinates.
    pub start: u32,
    /// Card width in columns, padding included.
    pub width: u16,
}

/// A card placed relative to the left edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCard {
    /// Column offset from the viewport's left edge; negative when clipped.
    pub x: i64,
    /// The card drawn there.
    pub slot: CardSlot,
}

/// Width of a card: padding, logo, one space, name, padding.
pub fn card_width(brand: &BrandEntry) -> u16 {
    let logo = brand.logo.render(Style::default()).width();
    let name = brand.name.as_str().width();
    let total = usize::from(CARD_PADDING) * 2 + logo + 1 + name;
    u16::try_from(total).unwrap_or(u16::MAX)
}

/// Precomputed card positions for a brand list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    slots: Vec<CardSlot>,
    copy_width: u32,
}

impl StripLayout {
    /// Lay out two copies of `brands` back to back.
    pub fn new(brands: &[BrandEntry]) -> Self {
        let mut slots = Vec::with_capacity(brands.len() * 2);
        let mut start = 0u32;

        for (index, brand) in looped(brands).into_iter().enumerate() {
            let width = card_width(brand);
            slots.push(CardSlot {
                index,
                brand: index % brands.len(),
                start,
                width,
            });
            start += u32::from(width) + u32::from(CARD_GAP);
        }

        Self {
            slots,
            copy_width: start / 2,
        }
    }

    /// Slots of the looped sequence, in order.
    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    /// Width of one copy of the list, trailing gap included.
    pub fn copy_width(&self) -> u32 {
        self.copy_width
    }

    /// Width of the looped strip.
    pub fn strip_width(&self) -> u32 {
        self.copy_width * 2
    }

    /// Columns to shift left for a scroll position in `[0, 100)`.
    pub fn shift_for(&self, position: f64) -> u32 {
        if self.copy_width == 0 {
            return 0;
        }
        let raw = (position.clamp(0.0, 100.0) / 100.0 * f64::from(self.copy_width)).floor();
        (raw as u32).min(self.copy_width - 1)
    }

    /// Cards intersecting a viewport of `viewport_width` columns.
    ///
    /// When the viewport is wider than what remains of the strip, the strip
    /// repeats so the row is never left blank.
    pub fn visible(&self, shift: u32, viewport_width: u16) -> Vec<PlacedCard> {
        let strip_width = u64::from(self.strip_width());
        let mut placed = Vec::new();
        if strip_width == 0 || viewport_width == 0 {
            return placed;
        }

        let shift = u64::from(shift);
        let right = shift + u64::from(viewport_width);
        let mut cycle_start = 0u64;

        while cycle_start < right {
            for slot in &self.slots {
                let start = cycle_start + u64::from(slot.start);
                let end = start + u64::from(slot.width);
                if start >= right {
                    break;
                }
                if end > shift {
                    placed.push(PlacedCard {
                        x: start as i64 - shift as i64,
                        slot: *slot,
                    });
                }
            }
            cycle_start += strip_width;
        }

        placed
    }

    /// Card under a viewport column, or `None` over a gap.
    pub fn card_at(&self, shift: u32, column: u16) -> Option<CardSlot> {
        let placed = self.visible(shift, column.saturating_add(1));
        let column = i64::from(column);
        placed
            .into_iter()
            .find(|card| card.x <= column && column < card.x + i64::from(card.slot.width))
            .map(|card| card.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Logo;
    use ratatui::text::Span;

    fn glyph_brand(name: &str) -> BrandEntry {
        BrandEntry::new(name, "https://example.com", Logo::Element(Span::raw("*")))
    }

    /// Two brands "ab" and "cde": widths 1+1+1+2+1 = 6 and 7.
    fn two_brand_layout() -> StripLayout {
        StripLayout::new(&[glyph_brand("ab"), glyph_brand("cde")])
    }

    #[test]
    fn card_width_counts_padding_logo_space_and_name() {
        assert_eq!(card_width(&glyph_brand("ab")), 6);
    }

    #[test]
    fn card_width_counts_wide_characters_twice() {
        let brand = BrandEntry::new("日本", "", Logo::Element(Span::raw("🦀")));
        // 1 + 2 + 1 + 4 + 1
        assert_eq!(card_width(&brand), 9);
    }

    #[test]
    fn slots_cover_the_looped_list() {
        let layout = two_brand_layout();
        let starts: Vec<u32> = layout.slots().iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 8, 17, 25]);
        let brands: Vec<usize> = layout.slots().iter().map(|s| s.brand).collect();
        assert_eq!(brands, vec![0, 1, 0, 1]);
        assert_eq!(layout.copy_width(), 17);
        assert_eq!(layout.strip_width(), 34);
    }

    #[test]
    fn shift_is_a_fraction_of_one_copy() {
        let layout = two_brand_layout();
        assert_eq!(layout.shift_for(0.0), 0);
        assert_eq!(layout.shift_for(50.0), 8);
        assert_eq!(layout.shift_for(99.99), 16);
    }

    #[test]
    fn visible_clips_partially_shown_cards() {
        let layout = two_brand_layout();
        let placed = layout.visible(3, 10);
        let xs: Vec<i64> = placed.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![-3, 5]);
    }

    #[test]
    fn wide_viewport_repeats_the_strip() {
        let layout = two_brand_layout();
        let placed = layout.visible(0, 40);
        let indices: Vec<usize> = placed.iter().map(|c| c.slot.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 0]);
        assert_eq!(placed[4].x, 34);
    }

    #[test]
    fn card_at_finds_card_and_ignores_gaps() {
        let layout = two_brand_layout();
        assert_eq!(layout.card_at(0, 0).map(|s| s.index), Some(0));
        assert_eq!(layout.card_at(0, 5).map(|s| s.index), Some(0));
        assert_eq!(layout.card_at(0, 6), None);
        assert_eq!(layout.card_at(0, 7), None);
        assert_eq!(layout.card_at(0, 8).map(|s| s.index), Some(1));
        assert_eq!(layout.card_at(4, 4).map(|s| s.index), Some(1));
    }

    #[test]
    fn empty_list_has_no_cards() {
        let layout = StripLayout::new(&[]);
        assert_eq!(layout.strip_width(), 0);
        assert_eq!(layout.shift_for(42.0), 0);
        assert!(layout.visible(0, 80).is_empty());
        assert_eq!(layout.card_at(0, 3), None);
    }
}

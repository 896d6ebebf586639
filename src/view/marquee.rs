//! The scrolling card strip widget.

use crate::model::BrandEntry;
use crate::view::styles::MarqueeStyles;
use crate::view_state::{StripLayout, CARD_PADDING};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

/// Renders the looped cards shifted left by `shift` columns.
///
/// Cards are drawn on the middle row of the area. A card cut by either
/// edge is clipped by column; a wide character split by an edge becomes
/// blank cells.
#[derive(Debug, Clone)]
pub struct Marquee<'a> {
    brands: &'a [BrandEntry],
    layout: &'a StripLayout,
    shift: u32,
    hovered: Option<usize>,
    styles: MarqueeStyles,
}

impl<'a> Marquee<'a> {
    /// Widget for `brands` laid out by `layout`, shifted left by `shift` columns.
    pub fn new(brands: &'a [BrandEntry], layout: &'a StripLayout, shift: u32) -> Self {
        Self {
            brands,
            layout,
            shift,
            hovered: None,
            styles: MarqueeStyles::default(),
        }
    }

    /// Highlight the card with this looped index.
    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Override the default styles.
    pub fn styles(mut self, styles: MarqueeStyles) -> Self {
        self.styles = styles;
        self
    }
}

/// Spans making up one card, padding included.
pub fn card_spans(brand: &BrandEntry, style: Style) -> Vec<Span<'static>> {
    let padding = " ".repeat(usize::from(CARD_PADDING));
    vec![
        Span::styled(padding.clone(), style),
        brand.logo.render(style),
        Span::styled(" ", style),
        Span::styled(brand.name.clone(), style),
        Span::styled(padding, style),
    ]
}

impl Widget for Marquee<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.brands.is_empty() {
            return;
        }

        let y = area.y + area.height / 2;
        for card in self.layout.visible(self.shift, area.width) {
            let Some(brand) = self.brands.get(card.slot.brand) else {
                continue;
            };
            let style = if self.hovered == Some(card.slot.index) {
                self.styles.hovered
            } else {
                self.styles.card
            };
            draw_clipped(buf, area, y, card.x, &card_spans(brand, style));
        }
    }
}

/// Write spans starting at column `x` relative to `area`, clipping to it.
fn draw_clipped(buf: &mut Buffer, area: Rect, y: u16, x: i64, spans: &[Span<'_>]) {
    let right = i64::from(area.width);
    let mut col = x;
    let mut utf8 = [0u8; 4];

    for span in spans {
        for ch in span.content.chars() {
            let width = ch.width().unwrap_or(0) as i64;
            if width == 0 {
                continue;
            }
            if col >= right {
                return;
            }
            if col >= 0 && col + width <= right {
                buf.set_string(area.x + col as u16, y, ch.encode_utf8(&mut utf8), span.style);
            } else {
                for c in col.max(0)..(col + width).min(right) {
                    buf[(area.x + c as u16, y)]
                        .set_symbol(" ")
                        .set_style(span.style);
                }
            }
            col += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Logo;
    use crate::view::styles::ColorConfig;
    use ratatui::style::Color;

    fn brands() -> Vec<BrandEntry> {
        vec![
            BrandEntry::new("ab", "https://ab.example", Logo::Element(Span::raw("*"))),
            BrandEntry::new("cde", "https://cde.example", Logo::Element(Span::raw("*"))),
        ]
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(shift: u32, width: u16) -> Buffer {
        let brands = brands();
        let layout = StripLayout::new(&brands);
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        Marquee::new(&brands, &layout, shift)
            .styles(MarqueeStyles::with_color_config(ColorConfig::new(false)))
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn renders_cards_from_the_left_edge() {
        assert_eq!(row(&render(0, 20), 0), " * ab    * cde    * ");
    }

    #[test]
    fn shift_clips_first_card() {
        assert_eq!(row(&render(3, 12), 0), "ab    * cde ");
    }

    #[test]
    fn end_of_first_copy_shows_second_copy() {
        // copy width is 17, so the last shift is one column short of shift 0
        let at_end = row(&render(16, 20), 0);
        let at_start = row(&render(0, 19), 0);
        assert_eq!(at_end, format!(" {at_start}"));
    }

    #[test]
    fn hovered_card_uses_hover_style() {
        let brands = brands();
        let layout = StripLayout::new(&brands);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let styles = MarqueeStyles::with_color_config(ColorConfig::new(true));
        Marquee::new(&brands, &layout, 0)
            .hovered(Some(1))
            .styles(styles)
            .render(area, &mut buf);

        // buffer cells resolve unset colors to Reset, so compare set colors only
        let hovered = buf[(9, 0)].style();
        assert_eq!(hovered.bg, Some(Color::Cyan));
        assert_eq!(hovered.fg, Some(Color::Black));

        let plain = buf[(1, 0)].style();
        assert_eq!(plain.fg, Some(Color::White));
        assert_ne!(plain.bg, Some(Color::Cyan));
    }

    #[test]
    fn split_wide_character_becomes_blank() {
        let brands = vec![BrandEntry::new(
            "x",
            "",
            Logo::Element(Span::raw("🦀")),
        )];
        let layout = StripLayout::new(&brands);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        // card is " 🦀 x ": shifting by 2 cuts the crab in half
        Marquee::new(&brands, &layout, 2).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "  x ");
    }

    #[test]
    fn empty_area_renders_nothing() {
        let brands = brands();
        let layout = StripLayout::new(&brands);
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        Marquee::new(&brands, &layout, 0).render(area, &mut buf);
    }
}

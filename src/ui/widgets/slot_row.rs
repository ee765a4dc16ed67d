//! Slot row widgets for ratatui
//!
//! Renders a panel's fixed row of collectible slots inside a titled box.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::panels::{HuePanel, TierPanel};

/// Width of one rendered slot, brackets plus a gap
const SLOT_WIDTH: u16 = 4;

const EMPTY_SLOT_COLOR: Color = Color::Rgb(70, 70, 80);
const BORDER_COLOR: Color = Color::Rgb(100, 100, 120);

/// Widget for a hue panel: filled square per active slot
pub struct HuePanelWidget<'a> {
    panel: &'a HuePanel,
    title: &'a str,
}

impl<'a> HuePanelWidget<'a> {
    pub fn new(panel: &'a HuePanel) -> Self {
        Self { panel, title: "" }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl Widget for HuePanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = rgb(self.panel.hue().color());
        let cells: Vec<(char, Style)> = self
            .panel
            .slots()
            .iter()
            .map(|active| {
                if *active {
                    ('■', Style::default().fg(color))
                } else {
                    ('·', Style::default().fg(EMPTY_SLOT_COLOR))
                }
            })
            .collect();
        render_slot_box(self.title, &cells, area, buf);
    }
}

/// Widget for the tier panel: slot color comes from the mirrored tier
pub struct TierPanelWidget<'a> {
    panel: &'a TierPanel,
    title: &'a str,
}

impl<'a> TierPanelWidget<'a> {
    pub fn new(panel: &'a TierPanel) -> Self {
        Self { panel, title: "" }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl Widget for TierPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells: Vec<(char, Style)> = self
            .panel
            .slots()
            .iter()
            .map(|slot| match slot {
                Some(tier) => ('●', Style::default().fg(rgb(self.panel.color_for(*tier)))),
                None => ('·', Style::default().fg(EMPTY_SLOT_COLOR)),
            })
            .collect();
        render_slot_box(self.title, &cells, area, buf);
    }
}

fn render_slot_box(title: &str, cells: &[(char, Style)], area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR));

    let inner = block.inner(area);
    block.render(area, buf);

    for (index, (glyph, style)) in cells.iter().enumerate() {
        let cell_x = inner.x + index as u16 * SLOT_WIDTH;
        if inner.height == 0 || cell_x + 2 >= inner.x + inner.width {
            break;
        }
        if let Some(cell) = buf.cell_mut((cell_x, inner.y)) {
            cell.set_char('[').set_style(Style::default().fg(BORDER_COLOR));
        }
        if let Some(cell) = buf.cell_mut((cell_x + 1, inner.y)) {
            cell.set_char(*glyph).set_style(*style);
        }
        if let Some(cell) = buf.cell_mut((cell_x + 2, inner.y)) {
            cell.set_char(']').set_style(Style::default().fg(BORDER_COLOR));
        }
    }
}

/// Convert an RGB triple into a ratatui color
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

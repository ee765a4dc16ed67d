//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use std::collections::HashMap;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ecs::{Position, Renderable};
use crate::game::{Game, GameState, MessageCategory, SceneKind};
use crate::ui::widgets::{rgb, HuePanelWidget, TierPanelWidget};
use crate::world::CHAMBER_HEIGHT;

const BORDER_COLOR: Color = Color::Rgb(100, 100, 120);
const WALL_COLOR: Color = Color::Rgb(90, 90, 100);
const FLOOR_COLOR: Color = Color::Rgb(50, 50, 60);
const CURSOR_BG: Color = Color::Rgb(60, 60, 90);

/// Menu entries on the scene selection screen
const MENU_ENTRIES: [&str; 3] = [
    "Ordered demo (hued cubes)",
    "Tier-sorted demo (tiered orbs)",
    "Quit",
];

/// Screen regions while a scene is running
struct ScreenLayout {
    chamber: Rect,
    panels: Rect,
    messages: Rect,
    help: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CHAMBER_HEIGHT as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        chamber: chunks[0],
        panels: chunks[1],
        messages: chunks[2],
        help: chunks[3],
    }
}

/// Main UI application
pub struct App {
    /// Selection on the scene menu
    menu_cursor: usize,
}

impl App {
    pub fn new() -> Self {
        Self { menu_cursor: 0 }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match game.state() {
            GameState::MainMenu => self.handle_main_menu_input(key, game),
            GameState::Playing(_) => self.handle_playing_input(key, game),
            GameState::Quit => Ok(true),
        }
    }

    fn handle_main_menu_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.menu_cursor < MENU_ENTRIES.len() - 1 {
                    self.menu_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.menu_cursor {
                0 => game.start_scene(SceneKind::Cubes),
                1 => game.start_scene(SceneKind::Orbs),
                _ => game.quit(),
            },
            KeyCode::Char('1') => game.start_scene(SceneKind::Cubes),
            KeyCode::Char('2') => game.start_scene(SceneKind::Orbs),
            KeyCode::Char('q') | KeyCode::Esc => game.quit(),
            _ => {}
        }
        Ok(false)
    }

    fn handle_playing_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => game.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => game.move_cursor(0, 1),
            KeyCode::Left | KeyCode::Char('h') => game.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => game.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => game.interact(),
            KeyCode::Char('q') | KeyCode::Esc => game.quit(),
            _ => {}
        }
        Ok(false)
    }

    /// Handle a mouse event; a left click collects whatever it hits
    pub fn handle_mouse(&mut self, mouse: MouseEvent, game: &mut Game, area: Rect) {
        if !matches!(game.state(), GameState::Playing(_)) {
            return;
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        // Chamber cells are two characters wide, offset by the border.
        let layout = screen_layout(area);
        let inner = layout.chamber.inner(Margin::new(1, 1));
        if mouse.column < inner.x || mouse.row < inner.y {
            return;
        }
        let pos = Position::new(
            ((mouse.column - inner.x) / 2) as i32,
            (mouse.row - inner.y) as i32,
        );
        if game.chamber().is_floor(pos) {
            game.set_cursor(pos);
            game.interact_at(pos);
        }
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match game.state() {
            GameState::MainMenu => self.render_main_menu(frame),
            GameState::Playing(kind) => self.render_playing(frame, game, kind),
            GameState::Quit => {}
        }
    }

    fn render_main_menu(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .split(area);

        let title = vec![
            Line::from(Span::styled(
                r" _ __ ___| (_) __ _ _   _  __ _ _ __ _   _ ",
                Style::default().fg(Color::Rgb(200, 170, 90)),
            )),
            Line::from(Span::styled(
                r"| '__/ _ \ | |/ _` | | | |/ _` | '__| | | |",
                Style::default().fg(Color::Rgb(180, 150, 80)),
            )),
            Line::from(Span::styled(
                r"| | |  __/ | | (_| | |_| | (_| | |  | |_| |",
                Style::default().fg(Color::Rgb(160, 130, 70)),
            )),
            Line::from(Span::styled(
                r"|_|  \___|_|_|\__, |\__,_|\__,_|_|   \__, |",
                Style::default().fg(Color::Rgb(140, 110, 60)),
            )),
            Line::from(Span::styled(
                r"                 |_|                 |___/ ",
                Style::default().fg(Color::Rgb(120, 95, 50)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Pick a chamber, collect the relics",
                Style::default().fg(Color::Rgb(100, 100, 100)),
            )),
        ];
        frame.render_widget(
            Paragraph::new(title).alignment(Alignment::Center),
            chunks[0],
        );

        let mut menu: Vec<Line> = vec![Line::from("")];
        for (index, entry) in MENU_ENTRIES.iter().enumerate() {
            let style = if index == self.menu_cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if index == self.menu_cursor { "▸ " } else { "  " };
            menu.push(Line::from(Span::styled(
                format!("{}[{}] {}", marker, index + 1, entry),
                style,
            )));
            menu.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(menu).alignment(Alignment::Center), chunks[1]);

        let version = Paragraph::new(format!("v{}", env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(version, chunks[2]);
    }

    fn render_playing(&self, frame: &mut Frame, game: &Game, kind: SceneKind) {
        let layout = screen_layout(frame.area());
        self.render_chamber(frame, game, layout.chamber);
        match kind {
            SceneKind::Cubes => self.render_hue_panels(frame, game, layout.panels),
            SceneKind::Orbs => self.render_tier_panel(frame, game, layout.panels),
        }
        self.render_messages(frame, game, layout.messages);
        self.render_help(frame, layout.help);
    }

    fn render_chamber(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .title(format!(" Chamber ({} left) ", game.remaining()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut sprites: HashMap<Position, (char, Color)> = HashMap::new();
        for (_, (pos, renderable)) in game.world().query::<(&Position, &Renderable)>().iter() {
            sprites.insert(*pos, (renderable.glyph, rgb(renderable.fg)));
        }

        let chamber = game.chamber();
        let blink_on = game.ambient_time() % 1.0 < 0.7;
        let mut lines: Vec<Line> = Vec::new();
        for y in 0..chamber.height() {
            let mut spans: Vec<Span> = Vec::new();
            for x in 0..chamber.width() {
                let pos = Position::new(x, y);
                let (glyph, mut style) = if !chamber.is_floor(pos) {
                    ('#', Style::default().fg(WALL_COLOR))
                } else if let Some((glyph, color)) = sprites.get(&pos) {
                    (*glyph, Style::default().fg(*color))
                } else {
                    ('·', Style::default().fg(FLOOR_COLOR))
                };
                if pos == game.cursor() && blink_on {
                    style = style.bg(CURSOR_BG).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!("{} ", glyph), style));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_hue_panels(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let panels = game.hue_panels();
        if panels.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> = panels
            .iter()
            .map(|_| Constraint::Ratio(1, panels.len() as u32))
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (panel, chunk) in panels.iter().zip(chunks.iter()) {
            let panel = panel.borrow();
            let title = format!(
                " {} cubes ({}/{}) ",
                panel.hue().name(),
                panel.active_count(),
                panel.slots().len()
            );
            frame.render_widget(HuePanelWidget::new(&panel).title(&title), *chunk);
        }
    }

    fn render_tier_panel(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let Some(panel) = game.tier_panel() else {
            return;
        };
        let panel = panel.borrow();
        let title = format!(
            " Collected orbs by tier ({}/{}) ",
            panel.active_count(),
            panel.slots().len()
        );
        frame.render_widget(TierPanelWidget::new(&panel).title(&title), area);
    }

    fn render_messages(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .title(" Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = inner.height as usize;
        let lines: Vec<Line> = game
            .messages()
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|message| {
                let color = match message.category {
                    MessageCategory::Item => Color::White,
                    MessageCategory::System => Color::Rgb(140, 140, 150),
                    MessageCategory::Warning => Color::Yellow,
                };
                Line::from(Span::styled(
                    message.text.clone(),
                    Style::default().fg(color),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new("arrows move   Enter/Space collect   click collects   q quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

use log::warn;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{FrameView, GRID_SIZE, MenuItem, Mode, Position};

/// Each cell is drawn two columns wide so the board looks square
const CELL_WIDTH: u16 = 2;
const BOARD_WIDTH: u16 = GRID_SIZE as u16 * CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = GRID_SIZE as u16 + 2;

const SNAKE_HEAD: (u8, u8, u8) = (0, 255, 255);
const SNAKE_BODY: (u8, u8, u8) = (0, 200, 0);
const FOOD: (u8, u8, u8) = (220, 0, 0);
const EMPTY: (u8, u8, u8) = (90, 90, 90);

pub struct Renderer {
    /// Set while the terminal is too small for the board, so the warning logs once
    too_small: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self { too_small: false }
    }

    pub fn render(&mut self, frame: &mut Frame, view: &FrameView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(), chunks[0]);
        frame.render_widget(self.render_controls(view.mode), chunks[2]);

        if !self.check_fits(chunks[1]) {
            frame.render_widget(self.render_too_small(), chunks[1]);
            return;
        }

        let board = centered(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        match view.mode {
            Mode::Menu => {
                frame.render_widget(self.render_menu(view.menu_selection), board);
            }
            Mode::Playing => {
                frame.render_widget(self.render_grid(view, 0), board);
            }
            Mode::GameOver { .. } => {
                frame.render_widget(self.render_grid(view, view.fade_alpha), board);
                let banner = centered(board, BOARD_WIDTH - 4, 3);
                frame.render_widget(Clear, banner);
                frame.render_widget(self.render_game_over(), banner);
            }
        }
    }

    fn check_fits(&mut self, area: Rect) -> bool {
        let fits = area.width >= BOARD_WIDTH && area.height >= BOARD_HEIGHT;
        if !fits && !self.too_small {
            warn!(
                "terminal area {}x{} is smaller than the {}x{} board",
                area.width, area.height, BOARD_WIDTH, BOARD_HEIGHT
            );
        }
        self.too_small = !fits;
        fits
    }

    fn render_grid(&self, view: &FrameView, fade_alpha: u8) -> Paragraph<'_> {
        let head = view.snake.front().copied();
        let mut lines = Vec::with_capacity(GRID_SIZE as usize);

        for y in 0..GRID_SIZE {
            let mut spans = Vec::with_capacity(GRID_SIZE as usize);

            for x in 0..GRID_SIZE {
                let pos = Position::new(x, y);

                let (symbol, rgb) = if Some(pos) == head {
                    ("■ ", SNAKE_HEAD)
                } else if view.snake.contains(&pos) {
                    ("□ ", SNAKE_BODY)
                } else if pos == view.food {
                    ("● ", FOOD)
                } else {
                    (". ", EMPTY)
                };

                spans.push(Span::styled(
                    symbol,
                    Style::default().fg(faded(rgb, fade_alpha)),
                ));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(faded((255, 255, 255), fade_alpha)))
                .title(" Snake "),
        )
    }

    fn render_menu(&self, selected: MenuItem) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Snake",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(""),
        ];

        for item in MenuItem::ALL {
            let style = if item == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            text.push(Line::from(Span::styled(item.label(), style)));
            text.push(Line::from(""));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        )
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "Game Over! Press Enter to restart.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_too_small(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
    }

    fn render_header(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "SNAKE",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
    }

    fn render_controls(&self, mode: Mode) -> Paragraph<'_> {
        let hint = match mode {
            Mode::Menu => " to choose | Enter to select | ",
            Mode::Playing => " or WASD to move | ",
            Mode::GameOver { .. } => " | Enter for menu | ",
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(hint),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Darken a colour towards black as `alpha` goes from 0 to 255
fn faded((r, g, b): (u8, u8, u8), alpha: u8) -> Color {
    let keep = 255 - u16::from(alpha);
    let scale = |c: u8| (u16::from(c) * keep / 255) as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

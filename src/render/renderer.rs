use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Direction, GameSession, GridCell, SegmentShape};
use crate::metrics::GameMetrics;

/// Draws a session into a terminal frame.
///
/// The grid is y-up, so rows are drawn from the top row (`height - 1`)
/// down to row 0.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        session: &GameSession,
        metrics: &GameMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(session, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if session.is_alive() {
            frame.render_widget(self.render_grid(session, paused), game_area);
        } else {
            frame.render_widget(self.render_game_over(session, metrics), game_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Title screen shown before the first game and after leaving one
    pub fn render_menu(&self, frame: &mut Frame, metrics: &GameMetrics) {
        let area = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Min(9),
                Constraint::Percentage(25),
            ])
            .split(frame.area())[1];

        let highlight = |text: &'static str, color: Color| {
            Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let gray = Style::default().fg(Color::Gray);

        let mut text = vec![
            Line::from(""),
            Line::from(highlight("S N A K E", Color::Green)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", gray),
                highlight("Enter", Color::Cyan),
                Span::styled(" to play or ", gray),
                highlight("Q", Color::Red),
                Span::styled(" to quit", gray),
            ]),
        ];

        if metrics.games_played > 0 {
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.high_score.to_string()),
                Span::raw("   "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.games_played.to_string()),
            ]));
        }

        let menu = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(menu, area);
    }

    fn render_grid(&self, session: &GameSession, paused: bool) -> Paragraph<'static> {
        let engine = session.engine();
        let grid = engine.grid();
        let body: HashMap<GridCell, SegmentShape> = engine
            .segments()
            .into_iter()
            .map(|view| (view.cell, view.shape))
            .collect();

        let body_style = Style::default().fg(Color::Green);
        let mut lines = Vec::with_capacity(grid.height() as usize);

        for y in (0..grid.height()).rev() {
            let mut spans = Vec::with_capacity(grid.width() as usize);

            for x in 0..grid.width() {
                let cell = GridCell::new(x, y);

                let span = if cell == engine.head() {
                    Span::styled(
                        head_glyph(engine.facing()),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if let Some(shape) = body.get(&cell) {
                    Span::styled(segment_glyph(*shape), body_style)
                } else if session.food() == Some(cell) {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    empty_cell(cell)
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, session: &GameSession, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                session.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(session.steps().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        session: &GameSession,
        metrics: &GameMetrics,
    ) -> Paragraph<'static> {
        let cause = match session.engine().collision() {
            Some(crate::game::CollisionType::Wall) => "You hit the wall",
            Some(crate::game::CollisionType::SelfCollision) => "You bit yourself",
            None => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.games_played.to_string()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart, ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "M",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for the menu or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let key = Style::default().fg(Color::Cyan);
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" / "),
            Span::styled("WASD", key),
            Span::raw(" / "),
            Span::styled("hjkl", key),
            Span::raw(" to move | "),
            Span::styled("Space", key),
            Span::raw(" pause | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
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

/// Background alternates shades in a checkerboard
fn empty_cell(cell: GridCell) -> Span<'static> {
    let color = if (cell.x + cell.y) % 2 == 0 {
        Color::DarkGray
    } else {
        Color::Black
    };
    Span::styled("· ", Style::default().fg(color))
}

fn head_glyph(facing: Direction) -> &'static str {
    match facing {
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
        Direction::Left => "◀ ",
        Direction::Right => "▶ ",
    }
}

/// Two-column glyph for a body segment; horizontal pieces reach into the
/// spacer column so the body reads as one line.
fn segment_glyph(shape: SegmentShape) -> &'static str {
    match shape {
        SegmentShape::Horizontal => "══",
        SegmentShape::Vertical => "║ ",
        SegmentShape::TopLeft => "╝ ",
        SegmentShape::TopRight => "╚═",
        SegmentShape::BottomLeft => "╗ ",
        SegmentShape::BottomRight => "╔═",
        SegmentShape::Tail(Direction::Left) => "╺═",
        SegmentShape::Tail(Direction::Right) => "╸ ",
        SegmentShape::Tail(Direction::Up) => "╽ ",
        SegmentShape::Tail(Direction::Down) => "╿ ",
    }
}

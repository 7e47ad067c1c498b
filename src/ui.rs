//! Terminal UI rendering with ratatui

use blockdrop::settings::Settings;
use blockdrop::{BOARD_HEIGHT, BOARD_WIDTH, Cell, Game, GameState, TetrominoType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const EMPTY: &str = "  ";

/// Total width needed: hold(12) + board(22) + next/score(14) = 48
const GAME_WIDTH: u16 = 48;
/// Total height needed: board(20) + 2 for borders
const GAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;

/// Render the start screen
pub fn render_start(frame: &mut Frame) {
    let area = center_rect(frame.area(), 40, 5);
    let lines = vec![
        Line::styled("BLOCKDROP", Style::default().fg(Color::Cyan).bold()),
        Line::raw(""),
        Line::styled("Press Space to Start", Style::default().fg(Color::White)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render a running, paused or finished game
pub fn render_game(frame: &mut Frame, game: &Game, settings: &Settings) {
    let area = frame.area();
    let (block_char, _) = settings.visual.block_chars();

    // Center the game area
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    // Create main layout: hold | board | next + score
    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),                          // Hold box
            Constraint::Length(BOARD_WIDTH as u16 * 2 + 2), // Board
            Constraint::Length(14),                          // Next queue + score
        ])
        .split(game_area);

    render_hold(frame, main_layout[0], game, block_char);
    render_board(frame, main_layout[1], game, settings);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(main_layout[2]);

    let preview: Vec<_> = game.preview().collect();
    render_next_queue(frame, right_layout[0], &preview, block_char);
    render_score(frame, right_layout[1], game);

    match game.state() {
        GameState::Paused => render_overlay(frame, area, "PAUSED", "Press P to resume"),
        GameState::GameOver => {
            let score = game.final_score().unwrap_or(game.score().points);
            let subtitle = format!("Final Score: {score}\nPress Space to Restart");
            render_overlay(frame, area, "GAME OVER", &subtitle);
        }
        GameState::Playing => {}
    }
}

/// Helper to center a rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_hold(frame: &mut Frame, area: Rect, game: &Game, block_char: &str) {
    let border = if game.can_hold() { Color::White } else { Color::DarkGray };
    let block = Block::default()
        .title(" HOLD ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(kind) = game.hold_piece() {
        frame.render_widget(Paragraph::new(mini_piece(kind, block_char)), inner);
    }
}

fn render_next_queue(frame: &mut Frame, area: Rect, queue: &[TetrominoType], block_char: &str) {
    let block = Block::default().title(" NEXT ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for &kind in queue {
        lines.extend(mini_piece(kind, block_char));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// A piece in its spawn orientation, without empty rows
fn mini_piece(kind: TetrominoType, block_char: &str) -> Vec<Line<'static>> {
    let shape = kind.shape();
    let style = Style::default().fg(kind.color());
    (0..shape.size())
        .filter(|&y| (0..shape.size()).any(|x| shape.is_filled(x, y)))
        .map(|y| {
            let spans: Vec<Span> = (0..shape.size())
                .map(|x| {
                    if shape.is_filled(x, y) {
                        Span::styled(block_char.to_string(), style)
                    } else {
                        Span::raw(EMPTY)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_board(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let (block_char, ghost_char) = settings.visual.block_chars();
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let piece = game.active();
    let active: Vec<(i32, i32)> = piece.cells().collect();
    let ghost: Vec<(i32, i32)> = if settings.visual.show_ghost && game.state() != GameState::GameOver {
        let ghost_row = game.ghost_row();
        piece
            .shape
            .cells()
            .map(|(x, y)| (piece.pos.col + x, ghost_row + y))
            .collect()
    } else {
        Vec::new()
    };

    let mut lines: Vec<Line> = Vec::with_capacity(BOARD_HEIGHT);
    for (row, cells) in game.board().rows().enumerate() {
        let row = row as i32;
        let spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let at = (col as i32, row);
                if active.contains(&at) {
                    Span::styled(block_char, Style::default().fg(piece.kind.color()))
                } else if let Cell::Filled(kind) = cell {
                    Span::styled(block_char, Style::default().fg(kind.color()))
                } else if ghost.contains(&at) {
                    Span::styled(ghost_char, Style::default().fg(piece.kind.color()).dim())
                } else {
                    Span::raw(EMPTY)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_score(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default().title(" SCORE ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let score = game.score();
    let lines = vec![
        Line::styled(score.points.to_string(), Style::default().fg(Color::Yellow).bold()),
        Line::styled(format!("Lines {}", score.lines), Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render a centered message box over the game
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let overlay = center_rect(area, 30, 7);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![Line::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow).bold(),
    )];
    lines.extend(subtitle.lines().map(|l| Line::raw(l.to_string())));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

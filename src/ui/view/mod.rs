//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme::Theme;

use super::state::{App, Focus, Outcome};
use components::{render_button, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::of(app.dark_mode);

    // 整屏背景
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // 卡片区域
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_card(frame, app, &theme, chunks[0]);
    render_help(frame, &theme, chunks[1]);
}

fn render_card(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let card_area = centered_rect(60, 90, area);

    let card = Block::default()
        .title("🧮 Price per Kg Calculator")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.surface))
        .border_style(Style::default().fg(theme.accent))
        .title_style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        );
    let inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 副标题
            Constraint::Length(3), // 重量输入
            Constraint::Length(3), // 价格输入
            Constraint::Length(3), // 按钮行
            Constraint::Length(4), // 结果/错误
            Constraint::Min(3),    // 示例
        ])
        .split(inner);

    let subtitle = Paragraph::new("Find out how much your product costs per kilogram")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.subtitle));
    frame.render_widget(subtitle, chunks[0]);

    render_input_widget(
        frame,
        chunks[1],
        "Product weight (g)",
        &app.weight_input,
        "e.g. 150",
        app.focus == Focus::Weight,
        theme,
    );

    render_input_widget(
        frame,
        chunks[2],
        "Total price (R$)",
        &app.price_input,
        "e.g. 6.00",
        app.focus == Focus::Price,
        theme,
    );

    render_buttons(frame, app, theme, chunks[3]);
    render_outcome(frame, app, theme, chunks[4]);
    render_example(frame, theme, chunks[5]);
}

fn render_buttons(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_button(
        frame,
        row[0],
        "Calculate",
        app.focus == Focus::Calculate,
        theme,
    );

    // 按钮显示将要切换到的模式
    let theme_label = if app.dark_mode {
        "☀ Light mode"
    } else {
        "☾ Dark mode"
    };
    render_button(frame, row[1], theme_label, app.focus == Focus::Theme, theme);
}

fn render_outcome(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (lines, color) = match app.outcome {
        Some(Outcome::Success(value)) => (
            vec![
                Line::from(Span::styled(
                    "Price per kilogram:",
                    Style::default().fg(theme.success),
                )),
                Line::from(Span::styled(
                    format!("R$ {:.2}/kg", value),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                )),
            ],
            theme.success,
        ),
        Some(Outcome::Failed(err)) => (
            vec![Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(theme.error),
            ))],
            theme.error,
        ),
        None => (
            vec![Line::from(Span::styled(
                "Fill in both fields and press Enter",
                Style::default().fg(theme.hint),
            ))],
            theme.hint,
        ),
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(panel, area);
}

fn render_example(frame: &mut Frame, theme: &Theme, area: Rect) {
    let example = Paragraph::new(vec![
        Line::from("Example: weight 150 g | price R$ 6.00"),
        Line::from("Result: R$ 40.00/kg"),
    ])
    .style(Style::default().fg(theme.hint))
    .block(
        Block::default()
            .title("Example")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.hint)),
    );
    frame.render_widget(example, area);
}

fn render_help(frame: &mut Frame, theme: &Theme, area: Rect) {
    let help = Paragraph::new(
        "[Tab/↓] Next  [Shift+Tab/↑] Prev  [Enter] Calculate  [Ctrl+T] Theme  [Esc] Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme.hint))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

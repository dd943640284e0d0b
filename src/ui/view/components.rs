//! 通用 UI 组件
//!
//! 输入框、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

/// [组件] 带标题和占位文本的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    theme: &Theme,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.label)
    };

    // 空值时显示灰色占位文本
    let (text, text_style) = if value.is_empty() {
        (placeholder, Style::default().fg(theme.placeholder))
    } else {
        (value, Style::default().fg(theme.input))
    };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_style(Style::default().fg(theme.label)),
    );
    frame.render_widget(input, area);
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, theme: &Theme) {
    let style = if is_focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.accent)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(button, area);
}

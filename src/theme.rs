//! 主题配色
//!
//! 深色/浅色两套调色板，仅影响显示，不影响计算语义。

use ratatui::style::Color;

/// 应用调色板
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub title: Color,
    pub subtitle: Color,
    pub label: Color,
    pub input: Color,
    pub placeholder: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub hint: Color,
}

impl Theme {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            title: Color::White,
            subtitle: Color::Rgb(209, 213, 219),
            label: Color::Rgb(209, 213, 219),
            input: Color::White,
            placeholder: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(96, 165, 250),
            success: Color::Rgb(134, 239, 172),
            error: Color::Rgb(248, 113, 113),
            hint: Color::Rgb(156, 163, 175),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(224, 231, 255),
            surface: Color::White,
            title: Color::Rgb(31, 41, 55),
            subtitle: Color::Rgb(75, 85, 99),
            label: Color::Rgb(55, 65, 81),
            input: Color::Rgb(17, 24, 39),
            placeholder: Color::Rgb(156, 163, 175),
            accent: Color::Rgb(37, 99, 235),
            success: Color::Rgb(22, 101, 52),
            error: Color::Rgb(185, 28, 28),
            hint: Color::Rgb(107, 114, 128),
        }
    }

    /// 根据开关取对应主题
    pub fn of(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}

//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 触发特定功能
    Activate,    // Enter：在输入框/计算按钮上触发计算，在主题按钮上切换主题
    ToggleTheme, // Ctrl+T 快捷键

    // 表单输入
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}

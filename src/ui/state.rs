//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::engine::CalcError;

/// 应用状态
pub struct App {
    pub weight_input: String,
    pub price_input: String,
    pub focus: Focus,
    pub outcome: Option<Outcome>, // 首次计算前为 None
    pub dark_mode: bool,
}

/// 焦点位置（Tab 循环顺序）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Weight,
    Price,
    Calculate,
    Theme,
}

/// 一次计算的结果：成功值与错误互斥
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Success(f64),
    Failed(CalcError),
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            weight_input: String::new(),
            price_input: String::new(),
            focus: Focus::Weight,
            outcome: None,
            dark_mode: false,
        }
    }

    /// 上次计算的数值结果
    pub fn result(&self) -> Option<f64> {
        match self.outcome {
            Some(Outcome::Success(value)) => Some(value),
            _ => None,
        }
    }

    /// 上次计算的错误信息
    pub fn error_message(&self) -> Option<String> {
        match self.outcome {
            Some(Outcome::Failed(err)) => Some(err.to_string()),
            _ => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

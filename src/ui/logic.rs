//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use crate::engine;

use super::actions::Action;
use super::state::{App, Focus, Outcome};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),

            // 两条触发路径（输入框上的 Enter 与计算按钮）走同一个计算入口
            Action::Activate => match self.focus {
                Focus::Weight | Focus::Price | Focus::Calculate => self.run_calculation(),
                Focus::Theme => self.toggle_theme(),
            },

            Action::ToggleTheme => self.toggle_theme(),

            // 编辑输入不清除旧的计算结果，保留到下次计算
            Action::Input(c) => {
                if let Some(field) = self.focused_input_mut() {
                    field.push(c);
                }
            }

            Action::DeleteChar => {
                if let Some(field) = self.focused_input_mut() {
                    field.pop();
                }
            }
        }
        false
    }

    // ============ 焦点导航相关 ============

    /// 焦点移到下一个控件
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Weight => Focus::Price,
            Focus::Price => Focus::Calculate,
            Focus::Calculate => Focus::Theme,
            Focus::Theme => Focus::Weight,
        };
    }

    /// 焦点移到上一个控件
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Weight => Focus::Theme,
            Focus::Price => Focus::Weight,
            Focus::Calculate => Focus::Price,
            Focus::Theme => Focus::Calculate,
        };
    }

    /// 当前持有焦点的文本输入框
    fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Weight => Some(&mut self.weight_input),
            Focus::Price => Some(&mut self.price_input),
            Focus::Calculate | Focus::Theme => None,
        }
    }

    // ============ 计算相关 ============

    /// 执行计算：覆盖旧结果，成功值与错误二选一
    pub fn run_calculation(&mut self) {
        self.outcome = Some(
            match engine::price_per_kg(&self.weight_input, &self.price_input) {
                Ok(value) => Outcome::Success(value),
                Err(err) => Outcome::Failed(err),
            },
        );
    }

    // ============ 主题相关 ============

    /// 切换深色/浅色主题，与计算状态无关
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CalcError;

    fn app_with(weight: &str, price: &str) -> App {
        let mut app = App::new();
        app.weight_input = weight.to_string();
        app.price_input = price.to_string();
        app
    }

    #[test]
    fn test_input_routes_to_focused_field() {
        let mut app = App::new();
        app.dispatch(Action::Input('1'));
        app.dispatch(Action::Input('5'));
        app.dispatch(Action::Input('0'));
        app.dispatch(Action::FocusNext);
        app.dispatch(Action::Input('6'));
        app.dispatch(Action::DeleteChar);
        app.dispatch(Action::Input('9'));

        assert_eq!(app.weight_input, "150");
        assert_eq!(app.price_input, "9");
    }

    #[test]
    fn test_outcome_mutual_exclusivity() {
        let mut app = app_with("150", "6.00");
        app.dispatch(Action::Activate);
        assert!(app.result().is_some());
        assert!(app.error_message().is_none());

        app.price_input = "0".to_string();
        app.dispatch(Action::Activate);
        assert!(app.result().is_none());
        assert_eq!(
            app.error_message().as_deref(),
            Some("Price must be greater than zero.")
        );
    }

    #[test]
    fn test_success_scenario() {
        let mut app = app_with("150", "6.00");
        app.run_calculation();
        let result = app.result().unwrap();
        assert_eq!(format!("{:.2}", result), "40.00");
    }

    #[test]
    fn test_failed_scenarios() {
        let cases = [
            ("", "6.00", CalcError::MissingField),
            ("abc", "6.00", CalcError::InvalidNumber),
            ("-5", "10", CalcError::NonPositiveWeight),
            ("150", "0", CalcError::NonPositivePrice),
        ];
        for (weight, price, expected) in cases {
            let mut app = app_with(weight, price);
            app.run_calculation();
            assert_eq!(app.outcome, Some(Outcome::Failed(expected)));
        }
    }

    #[test]
    fn test_editing_keeps_stale_outcome() {
        let mut app = app_with("150", "6.00");
        app.run_calculation();
        let stale = app.outcome;

        // 修改输入不触发重算，旧结果保留
        app.dispatch(Action::Input('9'));
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.outcome, stale);

        app.dispatch(Action::Activate);
        assert_eq!(app.outcome, stale); // 输入又改回 "150"
    }

    #[test]
    fn test_both_triggers_identical() {
        let mut via_field = app_with("150", "6.00");
        via_field.focus = Focus::Weight;
        via_field.dispatch(Action::Activate);

        let mut via_button = app_with("150", "6.00");
        via_button.focus = Focus::Calculate;
        via_button.dispatch(Action::Activate);

        assert_eq!(via_field.outcome, via_button.outcome);
    }

    #[test]
    fn test_theme_independent_of_calculation() {
        let mut app = app_with("150", "6.00");
        app.run_calculation();
        let before = app.outcome;

        app.dispatch(Action::ToggleTheme);
        assert!(app.dark_mode);
        assert_eq!(app.outcome, before);
        assert_eq!(app.weight_input, "150");

        app.focus = Focus::Theme;
        app.dispatch(Action::Activate);
        assert!(!app.dark_mode);
        assert_eq!(app.outcome, before);
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = App::new();
        assert_eq!(app.focus, Focus::Weight);
        for expected in [Focus::Price, Focus::Calculate, Focus::Theme, Focus::Weight] {
            app.dispatch(Action::FocusNext);
            assert_eq!(app.focus, expected);
        }
        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, Focus::Theme);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::Input('1')));
    }
}

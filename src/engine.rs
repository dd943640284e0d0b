//! 计算引擎
//!
//! 纯函数：校验两个原始文本输入，计算每公斤价格。
//! 不依赖也不修改任何外部状态。

use thiserror::Error;

/// 校验失败类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Please fill in both fields.")]
    MissingField,
    #[error("Please enter valid numeric values.")]
    InvalidNumber,
    #[error("Weight must be greater than zero.")]
    NonPositiveWeight,
    #[error("Price must be greater than zero.")]
    NonPositivePrice,
}

/// 前缀宽松解析
///
/// 取最长的可解析为有限浮点数的前缀（"150abc" -> 150.0），
/// 没有任何数字前缀时返回 None（"abc" -> None）。
pub fn lenient_parse(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let mut parsed = None;

    for end in s.char_indices().map(|(i, c)| i + c.len_utf8()) {
        if let Ok(value) = s[..end].parse::<f64>() {
            // 排除 "NaN"/"inf" 这类非数字形式的前缀
            if value.is_finite() {
                parsed = Some(value);
            }
        }
    }

    parsed
}

/// 计算每公斤价格
///
/// 校验顺序（短路，第一个失败即返回）：
/// 1. 任一输入为空 -> MissingField
/// 2. 任一输入无法解析 -> InvalidNumber
/// 3. 重量 <= 0 -> NonPositiveWeight
/// 4. 价格 <= 0 -> NonPositivePrice
pub fn price_per_kg(weight_text: &str, price_text: &str) -> Result<f64, CalcError> {
    if weight_text.is_empty() || price_text.is_empty() {
        return Err(CalcError::MissingField);
    }

    let weight = lenient_parse(weight_text);
    let price = lenient_parse(price_text);

    let (Some(weight), Some(price)) = (weight, price) else {
        return Err(CalcError::InvalidNumber);
    };

    if weight <= 0.0 {
        return Err(CalcError::NonPositiveWeight);
    }

    if price <= 0.0 {
        return Err(CalcError::NonPositivePrice);
    }

    let weight_kg = weight / 1000.0;
    Ok(price / weight_kg)
}

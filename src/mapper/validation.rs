//! 定义校验工具
//!
//! 提供映射器定义 ID 和接口名的校验

use crate::error::{FactoryError, Result};

/// 定义 ID 验证器
pub struct BeanIdValidator;

impl BeanIdValidator {
    /// 验证定义 ID 是否合法
    ///
    /// # 规则
    /// - 长度：1-64字符
    /// - 只允许：字母、数字、下划线、连字符
    /// - 不能以连字符或下划线开头或结尾
    /// - 不能包含连续的特殊字符
    pub fn validate(id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(FactoryError::Config("定义ID不能为空".to_string()));
        }

        if id.len() > 64 {
            return Err(FactoryError::Config(
                "定义ID长度不能超过64字符".to_string(),
            ));
        }

        if let Some(c) = id
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
        {
            return Err(FactoryError::Config(format!(
                "定义ID包含非法字符 '{}', 只允许字母、数字、下划线和连字符",
                c
            )));
        }

        if id.starts_with(['-', '_']) || id.ends_with(['-', '_']) {
            return Err(FactoryError::Config(format!(
                "定义ID不能以连字符或下划线开头或结尾: {}",
                id
            )));
        }

        if id.contains("--") || id.contains("__") || id.contains("-_") || id.contains("_-") {
            return Err(FactoryError::Config(format!(
                "定义ID不能包含连续的特殊字符: {}",
                id
            )));
        }

        Ok(())
    }
}

/// 接口名验证器
pub struct InterfaceNameValidator;

impl InterfaceNameValidator {
    /// 接口名为 Rust 路径：以 `::` 分隔的标识符
    pub fn validate(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FactoryError::Config("映射器接口名不能为空".to_string()));
        }

        for segment in name.split("::") {
            let mut chars = segment.chars();
            let valid = match chars.next() {
                Some(first) => {
                    (first.is_alphabetic() || first == '_')
                        && chars.all(|c| c.is_alphanumeric() || c == '_')
                }
                None => false,
            };
            if !valid {
                return Err(FactoryError::Config(format!(
                    "映射器接口名无效: {}",
                    name
                )));
            }
        }

        Ok(())
    }
}

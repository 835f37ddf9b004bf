//! 错误处理模块

use crate::session::SessionError;
use miette::Diagnostic;
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum FactoryError {
    #[error("缺少必需属性: '{0}'")]
    #[diagnostic(code(mapper_factory::missing_property))]
    MissingProperty(&'static str),

    #[error("配置错误: {0}")]
    #[diagnostic(code(mapper_factory::config))]
    Config(String),

    /// 协作者错误原样透传
    #[error(transparent)]
    #[diagnostic(transparent)]
    Session(#[from] SessionError),

    #[error("文件IO错误: {0}")]
    #[diagnostic(code(mapper_factory::io))]
    Io(#[from] std::io::Error),

    #[error("TOML 解析错误: {0}")]
    #[diagnostic(code(mapper_factory::toml))]
    Toml(#[from] toml::de::Error),

    #[error("JSON序列化错误: {0}")]
    #[diagnostic(code(mapper_factory::json))]
    Json(#[from] serde_json::Error),
}

impl FactoryError {
    /// 报告错误，支持详细/安静模式
    pub fn report(&self, verbose: bool) {
        eprintln!("错误: {}", self);
        if !verbose {
            return;
        }
        let mut current = self.source();
        while let Some(next) = current {
            eprintln!("  └─ 原因: {}", next);
            current = next.source();
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, FactoryError>;

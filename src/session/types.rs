//! 会话层类型定义
//!
//! 定义数据源、会话、会话工厂的接口契约以及会话层错误类型

use crate::session::configuration::Configuration;
use miette::Diagnostic;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

/// 会话层错误类型
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("缺少必需属性: '{0}'")]
    #[diagnostic(code(session::missing_property))]
    MissingProperty(&'static str),

    #[error("映射器已在注册表中: {0}")]
    #[diagnostic(code(session::mapper_already_registered))]
    MapperAlreadyRegistered(String),

    #[error("映射器未在注册表中: {0}")]
    #[diagnostic(
        code(session::mapper_not_registered),
        help("启用 add_to_config 或在配置中手动注册该映射器")
    )]
    MapperNotRegistered(String),

    #[error("语句执行失败: {0}")]
    #[diagnostic(code(session::execution))]
    Execution(String),
}

/// 数据源 Trait
///
/// 会话模板只需要识别数据源，连接的获取由会话工厂负责
pub trait DataSource: Debug + Send + Sync {
    /// 数据源标识
    fn id(&self) -> &str;
}

/// 持久化会话 Trait
pub trait SqlSession: Send {
    /// 查询单条记录
    fn select_one(&mut self, statement: &str, parameter: &Value) -> Result<Option<Value>>;

    /// 查询多条记录
    fn select_list(&mut self, statement: &str, parameter: &Value) -> Result<Vec<Value>>;

    /// 插入，返回影响行数
    fn insert(&mut self, statement: &str, parameter: &Value) -> Result<u64>;

    /// 更新，返回影响行数
    fn update(&mut self, statement: &str, parameter: &Value) -> Result<u64>;

    /// 删除，返回影响行数
    fn delete(&mut self, statement: &str, parameter: &Value) -> Result<u64>;

    /// 提交事务
    fn commit(&mut self) -> Result<()>;

    /// 回滚事务
    fn rollback(&mut self) -> Result<()>;

    /// 关闭会话
    fn close(&mut self);
}

/// 会话工厂 Trait
pub trait SqlSessionFactory: Send + Sync {
    /// 打开新会话；传入数据源时在该数据源上打开
    fn open_session(&self, data_source: Option<&dyn DataSource>) -> Result<Box<dyn SqlSession>>;

    /// 获取配置注册表
    fn configuration(&self) -> &Configuration;
}

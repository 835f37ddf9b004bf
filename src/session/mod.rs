//! 会话层
//!
//! 会话模板、配置注册表以及会话工厂的接口契约。
//! 具体的持久化引擎由使用方提供。

pub mod configuration;
pub mod template;
pub mod types;

pub use configuration::{Configuration, Environment};
pub use template::SqlSessionTemplate;
pub use types::{DataSource, SessionError, SqlSession, SqlSessionFactory};

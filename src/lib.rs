//! mapper-factory - 映射器代理工厂
//!
//! 校验配置，把映射器接口注册到持久化配置，并按需生成映射器代理

// 错误类型
pub mod error;

// 会话层
pub mod session;

// 映射器工厂
pub mod mapper;

// CLI 定义
pub mod cli;

#[cfg(test)]
mod test_utils;

// 重新导出常用类型
pub use error::{FactoryError, Result};
pub use mapper::{
    FactoryBean, InitializingBean, Mapper, MapperDescriptor, MapperFactory, MapperFactoryBuilder,
    MapperInterface,
};
pub use session::{
    Configuration, DataSource, Environment, SessionError, SqlSession, SqlSessionFactory,
    SqlSessionTemplate,
};

//! 映射器工厂
//!
//! 让容器能够构造并注入映射器代理。
//!
//! # 模块结构
//!
//! - `types.rs` - 映射器 Trait 与接口描述符
//! - `lifecycle.rs` - 容器生命周期接口
//! - `factory.rs` - 映射器工厂
//! - `builder.rs` - 工厂构建器
//! - `definition.rs` - TOML 映射器定义
//! - `validation.rs` - 定义校验

pub mod builder;
pub mod definition;
pub mod factory;
pub mod lifecycle;
pub mod types;
pub mod validation;

pub use builder::MapperFactoryBuilder;
pub use definition::{MapperDefaults, MapperDefinition, MapperDefinitions, SessionFactories};
pub use factory::{MapperFactory, TemplateSource};
pub use lifecycle::{FactoryBean, InitializingBean};
pub use types::{Mapper, MapperDescriptor, MapperInterface};
pub use validation::{BeanIdValidator, InterfaceNameValidator};

//! 容器生命周期接口
//!
//! 容器先调用属性设置方法，再调用一次 `after_properties_set`，
//! 之后可多次调用工厂方法。

use crate::error::Result;
use crate::mapper::types::MapperDescriptor;

/// 初始化钩子
pub trait InitializingBean {
    /// 所有属性设置完成后调用一次
    fn after_properties_set(&mut self) -> Result<()>;
}

/// 对象工厂
pub trait FactoryBean {
    type Object;

    /// 生成对象
    fn get_object(&self) -> Result<Self::Object>;

    /// 生成对象的类型，用于按类型装配
    fn object_type(&self) -> Option<MapperDescriptor>;

    /// 生成的对象是否为单例
    fn is_singleton(&self) -> bool {
        true
    }
}

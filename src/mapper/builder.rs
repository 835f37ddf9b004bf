//! 映射器工厂构建器
//!
//! 不依赖容器时的用法：收集配置后调用一次 `build`。
//! 设置按调用顺序生效，外部模板的语义与 [`MapperFactory`] 的设置方法一致。

use crate::error::Result;
use crate::mapper::factory::MapperFactory;
use crate::mapper::lifecycle::InitializingBean;
use crate::mapper::types::{Mapper, MapperInterface};
use crate::session::{DataSource, SqlSessionFactory, SqlSessionTemplate};
use std::sync::Arc;

/// 映射器工厂构建器
pub struct MapperFactoryBuilder<M> {
    factory: MapperFactory<M>,
}

impl<M: Mapper> MapperFactoryBuilder<M> {
    pub fn new() -> Self {
        Self {
            factory: MapperFactory::new(),
        }
    }

    /// 使用 `M` 作为映射器接口
    pub fn mapper_interface(mut self) -> Self {
        self.factory.set_mapper_interface(MapperInterface::new());
        self
    }

    pub fn data_source(mut self, data_source: Arc<dyn DataSource>) -> Self {
        self.factory.set_data_source(data_source);
        self
    }

    pub fn sql_session_factory(mut self, factory: Arc<dyn SqlSessionFactory>) -> Self {
        self.factory.set_sql_session_factory(factory);
        self
    }

    pub fn sql_session_template(mut self, template: Arc<SqlSessionTemplate>) -> Self {
        self.factory.set_sql_session_template(template);
        self
    }

    pub fn add_to_config(mut self, add_to_config: bool) -> Self {
        self.factory.set_add_to_config(add_to_config);
        self
    }

    /// 校验并完成注册
    pub fn build(mut self) -> Result<MapperFactory<M>> {
        self.factory.after_properties_set()?;
        Ok(self.factory)
    }
}

impl<M: Mapper> Default for MapperFactoryBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mapper> MapperFactory<M> {
    pub fn builder() -> MapperFactoryBuilder<M> {
        MapperFactoryBuilder::new()
    }
}

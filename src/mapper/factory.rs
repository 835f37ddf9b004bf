//! 映射器工厂
//!
//! 容器通过它获得映射器代理：校验配置，按需把映射器接口注册到
//! 会话工厂的配置注册表，然后由会话模板生成代理。
//!
//! # 示例
//!
//! ```ignore
//! let mut factory = MapperFactory::<UserMapper>::new();
//! factory.set_sql_session_factory(session_factory);
//! factory.set_mapper_interface(MapperInterface::new());
//! factory.after_properties_set()?;
//!
//! let mapper = factory.get_object()?;
//! ```

use crate::error::{FactoryError, Result};
use crate::mapper::lifecycle::{FactoryBean, InitializingBean};
use crate::mapper::types::{Mapper, MapperDescriptor, MapperInterface};
use crate::session::{DataSource, SqlSessionFactory, SqlSessionTemplate};
use std::sync::Arc;
use tracing::{debug, info};

/// 会话模板来源
///
/// 一旦设置外部模板就不会再回到 `Owned`
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// 工厂自建的模板，可继续配置
    Owned(SqlSessionTemplate),
    /// 外部提供的模板，工厂不再修改它
    External(Arc<SqlSessionTemplate>),
}

impl TemplateSource {
    pub fn template(&self) -> &SqlSessionTemplate {
        match self {
            TemplateSource::Owned(template) => template,
            TemplateSource::External(template) => template.as_ref(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, TemplateSource::External(_))
    }
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Owned(SqlSessionTemplate::new())
    }
}

/// 映射器工厂
#[derive(Debug)]
pub struct MapperFactory<M> {
    mapper_interface: Option<MapperInterface<M>>,
    add_to_config: bool,
    template: TemplateSource,
}

impl<M: Mapper> Default for MapperFactory<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mapper> MapperFactory<M> {
    pub fn new() -> Self {
        Self {
            mapper_interface: None,
            add_to_config: true,
            template: TemplateSource::default(),
        }
    }

    /// 设置数据源；已使用外部模板时不做任何事
    pub fn set_data_source(&mut self, data_source: Arc<dyn DataSource>) {
        match &mut self.template {
            TemplateSource::Owned(template) => template.set_data_source(data_source),
            TemplateSource::External(_) => {
                debug!(data_source = data_source.id(), "已使用外部会话模板，忽略数据源设置");
            }
        }
    }

    /// 设置会话工厂；已使用外部模板时不做任何事
    pub fn set_sql_session_factory(&mut self, factory: Arc<dyn SqlSessionFactory>) {
        match &mut self.template {
            TemplateSource::Owned(template) => template.set_sql_session_factory(factory),
            TemplateSource::External(_) => {
                debug!("已使用外部会话模板，忽略会话工厂设置");
            }
        }
    }

    /// 显式设置会话模板，之后数据源和会话工厂的设置都会失效
    pub fn set_sql_session_template(&mut self, template: Arc<SqlSessionTemplate>) {
        self.template = TemplateSource::External(template);
    }

    pub fn set_mapper_interface(&mut self, mapper_interface: MapperInterface<M>) {
        self.mapper_interface = Some(mapper_interface);
    }

    /// 是否在初始化时把映射器注册到配置（默认 true）
    pub fn set_add_to_config(&mut self, add_to_config: bool) {
        self.add_to_config = add_to_config;
    }

    pub fn add_to_config(&self) -> bool {
        self.add_to_config
    }

    pub fn uses_external_template(&self) -> bool {
        self.template.is_external()
    }

    pub fn sql_session_template(&self) -> &SqlSessionTemplate {
        self.template.template()
    }
}

impl<M: Mapper> InitializingBean for MapperFactory<M> {
    fn after_properties_set(&mut self) -> Result<()> {
        let descriptor = self
            .mapper_interface
            .as_ref()
            .map(MapperInterface::descriptor)
            .ok_or(FactoryError::MissingProperty("mapperInterface"))?;

        let template = self.template.template();
        template.after_properties_set()?;

        let session_factory = template.sql_session_factory()?;
        let configuration = session_factory.configuration();
        if !self.add_to_config {
            debug!(mapper = %descriptor, "add_to_config 已关闭，跳过注册");
        } else if configuration.add_mapper_if_absent(descriptor) {
            info!(mapper = %descriptor, "映射器已注册");
        } else {
            debug!(mapper = %descriptor, "映射器已注册，跳过");
        }

        Ok(())
    }
}

impl<M: Mapper> FactoryBean for MapperFactory<M> {
    type Object = M;

    fn get_object(&self) -> Result<M> {
        let mapper_interface = self
            .mapper_interface
            .ok_or(FactoryError::MissingProperty("mapperInterface"))?;
        Ok(self.template.template().get_mapper(mapper_interface)?)
    }

    fn object_type(&self) -> Option<MapperDescriptor> {
        self.mapper_interface.as_ref().map(MapperInterface::descriptor)
    }
}

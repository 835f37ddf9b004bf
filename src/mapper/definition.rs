//! 映射器定义
//!
//! 以 TOML 声明映射器：`[defaults]` 提供共享设置，
//! 每个 `[[mappers]]` 条目给出 ID 和映射器接口名。
//!
//! ```toml
//! [defaults]
//! add_to_config = true
//! session_factory = "primary"
//!
//! [[mappers]]
//! id = "user-mapper"
//! interface = "UserMapper"
//!
//! [[mappers]]
//! id = "audit-mapper"
//! interface = "AuditMapper"
//! add_to_config = false
//! session_factory = "audit"
//! ```
//!
//! 会话工厂以名称引用，由调用方通过 [`SessionFactories`] 提供。

use crate::error::{FactoryError, Result};
use crate::mapper::factory::MapperFactory;
use crate::mapper::types::{Mapper, MapperDescriptor, MapperInterface};
use crate::mapper::validation::{BeanIdValidator, InterfaceNameValidator};
use crate::session::SqlSessionFactory;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

fn default_true() -> bool {
    true
}

/// 共享设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperDefaults {
    /// 初始化时是否注册到配置
    #[serde(default = "default_true")]
    pub add_to_config: bool,
    /// 共享的会话工厂名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_factory: Option<String>,
}

impl Default for MapperDefaults {
    fn default() -> Self {
        Self {
            add_to_config: true,
            session_factory: None,
        }
    }
}

/// 按名称提供会话工厂
#[derive(Clone, Default)]
pub struct SessionFactories {
    factories: HashMap<String, Arc<dyn SqlSessionFactory>>,
}

impl SessionFactories {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册会话工厂，同名覆盖
    pub fn register(&mut self, name: impl Into<String>, factory: Arc<dyn SqlSessionFactory>) {
        self.factories.insert(name.into(), factory);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SqlSessionFactory>> {
        self.factories.get(name).cloned()
    }
}

/// 单个映射器定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperDefinition {
    /// 定义 ID (唯一)
    pub id: String,
    /// 映射器接口名，可写完整路径或类型名
    pub interface: String,
    /// 覆盖 `defaults.add_to_config`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_to_config: Option<bool>,
    /// 覆盖 `defaults.session_factory`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_factory: Option<String>,
}

impl MapperDefinition {
    /// 检查接口名是否指向 `M`
    pub fn matches<M: Mapper>(&self) -> bool {
        let descriptor = MapperDescriptor::of::<M>();
        let name = descriptor.name();
        self.interface == name
            || self.interface == descriptor.short_name()
            || name.ends_with(&format!("::{}", self.interface))
    }

    /// 把定义应用到工厂
    ///
    /// 引用的会话工厂必须在 `factories` 中，否则工厂保持不变
    pub fn apply<M: Mapper>(
        &self,
        defaults: &MapperDefaults,
        factories: &SessionFactories,
        factory: &mut MapperFactory<M>,
    ) -> Result<()> {
        if !self.matches::<M>() {
            return Err(FactoryError::Config(format!(
                "定义 '{}' 的接口 {} 与 {} 不匹配",
                self.id,
                self.interface,
                MapperDescriptor::of::<M>()
            )));
        }
        let session_factory = match self
            .session_factory
            .as_deref()
            .or(defaults.session_factory.as_deref())
        {
            Some(name) => Some(factories.get(name).ok_or_else(|| {
                FactoryError::Config(format!(
                    "定义 '{}' 引用的会话工厂未找到: {}",
                    self.id, name
                ))
            })?),
            None => None,
        };

        factory.set_mapper_interface(MapperInterface::new());
        factory.set_add_to_config(self.add_to_config.unwrap_or(defaults.add_to_config));
        if let Some(session_factory) = session_factory {
            factory.set_sql_session_factory(session_factory);
        }
        debug!(id = %self.id, interface = %self.interface, "映射器定义已应用");
        Ok(())
    }
}

/// 映射器定义集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperDefinitions {
    #[serde(default)]
    pub defaults: MapperDefaults,
    #[serde(default)]
    pub mappers: Vec<MapperDefinition>,
}

impl MapperDefinitions {
    /// 解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let definitions: MapperDefinitions = toml::from_str(content)?;
        debug!(mappers = definitions.mappers.len(), "映射器定义已解析");
        definitions.validate()?;
        Ok(definitions)
    }

    /// 从文件加载，文件不存在时返回空集合
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "映射器定义文件不存在，使用空集合");
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "加载映射器定义文件");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 校验 ID 和接口名，检查重复 ID
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.defaults.session_factory {
            BeanIdValidator::validate(name)?;
        }

        let mut ids = HashSet::new();
        for definition in &self.mappers {
            BeanIdValidator::validate(&definition.id)?;
            InterfaceNameValidator::validate(&definition.interface)?;
            if let Some(name) = &definition.session_factory {
                BeanIdValidator::validate(name)?;
            }
            if !ids.insert(definition.id.as_str()) {
                return Err(FactoryError::Config(format!(
                    "检测到重复的定义ID: {}",
                    definition.id
                )));
            }
        }
        debug!(mappers = self.mappers.len(), "映射器定义校验通过");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&MapperDefinition> {
        self.mappers.iter().find(|definition| definition.id == id)
    }

    /// 定义实际使用的 add_to_config
    pub fn effective_add_to_config(&self, definition: &MapperDefinition) -> bool {
        definition
            .add_to_config
            .unwrap_or(self.defaults.add_to_config)
    }

    /// 定义实际使用的会话工厂名称
    pub fn effective_session_factory<'a>(
        &'a self,
        definition: &'a MapperDefinition,
    ) -> Option<&'a str> {
        definition
            .session_factory
            .as_deref()
            .or(self.defaults.session_factory.as_deref())
    }

    /// 按 ID 把定义应用到工厂
    pub fn apply<M: Mapper>(
        &self,
        id: &str,
        factories: &SessionFactories,
        factory: &mut MapperFactory<M>,
    ) -> Result<()> {
        let definition = self
            .get(id)
            .ok_or_else(|| FactoryError::Config(format!("定义未找到: {}", id)))?;
        definition.apply(&self.defaults, factories, factory)
    }
}

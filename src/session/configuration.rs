//! 持久化配置注册表
//!
//! 记录已注册的映射器接口，并负责把映射器接口绑定到会话模板

use crate::mapper::types::{Mapper, MapperDescriptor, MapperInterface};
use crate::session::template::SqlSessionTemplate;
use crate::session::types::{DataSource, Result, SessionError};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// 运行环境
#[derive(Debug, Clone)]
pub struct Environment {
    /// 环境标识
    pub id: String,
    /// 环境默认数据源
    pub data_source: Option<Arc<dyn DataSource>>,
}

impl Environment {
    pub fn new(id: impl Into<String>, data_source: Option<Arc<dyn DataSource>>) -> Self {
        Self {
            id: id.into(),
            data_source,
        }
    }
}

/// 配置注册表
///
/// 单个操作在锁内完成；先 `has_mapper` 再 `add_mapper` 不是原子的，
/// 并发注册应使用 `add_mapper_if_absent`
#[derive(Debug, Default)]
pub struct Configuration {
    environment: Option<Environment>,
    mappers: RwLock<HashSet<MapperDescriptor>>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带运行环境的配置
    pub fn with_environment(environment: Environment) -> Self {
        Self {
            environment: Some(environment),
            mappers: RwLock::new(HashSet::new()),
        }
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    /// 检查映射器是否已注册
    pub fn has_mapper(&self, descriptor: &MapperDescriptor) -> bool {
        self.mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(descriptor)
    }

    /// 注册映射器，重复注册返回错误
    pub fn add_mapper(&self, descriptor: MapperDescriptor) -> Result<()> {
        let mut mappers = self.mappers.write().unwrap_or_else(PoisonError::into_inner);
        if !mappers.insert(descriptor) {
            return Err(SessionError::MapperAlreadyRegistered(
                descriptor.name().to_string(),
            ));
        }
        debug!(mapper = %descriptor, "映射器已加入注册表");
        Ok(())
    }

    /// 未注册时注册，检查和插入在同一把写锁内完成
    ///
    /// 返回是否发生了注册
    pub fn add_mapper_if_absent(&self, descriptor: MapperDescriptor) -> bool {
        let inserted = self
            .mappers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(descriptor);
        if inserted {
            debug!(mapper = %descriptor, "映射器已加入注册表");
        }
        inserted
    }

    /// 把已注册的映射器绑定到会话模板
    pub fn get_mapper<M: Mapper>(
        &self,
        mapper_interface: MapperInterface<M>,
        template: SqlSessionTemplate,
    ) -> Result<M> {
        let descriptor = mapper_interface.descriptor();
        if !self.has_mapper(&descriptor) {
            return Err(SessionError::MapperNotRegistered(
                descriptor.name().to_string(),
            ));
        }
        Ok(M::bind(template))
    }

    /// 已注册的映射器（按名称排序）
    pub fn mappers(&self) -> Vec<MapperDescriptor> {
        let mut list: Vec<MapperDescriptor> = self
            .mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .copied()
            .collect();
        list.sort_by(|a, b| a.name().cmp(b.name()));
        list
    }

    pub fn mapper_count(&self) -> usize {
        self.mappers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

//! 映射器类型定义
//!
//! 映射器接口在 Rust 中由实现 [`Mapper`] 的类型表示，
//! 注册表通过 [`MapperDescriptor`] 识别它们。

use crate::session::template::SqlSessionTemplate;
use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// 映射器 Trait
///
/// `bind` 生成映射器代理，代理的数据访问操作全部转发给会话模板。
///
/// # 示例
///
/// ```
/// use mapper_factory::{Mapper, SqlSessionTemplate};
///
/// struct UserMapper {
///     template: SqlSessionTemplate,
/// }
///
/// impl Mapper for UserMapper {
///     fn bind(template: SqlSessionTemplate) -> Self {
///         Self { template }
///     }
/// }
/// ```
pub trait Mapper: Send + Sync + Sized + 'static {
    fn bind(template: SqlSessionTemplate) -> Self;
}

/// 映射器接口描述符（不透明的类型标识）
#[derive(Clone, Copy)]
pub struct MapperDescriptor {
    type_id: TypeId,
    name: &'static str,
}

impl MapperDescriptor {
    pub fn of<M: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            name: type_name::<M>(),
        }
    }

    /// 完整类型名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 去掉模块路径的类型名
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl PartialEq for MapperDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for MapperDescriptor {}

impl Hash for MapperDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for MapperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MapperDescriptor({})", self.name)
    }
}

impl fmt::Display for MapperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 带类型的映射器接口
pub struct MapperInterface<M> {
    descriptor: MapperDescriptor,
    _marker: PhantomData<fn() -> M>,
}

impl<M: Mapper> MapperInterface<M> {
    pub fn new() -> Self {
        Self {
            descriptor: MapperDescriptor::of::<M>(),
            _marker: PhantomData,
        }
    }
}

impl<M> MapperInterface<M> {
    pub fn descriptor(&self) -> MapperDescriptor {
        self.descriptor
    }
}

impl<M: Mapper> Default for MapperInterface<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for MapperInterface<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for MapperInterface<M> {}

impl<M> fmt::Debug for MapperInterface<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MapperInterface({})", self.descriptor.name)
    }
}

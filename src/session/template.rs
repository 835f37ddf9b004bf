//! 会话模板
//!
//! 每次操作从会话工厂打开会话、执行回调并关闭会话。
//! 映射器代理持有模板的克隆，克隆之间共享同一组协作者。

use crate::mapper::types::{Mapper, MapperInterface};
use crate::session::types::{DataSource, Result, SessionError, SqlSession, SqlSessionFactory};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// 会话模板
#[derive(Clone, Default)]
pub struct SqlSessionTemplate {
    data_source: Option<Arc<dyn DataSource>>,
    session_factory: Option<Arc<dyn SqlSessionFactory>>,
}

impl fmt::Debug for SqlSessionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlSessionTemplate")
            .field("data_source", &self.data_source)
            .field("session_factory", &self.session_factory.is_some())
            .finish()
    }
}

impl SqlSessionTemplate {
    /// 创建未配置的模板
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定会话工厂创建模板
    pub fn with_factory(factory: Arc<dyn SqlSessionFactory>) -> Self {
        Self {
            data_source: None,
            session_factory: Some(factory),
        }
    }

    /// 设置数据源（可选，默认使用会话工厂运行环境的数据源）
    pub fn set_data_source(&mut self, data_source: Arc<dyn DataSource>) {
        self.data_source = Some(data_source);
    }

    /// 设置会话工厂
    pub fn set_sql_session_factory(&mut self, factory: Arc<dyn SqlSessionFactory>) {
        self.session_factory = Some(factory);
    }

    /// 显式设置的数据源
    pub fn data_source(&self) -> Option<&Arc<dyn DataSource>> {
        self.data_source.as_ref()
    }

    /// 实际使用的数据源：显式设置优先，其次是会话工厂的运行环境
    pub fn effective_data_source(&self) -> Option<Arc<dyn DataSource>> {
        self.data_source.clone().or_else(|| {
            self.session_factory.as_ref().and_then(|factory| {
                factory
                    .configuration()
                    .environment()
                    .and_then(|env| env.data_source.clone())
            })
        })
    }

    /// 显式设置的会话工厂
    pub fn session_factory(&self) -> Option<&Arc<dyn SqlSessionFactory>> {
        self.session_factory.as_ref()
    }

    /// 获取会话工厂，未设置时报错
    pub fn sql_session_factory(&self) -> Result<Arc<dyn SqlSessionFactory>> {
        self.session_factory
            .clone()
            .ok_or(SessionError::MissingProperty("sqlSessionFactory"))
    }

    /// 初始化后校验
    pub fn after_properties_set(&self) -> Result<()> {
        if self.session_factory.is_none() {
            return Err(SessionError::MissingProperty("sqlSessionFactory"));
        }
        Ok(())
    }

    /// 解析映射器代理
    pub fn get_mapper<M: Mapper>(&self, mapper_interface: MapperInterface<M>) -> Result<M> {
        let factory = self.sql_session_factory()?;
        factory
            .configuration()
            .get_mapper(mapper_interface, self.clone())
    }

    /// 在新会话中执行回调，结束后关闭会话
    pub fn execute<T, F>(&self, action: F) -> Result<T>
    where
        F: FnOnce(&mut dyn SqlSession) -> Result<T>,
    {
        let factory = self.sql_session_factory()?;
        let data_source = self.effective_data_source();
        let mut session = factory.open_session(data_source.as_deref())?;
        let result = action(session.as_mut());
        session.close();
        result
    }

    pub fn select_one(&self, statement: &str, parameter: &Value) -> Result<Option<Value>> {
        self.execute(|session| session.select_one(statement, parameter))
    }

    pub fn select_list(&self, statement: &str, parameter: &Value) -> Result<Vec<Value>> {
        self.execute(|session| session.select_list(statement, parameter))
    }

    pub fn insert(&self, statement: &str, parameter: &Value) -> Result<u64> {
        self.execute(|session| write(session, |s| s.insert(statement, parameter)))
    }

    pub fn update(&self, statement: &str, parameter: &Value) -> Result<u64> {
        self.execute(|session| write(session, |s| s.update(statement, parameter)))
    }

    pub fn delete(&self, statement: &str, parameter: &Value) -> Result<u64> {
        self.execute(|session| write(session, |s| s.delete(statement, parameter)))
    }
}

/// 写操作：成功提交，失败回滚
fn write<F>(session: &mut dyn SqlSession, op: F) -> Result<u64>
where
    F: FnOnce(&mut dyn SqlSession) -> Result<u64>,
{
    match op(session) {
        Ok(affected) => {
            session.commit()?;
            Ok(affected)
        }
        Err(err) => {
            // 保留原始错误
            let _ = session.rollback();
            Err(err)
        }
    }
}

//! 测试工具模块
//!
//! 提供内存会话工厂和示例映射器，会话操作记录在共享日志中

use crate::mapper::types::Mapper;
use crate::session::{
    Configuration, DataSource, Environment, SessionError, SqlSession, SqlSessionFactory,
    SqlSessionTemplate,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type SessionResult<T> = std::result::Result<T, SessionError>;

/// 内存数据源
#[derive(Debug)]
pub struct MemoryDataSource {
    id: String,
}

impl MemoryDataSource {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl DataSource for MemoryDataSource {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 内存会话：以 `fail` 开头的写语句返回错误，查询返回语句名
pub struct MemorySession {
    log: Arc<Mutex<Vec<String>>>,
}

impl MemorySession {
    fn record(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }

    fn write(&self, kind: &str, statement: &str) -> SessionResult<u64> {
        self.record(format!("{} {}", kind, statement));
        if statement.starts_with("fail") {
            return Err(SessionError::Execution(statement.to_string()));
        }
        Ok(1)
    }
}

impl SqlSession for MemorySession {
    fn select_one(&mut self, statement: &str, _parameter: &Value) -> SessionResult<Option<Value>> {
        self.record(format!("select_one {}", statement));
        Ok(Some(json!(statement)))
    }

    fn select_list(&mut self, statement: &str, _parameter: &Value) -> SessionResult<Vec<Value>> {
        self.record(format!("select_list {}", statement));
        Ok(vec![])
    }

    fn insert(&mut self, statement: &str, _parameter: &Value) -> SessionResult<u64> {
        self.write("insert", statement)
    }

    fn update(&mut self, statement: &str, _parameter: &Value) -> SessionResult<u64> {
        self.write("update", statement)
    }

    fn delete(&mut self, statement: &str, _parameter: &Value) -> SessionResult<u64> {
        self.write("delete", statement)
    }

    fn commit(&mut self) -> SessionResult<()> {
        self.record("commit".to_string());
        Ok(())
    }

    fn rollback(&mut self) -> SessionResult<()> {
        self.record("rollback".to_string());
        Ok(())
    }

    fn close(&mut self) {
        self.record("close".to_string());
    }
}

/// 内存会话工厂
pub struct MemorySessionFactory {
    configuration: Configuration,
    log: Arc<Mutex<Vec<String>>>,
}

impl MemorySessionFactory {
    /// 空配置的共享工厂
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self {
            configuration: Configuration::new(),
            log: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// 运行环境带默认数据源
    pub fn with_data_source(id: &str) -> Arc<Self> {
        let data_source: Arc<dyn DataSource> = Arc::new(MemoryDataSource::new(id));
        Arc::new(Self {
            configuration: Configuration::with_environment(Environment::new(
                "test",
                Some(data_source),
            )),
            log: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn shared() -> Arc<dyn SqlSessionFactory> {
        Self::in_memory()
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl SqlSessionFactory for MemorySessionFactory {
    fn open_session(
        &self,
        data_source: Option<&dyn DataSource>,
    ) -> SessionResult<Box<dyn SqlSession>> {
        let target = data_source.map(|ds| ds.id()).unwrap_or("default");
        self.log.lock().unwrap().push(format!("open {}", target));
        Ok(Box::new(MemorySession {
            log: self.log.clone(),
        }))
    }

    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

/// 示例映射器
#[derive(Debug)]
pub struct UserMapper {
    template: SqlSessionTemplate,
}

impl UserMapper {
    pub fn find_name(&self, id: i64) -> SessionResult<Option<Value>> {
        self.template.select_one("user.findName", &json!({ "id": id }))
    }
}

impl Mapper for UserMapper {
    fn bind(template: SqlSessionTemplate) -> Self {
        Self { template }
    }
}

/// 示例映射器
#[derive(Debug)]
pub struct AuditMapper {
    template: SqlSessionTemplate,
}

impl AuditMapper {
    pub fn record(&self, event: &str) -> SessionResult<u64> {
        self.template.insert("audit.record", &json!({ "event": event }))
    }
}

impl Mapper for AuditMapper {
    fn bind(template: SqlSessionTemplate) -> Self {
        Self { template }
    }
}

//! 集成测试公共工具

use mapper_factory::{
    Configuration, DataSource, Environment, Mapper, SessionError, SqlSession, SqlSessionFactory,
    SqlSessionTemplate,
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug)]
pub struct NamedDataSource(pub &'static str);

impl DataSource for NamedDataSource {
    fn id(&self) -> &str {
        self.0
    }
}

/// 查询返回 `{"statement": ..., "data_source": ...}` 的会话
struct EchoSession {
    data_source: String,
}

impl SqlSession for EchoSession {
    fn select_one(&mut self, statement: &str, parameter: &Value) -> Result<Option<Value>, SessionError> {
        Ok(Some(json!({
            "statement": statement,
            "data_source": self.data_source,
            "parameter": parameter,
        })))
    }

    fn select_list(&mut self, statement: &str, parameter: &Value) -> Result<Vec<Value>, SessionError> {
        Ok(self.select_one(statement, parameter)?.into_iter().collect())
    }

    fn insert(&mut self, _statement: &str, _parameter: &Value) -> Result<u64, SessionError> {
        Ok(1)
    }

    fn update(&mut self, _statement: &str, _parameter: &Value) -> Result<u64, SessionError> {
        Ok(1)
    }

    fn delete(&mut self, _statement: &str, _parameter: &Value) -> Result<u64, SessionError> {
        Ok(0)
    }

    fn commit(&mut self) -> Result<(), SessionError> {
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), SessionError> {
        Ok(())
    }

    fn close(&mut self) {}
}

/// 统计打开会话次数的会话工厂
pub struct EchoSessionFactory {
    configuration: Configuration,
    opened: AtomicUsize,
}

impl EchoSessionFactory {
    pub fn new(environment_data_source: &'static str) -> Arc<Self> {
        let data_source: Arc<dyn DataSource> = Arc::new(NamedDataSource(environment_data_source));
        Arc::new(Self {
            configuration: Configuration::with_environment(Environment::new(
                "integration",
                Some(data_source),
            )),
            opened: AtomicUsize::new(0),
        })
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl SqlSessionFactory for EchoSessionFactory {
    fn open_session(
        &self,
        data_source: Option<&dyn DataSource>,
    ) -> Result<Box<dyn SqlSession>, SessionError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(EchoSession {
            data_source: data_source.map(|ds| ds.id().to_string()).unwrap_or_default(),
        }))
    }

    fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

pub struct AccountMapper {
    template: SqlSessionTemplate,
}

impl AccountMapper {
    pub fn find(&self, id: i64) -> Result<Option<Value>, SessionError> {
        self.template.select_one("account.find", &json!({ "id": id }))
    }
}

impl Mapper for AccountMapper {
    fn bind(template: SqlSessionTemplate) -> Self {
        Self { template }
    }
}

pub struct OrderMapper {
    template: SqlSessionTemplate,
}

impl OrderMapper {
    pub fn list_for(&self, account: i64) -> Result<Vec<Value>, SessionError> {
        self.template
            .select_list("order.listFor", &json!({ "account": account }))
    }
}

impl Mapper for OrderMapper {
    fn bind(template: SqlSessionTemplate) -> Self {
        Self { template }
    }
}

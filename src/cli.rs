//! CLI 参数定义

use crate::error::{FactoryError, Result};
use crate::mapper::definition::MapperDefinitions;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// mapperctl - 映射器定义检查工具
#[derive(Parser)]
#[command(
    name = "mapperctl",
    version,
    about = "映射器定义检查工具",
    long_about = "校验并列出 TOML 映射器定义文件"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 校验映射器定义文件
    Validate {
        /// 定义文件路径
        file: PathBuf,
    },

    /// 列出映射器定义
    List {
        /// 定义文件路径
        file: PathBuf,
        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 解析输出格式
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    match format.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(FactoryError::Config(format!(
            "不支持的输出格式: {} (可选: text, json)",
            other
        ))),
    }
}

/// 读取并校验定义文件，文件必须存在
pub fn read_definitions(path: &Path) -> Result<MapperDefinitions> {
    debug!(path = %path.display(), "读取映射器定义文件");
    let content = std::fs::read_to_string(path)?;
    MapperDefinitions::from_toml_str(&content)
}

/// 列表输出行
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DefinitionSummary {
    pub id: String,
    pub interface: String,
    pub add_to_config: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_factory: Option<String>,
}

pub fn summarize(definitions: &MapperDefinitions) -> Vec<DefinitionSummary> {
    definitions
        .mappers
        .iter()
        .map(|definition| DefinitionSummary {
            id: definition.id.clone(),
            interface: definition.interface.clone(),
            add_to_config: definitions.effective_add_to_config(definition),
            session_factory: definitions
                .effective_session_factory(definition)
                .map(str::to_string),
        })
        .collect()
}

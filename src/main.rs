//! mapperctl 主程序入口
//!
//! - 安静模式：默认无输出，成功静默
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use mapper_factory::cli::{self, Cli, Commands, OutputFormat};
use mapper_factory::Result;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_command(cli.command, cli.verbose) {
        e.report(cli.verbose);
        std::process::exit(1);
    }
}

/// 运行具体命令
fn run_command(command: Commands, verbose: bool) -> Result<()> {
    match command {
        Commands::Validate { file } => {
            let definitions = cli::read_definitions(&file)?;
            if verbose {
                println!(
                    "✓ {} 校验通过，共 {} 个映射器定义",
                    file.display(),
                    definitions.mappers.len()
                );
            }
        }

        Commands::List { file, format } => {
            let output_format = cli::parse_format(&format)?;
            let definitions = cli::read_definitions(&file)?;
            let summaries = cli::summarize(&definitions);

            match output_format {
                OutputFormat::Text => {
                    for summary in &summaries {
                        match &summary.session_factory {
                            Some(name) => println!(
                                "{}\t{}\tadd_to_config={}\tsession_factory={}",
                                summary.id, summary.interface, summary.add_to_config, name
                            ),
                            None => println!(
                                "{}\t{}\tadd_to_config={}",
                                summary.id, summary.interface, summary.add_to_config
                            ),
                        }
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&summaries)?);
                }
            }
        }
    }

    Ok(())
}

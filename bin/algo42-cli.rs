use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use algo42::client::{CliArgs, OutputFormatter};
use algo42::commands::CommandRegistry;
use algo42::config::LoggingConfig;
use algo42::{Algo42Config, Graph, Result};
use tracing::{info, Level};

fn main() -> Result<()> {
    let args = CliArgs::parse_args();

    // 验证参数
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // 生成默认配置文件
    if args.generate_config {
        let config = Algo42Config::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        println!("📝 You can edit this file and rerun the CLI.");
        return Ok(());
    }

    // 加载配置，命令行参数覆盖配置文件
    let mut config = Algo42Config::from_file(&args.config)?;
    if let Some(log_level) = &args.log_level {
        config.logging.level = log_level.clone();
    }
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging);

    // 构建演示图：来自 JSON 边表文件或内置示例图
    let graph = match &args.graph {
        Some(path) => {
            info!("📈 Loading demo graph from {}", path);
            Graph::load_json(Path::new(path))?
        }
        None => Graph::sample(),
    };

    let registry = CommandRegistry::new(Arc::new(graph), config.demo.clone());

    if args.should_run_interactive() {
        run_interactive_mode(&registry)?;
    } else {
        run_command_mode(&registry, &args.command)?;
    }

    Ok(())
}

/// 直接命令模式：执行一条命令后退出
fn run_command_mode(registry: &CommandRegistry, command: &[String]) -> Result<()> {
    let response = registry.execute(&command[0], &command[1..])?;
    println!("{}", OutputFormatter::format_response(&response));
    Ok(())
}

/// 交互模式：循环读取命令并执行
fn run_interactive_mode(registry: &CommandRegistry) -> Result<()> {
    println!("{}", OutputFormatter::format_banner());
    println!();

    let stdin = io::stdin();

    loop {
        // 显示提示符
        print!("{}", OutputFormatter::format_prompt());
        io::stdout().flush()?;

        // 读取用户输入
        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!();
                break;
            }
            Ok(_) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }

                let parts: Vec<String> =
                    input.split_whitespace().map(str::to_string).collect();

                // 处理特殊命令
                match parts[0].to_uppercase().as_str() {
                    "QUIT" | "EXIT" => break,
                    "HELP" => {
                        println!(
                            "{}",
                            OutputFormatter::format_help_message(&registry.help_text())
                        );
                    }
                    _ => {
                        // 执行普通命令，错误不中断交互循环
                        match registry.execute(&parts[0], &parts[1..]) {
                            Ok(response) => {
                                println!("{}", OutputFormatter::format_response(&response));
                            }
                            Err(e) => {
                                eprintln!("{}", OutputFormatter::format_error(&e.to_string()));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match config.output.as_str() {
        "file" => {
            if let Some(log_file) = &config.log_file {
                // 确保日志目录存在
                if let Some(parent) = log_file.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }

                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_file)
                    .expect("Failed to open log file");

                tracing_subscriber::registry()
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_target(false),
                    )
                    .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                    .init();
            }
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }
}

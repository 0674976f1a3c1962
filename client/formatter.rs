use colored::*;

pub struct OutputFormatter;

impl OutputFormatter {
    /// 格式化命令的执行结果
    ///
    /// 以 "(error)" 开头的行（注册表里未知命令的回复）整体标红，
    /// 其余输出中 "key: value" 形式的前缀标青色。
    pub fn format_response(response: &str) -> String {
        if response.starts_with("(error)") {
            return response.red().to_string();
        }

        response
            .lines()
            .map(Self::format_line)
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn format_line(line: &str) -> String {
        // 行首的标签部分（冒号之前）上色，缩进行保持原样
        if line.starts_with(' ') {
            return line.to_string();
        }
        match line.split_once(':') {
            Some((label, rest)) => format!("{}:{}", label.cyan(), rest),
            None => line.to_string(),
        }
    }

    /// 格式化致命错误
    pub fn format_error(err: &str) -> String {
        format!("{} {}", "(error)".red(), err)
    }

    /// 交互模式的提示符
    pub fn format_prompt() -> String {
        format!("{} ", "algo42>".green())
    }

    /// 交互模式的欢迎横幅
    pub fn format_banner() -> String {
        format!(
            "{}\n{}",
            "algo42 interactive mode".bold(),
            "Type 'HELP' for available commands, 'QUIT' to exit."
        )
    }

    /// 帮助信息，正文由命令注册表生成
    pub fn format_help_message(help_text: &str) -> String {
        let mut lines = help_text.lines();
        let header = lines.next().unwrap_or("available commands:");
        let rest: Vec<&str> = lines.collect();
        format!("{}\n{}", header.bold(), rest.join("\n"))
    }
}

//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! PDF 直接写入标准输出时，状态信息改走标准错误，保证字节流干净。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

/// 输出通道
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

fn emit(stream: Stream, tag: ColoredString, msg: &str) {
    match stream {
        Stream::Stdout => println!("{} {}", tag, msg),
        Stream::Stderr => eprintln!("{} {}", tag, msg),
    }
}

/// 打印成功消息
pub fn print_success(stream: Stream, msg: &str) {
    emit(stream, "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    emit(Stream::Stderr, "[ERR]".red().bold(), msg);
}

/// 打印信息消息
pub fn print_info(stream: Stream, msg: &str) {
    emit(stream, "[*]".blue().bold(), msg);
}

/// 打印计算结果
pub fn print_result(stream: Stream, msg: &str) {
    emit(stream, "[=>]".green().bold(), &msg.bold().to_string());
}

/// 原样打印多行文本
pub fn print_block(stream: Stream, text: &str) {
    match stream {
        Stream::Stdout => print!("{}", text),
        Stream::Stderr => eprint!("{}", text),
    }
}

/// 打印标题栏
pub fn print_header(stream: Stream, title: &str) {
    let line = "─".repeat(60);
    match stream {
        Stream::Stdout => {
            println!("\n{}", line.dimmed());
            println!("  {}", title.bold());
            println!("{}\n", line.dimmed());
        }
        Stream::Stderr => {
            eprintln!("\n{}", line.dimmed());
            eprintln!("  {}", title.bold());
            eprintln!("{}\n", line.dimmed());
        }
    }
}

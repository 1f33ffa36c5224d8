// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliOutputFormat, CliScore};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "readability",
    version = crate::VERSION,
    about = "テキストの可読性スコア (ARI / FK / SMOG / CL) を算出するツール"
)]
pub struct Args {
    /// 解析するテキストファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// 算出するスコア（指定時は対話入力を省略）
    #[arg(long, value_enum, ignore_case = true, help_heading = "スコア")]
    pub score: Option<CliScore>,

    /// 出力フォーマット。json は対話入力を行わず、--score 省略時は all を算出
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ログを詳細化（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}

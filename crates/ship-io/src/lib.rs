//! # Ship IO
//!
//! 分段文字輸入的讀取與出貨摘要輸出

pub mod input;
pub mod report;

// Re-export 主要類型
pub use input::{Section, ShipmentInput};
pub use report::{render_json, render_summary, write_summary};

/// 輸入輸出錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("第 {line} 行（{section}）解析失敗: {reason}")]
    Parse {
        line: usize,
        section: Section,
        reason: String,
    },

    #[error("檔案讀寫失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("參考資料錯誤: {0}")]
    Catalog(#[from] ship_core::ShipError),

    #[error("JSON 序列化失敗: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;

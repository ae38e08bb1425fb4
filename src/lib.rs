// 核心模块
pub mod cli;
pub mod core;
pub mod error;
pub mod infrastructure;

// 重新导出常用类型
pub use cli::*;
pub use error::*;
pub use infrastructure::*;
pub use self::core::selection::*;
// 使用命名空间导入常量，避免冲突
pub use self::core::constants as app_constants;

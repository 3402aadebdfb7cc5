//! 工具函数模块

pub mod date;
pub mod text;

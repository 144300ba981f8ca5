/// ==============================
///       项目级常量
/// ==============================

/// 项目名称（例如日志前缀）
pub const PROJECT_NAME: &str = "zz-headers";

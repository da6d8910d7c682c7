//! 优惠筛选引擎
//!
//! 对某张卡的全部优惠记录（按插入顺序）做纯计算，不访问数据库:
//! - `validation`: 拒绝三个维度全为 0 的限制查询
//! - `availability`: 按有效期 `[start, end)` 过滤
//! - `selector`: 通用最优 + 按限制匹配排序

pub mod availability;
pub mod selector;
pub mod validation;

pub use availability::available;
pub use selector::{
    select_all_available, select_constrained, select_general_best, select_with_constraints,
};
pub use validation::{Constraints, matches_dimension, validate_constraints};

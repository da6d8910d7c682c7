use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        // 只读查询接口，允许任意来源
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

// Route path constants - single source of truth for all API paths

pub const SHOPPING_LIST: &str = "/shopping-list";
pub const SHOPPING_LIST_ITEM: &str = "/shopping-list/{*index}";
// Wildcards do not match an empty tail
pub const SHOPPING_LIST_ITEM_EMPTY: &str = "/shopping-list/";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

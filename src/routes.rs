//! Storefront route registry.
//!
//! The concrete URL surface of the e-commerce shell. Dashboard, Cart, and
//! Orders require a session token; the catch-all NotFound entry is last,
//! which `RouteTable::new` enforces.

use crate::table::RouteTable;
use crate::types::route::RouteDefinition;

/// Build the storefront route table.
pub fn storefront_table() -> RouteTable {
    RouteTable::new(vec![
        RouteDefinition::new("/", "Home", "views/Home").with_title("首页 - 电商微服务系统"),
        RouteDefinition::new("/login", "Login", "views/Login")
            .with_title("登录 - 电商微服务系统"),
        RouteDefinition::new("/dashboard", "Dashboard", "views/Dashboard")
            .with_title("控制台 - 电商微服务系统")
            .protected(),
        RouteDefinition::new("/services", "Services", "views/Services")
            .with_title("微服务测试 - 电商微服务系统"),
        RouteDefinition::new("/products", "Products", "views/Products")
            .with_title("商品管理 - 电商微服务系统"),
        RouteDefinition::new("/cart", "Cart", "views/Cart")
            .with_title("购物车 - 电商微服务系统")
            .protected(),
        RouteDefinition::new("/orders", "Orders", "views/Orders")
            .with_title("订单管理 - 电商微服务系统")
            .protected(),
        RouteDefinition::new("/*", "NotFound", "views/NotFound")
            .with_title("页面未找到 - 电商微服务系统"),
    ])
    .expect("storefront table is statically valid")
}

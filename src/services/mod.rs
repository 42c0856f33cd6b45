pub mod bill_service;
pub mod booking_service;
pub mod customer_service;
pub mod order_service;
pub mod payment_service;
pub mod table_service;
pub mod user_service;

pub use bill_service::*;
pub use booking_service::*;
pub use customer_service::*;
pub use order_service::*;
pub use payment_service::*;
pub use table_service::*;
pub use user_service::*;

use sea_orm::DatabaseConnection;

/// 会话期间持有的全部服务, 共享同一个连接池
pub struct Services {
    pub users: UserService,
    pub customers: CustomerService,
    pub tables: TableService,
    pub orders: OrderService,
    pub bills: BillService,
    pub payments: PaymentService,
    pub bookings: BookingService,
}

impl Services {
    pub fn new(pool: DatabaseConnection) -> Self {
        let tables = TableService::new(pool.clone());
        Self {
            users: UserService::new(pool.clone()),
            customers: CustomerService::new(pool.clone()),
            orders: OrderService::new(pool.clone(), tables.clone()),
            bills: BillService::new(pool.clone()),
            payments: PaymentService::new(pool.clone()),
            bookings: BookingService::new(pool),
            tables,
        }
    }
}

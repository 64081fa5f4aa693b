pub mod delegate;
pub mod notification;

pub struct ResourcesRepo {
    db_pool: crate::DbPool,
}

impl ResourcesRepo {
    pub fn new(db_pool: crate::DbPool) -> Self {
        Self { db_pool }
    }

    pub fn pool(&self) -> crate::DbPool {
        self.db_pool.clone()
    }
}

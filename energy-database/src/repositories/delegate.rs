use super::ResourcesRepo;
use crate::{
    dao::delegate,
    entities::delegate::{
        DelegateRecordEntity, NewDelegateRecordEntity, NewUnfreezeRecordEntity,
        UnfreezeRecordEntity,
    },
    pagination::Pagination,
};

pub struct DelegateRepo {
    repo: ResourcesRepo,
}

impl DelegateRepo {
    pub fn new(db_pool: crate::DbPool) -> Self {
        Self {
            repo: ResourcesRepo::new(db_pool),
        }
    }

    pub async fn add_delegate(&self, record: NewDelegateRecordEntity) -> Result<i64, crate::Error> {
        let pool = self.repo.pool();
        Ok(delegate::add_delegate(record, &*pool).await?)
    }

    pub async fn update_delegate_status(&self, id: i64, status: i16) -> Result<(), crate::Error> {
        let pool = self.repo.pool();
        Ok(delegate::update_delegate_status(id, status, &*pool).await?)
    }

    pub async fn find_delegate_by_id(&self, id: i64) -> Result<DelegateRecordEntity, crate::Error> {
        let pool = self.repo.pool();
        delegate::find_delegate_by_id(id, &*pool)
            .await?
            .ok_or(crate::Error::NotFound(format!("delegate record {id}")))
    }

    pub async fn delegate_list(
        &self,
        owner_address: &str,
        resource_type: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Pagination<DelegateRecordEntity>, crate::Error> {
        let pool = self.repo.pool();
        Ok(delegate::delegate_list(owner_address, resource_type, page, page_size, &pool).await?)
    }

    pub async fn add_unfreeze(&self, record: NewUnfreezeRecordEntity) -> Result<(), crate::Error> {
        let pool = self.repo.pool();
        Ok(delegate::add_unfreeze(record, &*pool).await?)
    }

    pub async fn unfreeze_list(
        &self,
        owner: &str,
        resource_type: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Pagination<UnfreezeRecordEntity>, crate::Error> {
        let pool = self.repo.pool();
        Ok(delegate::unfreeze_list(owner, resource_type, page, page_size, &pool).await?)
    }
}

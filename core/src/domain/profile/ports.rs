use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Profile};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_by_device_id(
        &self,
        device_id: String,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;

    fn create(&self, profile: Profile) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}

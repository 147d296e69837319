use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::Profile, ports::ProfileRepository},
};

/// Resolve a device id to its profile, creating one on first sight.
pub async fn get_or_create_profile<P>(
    profile_repository: &P,
    device_id: &str,
) -> Result<Profile, CoreError>
where
    P: ProfileRepository,
{
    if let Some(profile) = profile_repository
        .get_by_device_id(device_id.to_string())
        .await?
    {
        return Ok(profile);
    }

    profile_repository
        .create(Profile::new(device_id.to_string()))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ports::MockProfileRepository;

    #[tokio::test]
    async fn test_existing_profile_is_returned() {
        let existing = Profile::new("device-1".to_string());
        let expected_id = existing.id;

        let mut repo = MockProfileRepository::new();
        repo.expect_get_by_device_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let profile = get_or_create_profile(&repo, "device-1").await.unwrap();
        assert_eq!(profile.id, expected_id);
    }

    #[tokio::test]
    async fn test_unknown_device_creates_profile() {
        let mut repo = MockProfileRepository::new();
        repo.expect_get_by_device_id().returning(|_| Ok(None));
        repo.expect_create().returning(Ok);

        let profile = get_or_create_profile(&repo, "device-2").await.unwrap();
        assert_eq!(profile.device_id, "device-2");
    }
}

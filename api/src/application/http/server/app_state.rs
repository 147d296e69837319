use std::sync::Arc;

use larder_core::{
    application::LarderService, infrastructure::profile::PostgresProfileRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LarderService,
    pub profile_repository: Arc<PostgresProfileRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: LarderService,
        profile_repository: PostgresProfileRepository,
    ) -> Self {
        Self {
            args,
            service,
            profile_repository: Arc::new(profile_repository),
        }
    }
}

use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::Config,
    gateway::{
        AuthGateway, CollaborationStore, UserDirectory,
        supabase::{SupabaseAuth, SupabaseDirectory, SupabaseStore},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
    pub auth: Arc<dyn AuthGateway>,
    pub directory: Arc<dyn UserDirectory>,
    pub collaborations: Arc<dyn CollaborationStore>,
}

impl AppState {
    pub fn init(config: Config) -> Self {
        let http = Client::new();
        let auth = Arc::new(SupabaseAuth::new(http.clone(), &config));
        let directory = Arc::new(SupabaseDirectory::new(http.clone(), &config));
        let collaborations = Arc::new(SupabaseStore::new(http.clone(), &config));

        Self {
            config: Arc::new(config),
            http,
            auth,
            directory,
            collaborations,
        }
    }

    /// Same state with the platform gateways swapped out, for test doubles.
    pub fn with_gateways(
        config: Config,
        auth: Arc<dyn AuthGateway>,
        directory: Arc<dyn UserDirectory>,
        collaborations: Arc<dyn CollaborationStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            http: Client::new(),
            auth,
            directory,
            collaborations,
        }
    }
}

pub mod store_const {
    pub const PROFILE_TABLE: &str = "profiles";
    pub const COLLABORATOR_TABLE: &str = "collaborators";
}

pub mod rates_const {
    pub const BASE_CURRENCY: &str = "EUR";
    pub const PROVIDER_SUCCESS: &str = "success";
    pub const UNKNOWN_ERROR: &str = "unknown-error";
}

pub mod cors_const {
    pub const ALLOW_ORIGIN: &str = "*";
    pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
}

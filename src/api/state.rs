use crate::store::StoreProvider;

pub struct AppState {
    pub provider: StoreProvider,
}

impl AppState {
    pub fn new(provider: StoreProvider) -> Self {
        Self { provider }
    }
}

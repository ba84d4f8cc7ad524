pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod handlers {
    pub mod fallback;
    pub mod health;
    pub mod user;
}

pub mod models {
    pub mod response;
    pub mod user;
}

pub mod stores {
    #[cfg(test)]
    pub mod failing_store;
    pub mod memory_store;
    pub mod mongo_store;
    pub mod user_store;
}

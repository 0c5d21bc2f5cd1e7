//! Feed metadata — the freshness timestamp attached to a snapshot.

pub mod wire {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    /// Raw meta payload: `{ "updated_at": "<ISO-8601>" }`.
    #[derive(Debug, Clone, Deserialize)]
    pub struct MetaResponse {
        pub updated_at: DateTime<Utc>,
    }

}

//! Diesel schema for task document persistence.

diesel::table! {
    /// Task documents keyed by store-assigned identifier.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Uuid,
        /// Task fields as a JSON document.
        document -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
